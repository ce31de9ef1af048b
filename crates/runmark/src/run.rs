//! The polymorphic character-run model.
//!
//! Word-processor documents come in two shapes here: the XML-based format,
//! where a run carries rich properties and may reference a named document
//! style, and the legacy flat binary format, where the same properties are
//! packed into numeric codes. The two shapes expose different capabilities,
//! so they are modeled as a tagged union rather than a shared superset
//! record; the style-resolution path only exists for the styled variant.

use indexmap::IndexMap;

/// Underline pattern of a styled run.
///
/// Only `None` vs. everything else matters for tag mapping; the concrete
/// pattern kinds are carried through for callers that render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlinePattern {
    #[default]
    None,
    Single,
    Double,
    Words,
    Dotted,
    Dash,
    Wave,
}

/// Superscript/subscript positioning of a run or style.
///
/// `Baseline` is the no-op value (the XML word format's own name for it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

/// A named document-level style, reduced to the properties runs inherit
/// for inline tag mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRecord {
    pub vertical_align: VerticalAlign,
}

/// Resolves style names against the document's style table.
///
/// Empty or unknown names yield `None`; resolution never fails.
pub trait StyleResolver {
    fn resolve_style(&self, name: &str) -> Option<&StyleRecord>;
}

/// A document style table preserving declaration order.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: IndexMap<String, StyleRecord>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: StyleRecord) {
        self.styles.insert(name.into(), record);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl StyleResolver for StyleTable {
    fn resolve_style(&self, name: &str) -> Option<&StyleRecord> {
        self.styles.get(name)
    }
}

/// A character run from the XML-based word format.
///
/// Superscript/subscript can come from the run itself or be inherited from
/// the referenced style; both sources are consulted during tag mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledRun<'a> {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: UnderlinePattern,
    pub vertical_align: VerticalAlign,
    /// Style reference; may be empty, which resolves to no record.
    pub style_name: Option<&'a str>,
}

/// A character run from the legacy flat binary format.
///
/// Underline and sub/superscript are numeric codes straight out of the
/// character properties record: underline 0 = none; sub/super index
/// 0 = none, 1 = superscript, 2 = subscript.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRun {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline_code: u8,
    pub sub_super_index: u8,
}

impl FlatRun {
    pub const ISS_NONE: u8 = 0;
    pub const ISS_SUPERSCRIPT: u8 = 1;
    pub const ISS_SUBSCRIPT: u8 = 2;
}

/// A character run in either document shape.
#[derive(Debug, Clone, Copy)]
pub enum RunProps<'a> {
    Styled(StyledRun<'a>),
    Flat(FlatRun),
}

impl<'a> RunProps<'a> {
    pub fn is_bold(&self) -> bool {
        match self {
            RunProps::Styled(run) => run.bold,
            RunProps::Flat(run) => run.bold,
        }
    }

    pub fn is_italic(&self) -> bool {
        match self {
            RunProps::Styled(run) => run.italic,
            RunProps::Flat(run) => run.italic,
        }
    }

    pub fn is_strikethrough(&self) -> bool {
        match self {
            RunProps::Styled(run) => run.strikethrough,
            RunProps::Flat(run) => run.strikethrough,
        }
    }
}

impl<'a> From<StyledRun<'a>> for RunProps<'a> {
    fn from(run: StyledRun<'a>) -> Self {
        RunProps::Styled(run)
    }
}

impl<'a> From<FlatRun> for RunProps<'a> {
    fn from(run: FlatRun) -> Self {
        RunProps::Flat(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_table_resolution() {
        let mut table = StyleTable::new();
        table.insert(
            "FootnoteReference",
            StyleRecord {
                vertical_align: VerticalAlign::Superscript,
            },
        );

        let record = table.resolve_style("FootnoteReference").unwrap();
        assert_eq!(record.vertical_align, VerticalAlign::Superscript);
        assert!(table.resolve_style("Heading1").is_none());
        assert!(table.resolve_style("").is_none());
    }

    #[test]
    fn test_shared_booleans_across_variants() {
        let styled = RunProps::from(StyledRun {
            bold: true,
            italic: true,
            ..Default::default()
        });
        let flat = RunProps::from(FlatRun {
            bold: true,
            italic: true,
            ..Default::default()
        });

        for run in [styled, flat] {
            assert!(run.is_bold());
            assert!(run.is_italic());
            assert!(!run.is_strikethrough());
        }
    }
}
