//! Mapping run attributes to formatting tags.

use runmark_core::{Tag, TagSet};

use crate::run::{FlatRun, RunProps, StyleResolver, UnderlinePattern, VerticalAlign};

/// Compute the set of formatting tags a character run wants open.
///
/// Pure and infallible: unresolved or empty style names simply contribute no
/// tag. The returned set is unordered; open ordering is the reconciler's
/// concern.
pub fn run_tags(run: &RunProps<'_>, styles: &dyn StyleResolver) -> TagSet {
    let mut tags = TagSet::empty();

    if run.is_bold() {
        tags.insert(Tag::Bold);
    }
    if run.is_italic() {
        tags.insert(Tag::Italic);
    }
    if run.is_strikethrough() {
        tags.insert(Tag::Strike);
    }

    match run {
        RunProps::Styled(styled) => {
            if styled.underline != UnderlinePattern::None {
                tags.insert(Tag::Underline);
            }

            // Sup/sub from the referenced style, when it resolves. The style
            // name may be an empty string, which resolves to nothing.
            if let Some(record) = styles.resolve_style(styled.style_name.unwrap_or("")) {
                add_vertical_align(&mut tags, record.vertical_align);
            }

            // Sup/sub on the run itself; independent of the style source.
            add_vertical_align(&mut tags, styled.vertical_align);
        }
        RunProps::Flat(flat) => {
            if flat.underline_code != 0 {
                tags.insert(Tag::Underline);
            }
            match flat.sub_super_index {
                FlatRun::ISS_SUPERSCRIPT => tags.insert(Tag::Superscript),
                FlatRun::ISS_SUBSCRIPT => tags.insert(Tag::Subscript),
                _ => {}
            }
        }
    }

    tags
}

fn add_vertical_align(tags: &mut TagSet, align: VerticalAlign) {
    match align {
        VerticalAlign::Superscript => tags.insert(Tag::Superscript),
        VerticalAlign::Subscript => tags.insert(Tag::Subscript),
        VerticalAlign::Baseline => {}
    }
}
