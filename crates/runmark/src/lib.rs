//! # runmark
//!
//! Convert word-processor character runs to inline XHTML markup.
//!
//! Word-processing documents store formatting per run: a maximal span of
//! text sharing one set of attributes. Emitting a fresh element for every
//! attribute of every run produces bloated, badly nested markup, so this
//! library maps each run to an abstract tag set and reconciles it against
//! the stack of currently open tags, emitting only the closes and opens
//! needed to get there.
//!
//! Two run shapes are supported: the XML-based word format (rich properties
//! plus named style references) and the legacy flat binary format (numeric
//! codes). See [`RunProps`].
//!
//! ## Example
//!
//! ```rust
//! use runmark::{convert_runs, FlatRun, NoStyles, RunProps};
//!
//! let runs = [
//!     (RunProps::from(FlatRun { bold: true, ..Default::default() }), "E = mc"),
//!     (RunProps::from(FlatRun { bold: true, sub_super_index: 1, ..Default::default() }), "2"),
//! ];
//!
//! let out = convert_runs(runs, &NoStyles, Vec::new()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "<b>E = mc<sup>2</sup></b>");
//! ```

mod mapper;
mod run;
mod service;

pub use mapper::run_tags;
pub use run::{
    FlatRun, RunProps, StyleRecord, StyleResolver, StyleTable, StyledRun, UnderlinePattern,
    VerticalAlign,
};
pub use service::{NoStyles, RunConverter};

// Re-export the core vocabulary so most callers need only this crate.
pub use runmark_core::{
    close_formatting, ensure_formatting, EmitError, FormattingState, Tag, TagSet, TagSink,
    XhtmlSink,
};

use std::io;

/// Error type for runmark operations
#[derive(Debug, thiserror::Error)]
pub enum RunmarkError {
    #[error("markup emission failed: {0}")]
    Emit(#[from] EmitError),
}

pub type Result<T> = std::result::Result<T, RunmarkError>;

/// Convert a sequence of runs and their text to XHTML in one call.
///
/// Convenience wrapper around [`RunConverter`] for callers that already have
/// the whole document's runs in hand; returns the writer with the markup
/// written to it.
pub fn convert_runs<'a, W, I>(runs: I, styles: &dyn StyleResolver, writer: W) -> Result<W>
where
    W: io::Write,
    I: IntoIterator<Item = (RunProps<'a>, &'a str)>,
{
    let mut converter = RunConverter::with_styles(XhtmlSink::new(writer), styles);
    for (run, text) in runs {
        converter.write_run(&run)?;
        converter.sink_mut().write_text(text)?;
    }
    converter.finish()?;
    Ok(converter.into_sink().into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_runs_mixed_formatting() {
        let runs = [
            (
                RunProps::from(StyledRun {
                    bold: true,
                    italic: true,
                    ..Default::default()
                }),
                "both",
            ),
            (
                RunProps::from(StyledRun {
                    bold: true,
                    underline: UnderlinePattern::Single,
                    ..Default::default()
                }),
                "bold underlined",
            ),
            (RunProps::from(StyledRun::default()), " plain & done"),
        ];

        let out = convert_runs(runs, &NoStyles, Vec::new()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<b><i>both</i><u>bold underlined</u></b> plain &amp; done"
        );
    }

    #[test]
    fn test_convert_runs_empty_document() {
        let runs: [(RunProps<'_>, &str); 0] = [];
        let out = convert_runs(runs, &NoStyles, Vec::new()).unwrap();
        assert!(out.is_empty());
    }
}
