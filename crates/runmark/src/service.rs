//! RunConverter - the main entry point for run-to-markup conversion.

use runmark_core::{close_formatting, ensure_formatting, FormattingState, TagSink};

use crate::mapper::run_tags;
use crate::run::{RunProps, StyleRecord, StyleResolver};

/// A [`StyleResolver`] with no styles; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleResolver for NoStyles {
    fn resolve_style(&self, _name: &str) -> Option<&StyleRecord> {
        None
    }
}

static NO_STYLES: NoStyles = NoStyles;

/// Drives character runs through the formatting reconciler.
///
/// Owns the stack of open tags and the output sink for one document
/// traversal. Call [`write_run`](Self::write_run) as each run begins and
/// [`finish`](Self::finish) once at end of document; the sink is reachable
/// in between for emitting the run's text. A sink error is fatal to the
/// conversion — the converter performs no retry or rollback.
pub struct RunConverter<'s, S: TagSink> {
    styles: &'s dyn StyleResolver,
    state: FormattingState,
    sink: S,
}

impl<S: TagSink> RunConverter<'static, S> {
    /// Create a converter for a document without a style table.
    pub fn new(sink: S) -> Self {
        Self::with_styles(sink, &NO_STYLES)
    }
}

impl<'s, S: TagSink> RunConverter<'s, S> {
    /// Create a converter resolving style references against `styles`.
    pub fn with_styles(sink: S, styles: &'s dyn StyleResolver) -> Self {
        Self {
            styles,
            state: FormattingState::new(),
            sink,
        }
    }

    /// Bring the open tags in line with what `run` wants.
    pub fn write_run(&mut self, run: &RunProps<'_>) -> Result<(), S::Error> {
        let desired = run_tags(run, self.styles);
        ensure_formatting(desired, &mut self.state, &mut self.sink)
    }

    /// Close every open tag. Call once when document traversal ends.
    pub fn finish(&mut self) -> Result<(), S::Error> {
        close_formatting(&mut self.state, &mut self.sink)
    }

    /// The tags currently open, outermost first.
    pub fn open_tags(&self) -> &FormattingState {
        &self.state
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the converter and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{FlatRun, StyleTable, StyledRun, UnderlinePattern, VerticalAlign};
    use runmark_core::XhtmlSink;

    fn output<'s>(converter: RunConverter<'s, XhtmlSink<Vec<u8>>>) -> String {
        String::from_utf8(converter.into_sink().into_inner()).unwrap()
    }

    #[test]
    fn test_single_bold_run() {
        let mut converter = RunConverter::new(XhtmlSink::new(Vec::new()));

        let run = RunProps::from(FlatRun {
            bold: true,
            ..Default::default()
        });
        converter.write_run(&run).unwrap();
        converter.sink_mut().write_text("hello").unwrap();
        converter.finish().unwrap();

        assert_eq!(output(converter), "<b>hello</b>");
    }

    #[test]
    fn test_formatting_toggles_across_runs() {
        let mut converter = RunConverter::new(XhtmlSink::new(Vec::new()));

        let bold_italic = RunProps::from(FlatRun {
            bold: true,
            italic: true,
            ..Default::default()
        });
        let bold = RunProps::from(FlatRun {
            bold: true,
            ..Default::default()
        });

        converter.write_run(&bold_italic).unwrap();
        converter.sink_mut().write_text("both").unwrap();
        converter.write_run(&bold).unwrap();
        converter.sink_mut().write_text(" bold").unwrap();
        converter.finish().unwrap();

        assert_eq!(output(converter), "<b><i>both</i> bold</b>");
    }

    #[test]
    fn test_identical_adjacent_runs_emit_no_tags() {
        let mut converter = RunConverter::new(XhtmlSink::new(Vec::new()));

        let run = RunProps::from(StyledRun {
            underline: UnderlinePattern::Single,
            ..Default::default()
        });
        converter.write_run(&run).unwrap();
        converter.sink_mut().write_text("one").unwrap();
        converter.write_run(&run).unwrap();
        converter.sink_mut().write_text("two").unwrap();
        converter.finish().unwrap();

        assert_eq!(output(converter), "<u>onetwo</u>");
    }

    #[test]
    fn test_style_inherited_superscript() {
        let mut styles = StyleTable::new();
        styles.insert(
            "FootnoteReference",
            StyleRecord {
                vertical_align: VerticalAlign::Superscript,
            },
        );
        let mut converter = RunConverter::with_styles(XhtmlSink::new(Vec::new()), &styles);

        let plain = RunProps::from(StyledRun::default());
        let marker = RunProps::from(StyledRun {
            style_name: Some("FootnoteReference"),
            ..Default::default()
        });

        converter.write_run(&plain).unwrap();
        converter.sink_mut().write_text("note").unwrap();
        converter.write_run(&marker).unwrap();
        converter.sink_mut().write_text("1").unwrap();
        converter.finish().unwrap();

        assert_eq!(output(converter), "note<sup>1</sup>");
    }

    #[test]
    fn test_finish_on_fresh_converter_is_a_no_op() {
        let mut converter = RunConverter::new(XhtmlSink::new(Vec::new()));
        converter.finish().unwrap();
        assert!(converter.open_tags().is_empty());
        assert_eq!(output(converter), "");
    }

    #[test]
    fn test_open_tags_track_the_stack() {
        let mut converter = RunConverter::new(XhtmlSink::new(Vec::new()));
        let run = RunProps::from(FlatRun {
            bold: true,
            sub_super_index: FlatRun::ISS_SUPERSCRIPT,
            ..Default::default()
        });

        converter.write_run(&run).unwrap();
        assert_eq!(converter.open_tags().len(), 2);

        converter.finish().unwrap();
        assert!(converter.open_tags().is_empty());
    }
}
