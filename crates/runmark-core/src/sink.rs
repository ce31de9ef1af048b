//! Output sink capability and the XHTML writer sink.
//!
//! The reconciler only needs the two operations in [`TagSink`]; anything that
//! can open and close named inline elements qualifies. [`XhtmlSink`] is the
//! writer-backed implementation used by the document extraction pipeline.

use std::io::{self, Write};

use crate::tag::Tag;

/// Error emitting markup to an underlying writer.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// A destination for tag open/close events.
///
/// Implementations emit one markup event per call, immediately; the
/// reconciler does no buffering. Errors propagate to the caller unchanged,
/// with no retry.
pub trait TagSink {
    type Error;

    fn open_tag(&mut self, tag: Tag) -> Result<(), Self::Error>;

    fn close_tag(&mut self, tag: Tag) -> Result<(), Self::Error>;
}

/// A [`TagSink`] that writes XHTML elements to an [`io::Write`].
///
/// Tag events become `<name>` / `</name>` with the exact names from
/// [`Tag::name`]. Run text goes through [`XhtmlSink::write_text`], which
/// escapes the XML-significant characters.
#[derive(Debug)]
pub struct XhtmlSink<W: Write> {
    writer: W,
}

impl<W: Write> XhtmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write character data, escaping `&`, `<` and `>`.
    pub fn write_text(&mut self, text: &str) -> Result<(), EmitError> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_all(b"&amp;")?,
                '<' => self.writer.write_all(b"&lt;")?,
                '>' => self.writer.write_all(b"&gt;")?,
                _ => {
                    let mut buf = [0u8; 4];
                    self.writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                }
            }
        }
        Ok(())
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TagSink for XhtmlSink<W> {
    type Error = EmitError;

    fn open_tag(&mut self, tag: Tag) -> Result<(), EmitError> {
        write!(self.writer, "<{}>", tag.name())?;
        Ok(())
    }

    fn close_tag(&mut self, tag: Tag) -> Result<(), EmitError> {
        write!(self.writer, "</{}>", tag.name())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(sink: XhtmlSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_open_close_names() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.open_tag(Tag::Superscript).unwrap();
        sink.close_tag(Tag::Superscript).unwrap();
        assert_eq!(output(sink), "<sup></sup>");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.write_text("a < b && c > d").unwrap();
        assert_eq!(output(sink), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_multibyte_text() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.write_text("x² ≤ y").unwrap();
        assert_eq!(output(sink), "x² ≤ y");
    }
}
