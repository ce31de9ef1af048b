//! runmark-core - inline formatting tags and stack reconciliation
//!
//! This crate provides the shared vocabulary and the reconciliation engine
//! for converting per-run formatting attributes into minimal, correctly
//! nested inline markup events. It is consumed by `runmark`, which maps
//! word-processor character runs onto the tag sets reconciled here.
//!
//! # Architecture
//!
//! ```text
//! desired TagSet ──▶ ┌──────────────────┐ ──▶ open/close events ──▶ TagSink
//!                    │ ensure_formatting │
//! FormattingState ◀──│  (stack edits)    │
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use runmark_core::{close_formatting, ensure_formatting, FormattingState, Tag, TagSet, XhtmlSink};
//!
//! let mut state = FormattingState::new();
//! let mut sink = XhtmlSink::new(Vec::new());
//!
//! ensure_formatting(TagSet::from([Tag::Bold, Tag::Italic]), &mut state, &mut sink)?;
//! sink.write_text("bold italic")?;
//! ensure_formatting(TagSet::from([Tag::Bold]), &mut state, &mut sink)?;
//! sink.write_text(" just bold")?;
//! close_formatting(&mut state, &mut sink)?;
//!
//! let xhtml = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(xhtml, "<b><i>bold italic</i> just bold</b>");
//! # Ok::<(), runmark_core::EmitError>(())
//! ```

mod reconcile;
mod sink;
mod state;
mod tag;

pub use reconcile::{close_formatting, ensure_formatting};
pub use sink::{EmitError, TagSink, XhtmlSink};
pub use state::FormattingState;
pub use tag::{Tag, TagSet};
