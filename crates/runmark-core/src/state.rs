//! The stack of currently open formatting tags.

use smallvec::SmallVec;

use crate::tag::{Tag, TagSet};

/// The ordered record of formatting tags currently open on the output
/// stream, outermost first (top of the stack = innermost tag).
///
/// Owned by exactly one document traversal; the reconciler mutates it in
/// place. Invariant: no tag appears twice. The stack is only ever grown
/// through [`crate::ensure_formatting`], which preserves that invariant.
#[derive(Debug, Clone, Default)]
pub struct FormattingState {
    stack: SmallVec<[Tag; 6]>,
}

impl FormattingState {
    /// Create an empty state (no tags open).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.stack.push(tag);
    }

    pub fn pop(&mut self) -> Option<Tag> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether any tag in the stack, at any depth, is a member of `set`.
    pub fn contains_any(&self, set: TagSet) -> bool {
        self.stack.iter().any(|tag| set.contains(*tag))
    }

    /// The set of tags currently open, nesting order erased.
    pub fn tags(&self) -> TagSet {
        self.stack.iter().copied().collect()
    }

    /// The open tags from outermost to innermost.
    pub fn as_slice(&self) -> &[Tag] {
        &self.stack
    }
}
