//! Reconciling the open-tag stack against a desired tag set.
//!
//! Runs of text change formatting frequently, and nested markup cannot close
//! an inner element without first closing everything opened above it. The
//! reconciler computes the close/open edit that takes the stack of currently
//! open tags to the tag set the next run wants, emitting each event to the
//! sink as it goes.

use crate::sink::TagSink;
use crate::state::FormattingState;
use crate::tag::TagSet;

/// Close tags until `state` holds only tags from `desired`, then open
/// whatever is still missing.
///
/// The close phase pops from the top for as long as *any* tag anywhere in the
/// stack is undesired. Tags that are themselves desired get closed too when
/// they sit above an undesired one; they are reopened in the open phase.
/// Opens happen in [`crate::Tag`] declaration order, which keeps event
/// sequences deterministic regardless of how `desired` was built.
///
/// `state` is mutated as events are emitted, not transactionally: if the sink
/// fails mid-sequence the error propagates immediately and `state` reflects
/// exactly the events that were emitted before the failure.
pub fn ensure_formatting<S: TagSink>(
    desired: TagSet,
    state: &mut FormattingState,
    sink: &mut S,
) -> Result<(), S::Error> {
    let undesired = desired.complement();

    while state.contains_any(undesired) {
        // contains_any on a non-empty match guarantees the pop succeeds.
        if let Some(tag) = state.pop() {
            sink.close_tag(tag)?;
        }
    }

    let to_open = desired.difference(state.tags());
    for tag in to_open.iter() {
        state.push(tag);
        sink.open_tag(tag)?;
    }

    Ok(())
}

/// Close every open formatting tag, top to bottom, leaving `state` empty.
///
/// Called once at end of document traversal.
pub fn close_formatting<S: TagSink>(
    state: &mut FormattingState,
    sink: &mut S,
) -> Result<(), S::Error> {
    ensure_formatting(TagSet::empty(), state, sink)
}
