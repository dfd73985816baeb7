//! Recursion in the parser and in the tree walker runs on a stack that grows
//! on demand. How deep a program may go is decided by [`Limits`], never by the
//! size of the calling thread's stack.
//!
//! [`Limits`]: crate::Limits

/// Space left below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;
/// Size of each new segment.
const SEGMENT: usize = 4 * 1024 * 1024;

/// Run `f`, switching to a fresh stack segment first if this one is nearly full.
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R { stacker::maybe_grow(RED_ZONE, SEGMENT, f) }
