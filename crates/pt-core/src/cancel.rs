//! Cooperative cancellation for long-running searches.
//!
//! # Why this exists
//!
//! The original visualizer stopped an in-flight search through a mutable
//! global flag, which breaks the moment two searches run concurrently.
//! `CancelToken` replaces that with an explicit handle: the caller keeps one
//! clone, passes another into the search, and flips it from any thread.
//! Algorithms check the token once per expansion iteration and return their
//! partial trace with a `Cancelled` status — cancellation is an ordinary
//! outcome, never an error.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Clonable cancellation handle shared between a caller and a search.
///
/// All clones observe the same flag.  A fresh token (or `Default`) is never
/// cancelled; once [`cancel`](Self::cancel) is called the token stays
/// cancelled forever — there is no reset, start a new search with a new
/// token instead.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal every holder of this token to stop at the next check point.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// `true` once any clone has called [`cancel`](Self::cancel).
    ///
    /// Relaxed ordering is sufficient: the flag is a latch, and a search that
    /// misses the store by one iteration simply stops one expansion later.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
