//! Cooperative cancellation for long-running exports
//!
//! # Design Philosophy
//!
//! An export checks for cancellation at explicit poll points chosen by the
//! running operation (once per output row), never preemptively. This keeps
//! the guarantee that rows are never partially written: cancellation takes
//! effect only *between* rows.
//!
//! The probe is the only interface the exporter requires from its hosting
//! environment. Embedders that already have an interrupt mechanism implement
//! [`CancelProbe`] on top of it; everyone else uses [`CancelToken`].
//!
//! # Quick Start
//!
//! ```rust
//! use matwrite_rs::cancel::{CancelProbe, CancelToken};
//!
//! let token = CancelToken::new();
//! assert!(!token.is_cancelled());
//!
//! // Another thread (or a signal handler) requests cancellation:
//! let remote = token.clone();
//! remote.cancel();
//!
//! assert!(token.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Boolean-returning cancellation probe.
///
/// Implementations must be cheap to poll: the exporter calls
/// [`is_cancelled`](CancelProbe::is_cancelled) once per output row.
pub trait CancelProbe {
    /// Returns `true` once cancellation has been requested.
    ///
    /// Once `true`, subsequent polls must keep returning `true`.
    fn is_cancelled(&self) -> bool;
}

/// Thread-safe cancellation token.
///
/// Cloning yields handles to the same underlying flag, so one side can hold
/// a clone and request cancellation while the export runs on another thread.
///
/// # Example
///
/// ```rust
/// use matwrite_rs::cancel::{CancelProbe, CancelToken};
///
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// std::thread::spawn(move || handle.cancel()).join().unwrap();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Irreversible for the lifetime of the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

impl CancelProbe for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Probe that never reports cancellation.
///
/// Used by the one-call convenience wrapper where no cancellation channel
/// exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl CancelProbe for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_not_cancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn cancel_sticks() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn never_cancel_never_cancels() {
        assert!(!NeverCancel.is_cancelled());
    }
}
