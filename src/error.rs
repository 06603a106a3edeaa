//! Error types surfaced by reductions.
//!
//! Reductions themselves are infallible once started: callbacks are plain
//! closures, and a panicking callback unwinds straight out of the `step` that
//! invoked it. The only condition reported as a value is a reducing function
//! that was asked for an initial accumulator it cannot produce.

use thiserror::Error;

/// Failures reported by the facade operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransduceError {
    /// The reducing function only knows how to step; the caller must supply
    /// an initial accumulator explicitly (see [`transduce_with`](crate::transduce_with)).
    #[error("reducing function does not support initialization; supply an initial accumulator")]
    UnsupportedInit,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TransduceError>;
