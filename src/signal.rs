//! The termination signal shared by every stage of one reduction.

/// A single mutable flag, owned by the reduction engine and lent to each
/// `step` call, through which any stage asks the engine to stop pulling input.
///
/// A signal belongs to exactly one reduction. Nested reductions (see
/// [`cat`](crate::transducers::cat)) borrow their parent's signal so a stop
/// requested deep inside an inner sequence halts the outer one too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminationSignal {
    stopped: bool,
}

impl TerminationSignal {
    /// A fresh, unset signal.
    #[must_use]
    pub const fn new() -> Self {
        Self { stopped: false }
    }

    /// Request that the current reduction stop after this step.
    #[inline]
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Whether any stage has requested termination.
    #[inline]
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}
