//! The reducing-function protocol.
//!
//! Every pipeline stage and every terminal consumer implements [`Reducer`]:
//!
//! - [`init`](Reducer::init) produces a fresh accumulator when the caller did
//!   not supply one,
//! - [`step`](Reducer::step) folds one item into the accumulator and may set
//!   the [`TerminationSignal`],
//! - [`complete`](Reducer::complete) finalizes the accumulator. It is called
//!   exactly once per reduction, after the last `step`, and every wrapping
//!   stage must forward it to its downstream.
//!
//! Stages built by a transducer hold per-reduction state (counters, buffers,
//! the previously seen item). A stage value must drive a single reduction;
//! feeding it a second reduction continues from the leftover state.

use crate::error::{Result, TransduceError};
use crate::signal::TerminationSignal;

/// A three-operation reducing function over accumulator `R` and items `A`.
pub trait Reducer<R, A> {
    /// Produce an initial accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`TransduceError::UnsupportedInit`] when this reducing function
    /// can only step (see [`completing`]).
    fn init(&mut self) -> Result<R>;

    /// Fold `item` into `acc`.
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R;

    /// Finalize `acc`.
    fn complete(&mut self, acc: R) -> R;
}

impl<R, A, F> Reducer<R, A> for &mut F
where
    F: Reducer<R, A> + ?Sized,
{
    #[inline]
    fn init(&mut self) -> Result<R> {
        (**self).init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        (**self).step(acc, item, signal)
    }

    #[inline]
    fn complete(&mut self, acc: R) -> R {
        (**self).complete(acc)
    }
}

/// A bare step function promoted to a full [`Reducer`] by [`completing`].
///
/// `complete` is the identity and `init` fails with
/// [`TransduceError::UnsupportedInit`].
#[derive(Clone, Copy, Debug)]
pub struct Completing<F>(F);

/// Promote a step function into a reducing function.
///
/// Only step functions are accepted; anything that already implements
/// [`Reducer`] is passed to the facade directly, so a reducer is never
/// wrapped twice.
///
/// ```
/// use ironfold::{completing, map, transduce_with, TerminationSignal};
///
/// let concat = completing(|acc: String, s: String, _: &mut TerminationSignal| acc + &s + " ");
/// let out = transduce_with(&map(|n: u32| n.to_string()), concat, String::new(), 0..3);
/// assert_eq!(out, "0 1 2 ");
/// ```
pub const fn completing<R, A, F>(step: F) -> Completing<F>
where
    F: FnMut(R, A, &mut TerminationSignal) -> R,
{
    Completing(step)
}

impl<R, A, F> Reducer<R, A> for Completing<F>
where
    F: FnMut(R, A, &mut TerminationSignal) -> R,
{
    fn init(&mut self) -> Result<R> {
        Err(TransduceError::UnsupportedInit)
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        (self.0)(acc, item, signal)
    }

    #[inline]
    fn complete(&mut self, acc: R) -> R {
        acc
    }
}
