//! Collapsing runs of equal items: [`dedupe`].

use std::marker::PhantomData;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`dedupe`].
pub struct Dedupe<A>(PhantomData<fn(A)>);

impl<A> Clone for Dedupe<A> {
    fn clone(&self) -> Self {
        dedupe()
    }
}

impl<A> Copy for Dedupe<A> {}

/// Suppress any item equal (by value) to the item forwarded just before it.
///
/// ```
/// use ironfold::{dedupe, into};
///
/// let out = into(&dedupe(), Vec::new(), [1, 2, 2, 3, 5, 5, 5, 0]);
/// assert_eq!(out, vec![1, 2, 3, 5, 0]);
/// ```
#[must_use]
pub const fn dedupe<A>() -> Dedupe<A> {
    Dedupe(PhantomData)
}

impl<A> Transducer<A, A> for Dedupe<A>
where
    A: PartialEq + Clone,
{
    type Stage<R, D>
        = DedupeStage<D, A>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        DedupeStage {
            downstream,
            prior: None,
        }
    }
}

/// Stage built by [`Dedupe`]; remembers the last forwarded item.
pub struct DedupeStage<D, A> {
    downstream: D,
    prior: Option<A>,
}

impl<R, A, D> Reducer<R, A> for DedupeStage<D, A>
where
    A: PartialEq + Clone,
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if self.prior.as_ref() == Some(&item) {
            return acc;
        }
        self.prior = Some(item.clone());
        self.downstream.step(acc, item, signal)
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
