//! Predicate-driven selection: [`filter`], [`remove`] and the probabilistic
//! [`random_sample`].

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::random::{RandomSource, ThreadRandom};
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`filter`] and [`remove`].
pub struct Filter<A, P> {
    pred: Arc<P>,
    retain: bool,
    _in: PhantomData<fn(A)>,
}

impl<A, P> Clone for Filter<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
            retain: self.retain,
            _in: PhantomData,
        }
    }
}

/// Forward only the items for which `pred` holds.
pub fn filter<A, P>(pred: P) -> Filter<A, P>
where
    P: Fn(&A) -> bool,
{
    Filter {
        pred: Arc::new(pred),
        retain: true,
        _in: PhantomData,
    }
}

/// Forward only the items for which `pred` does not hold.
pub fn remove<A, P>(pred: P) -> Filter<A, P>
where
    P: Fn(&A) -> bool,
{
    Filter {
        pred: Arc::new(pred),
        retain: false,
        _in: PhantomData,
    }
}

/// Forward each item independently with the given probability, drawing from
/// the calling thread's generator.
///
/// `probability` is clamped to `[0, 1]`. Output is non-deterministic; use
/// [`random_sample_with`] and a [`SeededRandom`](crate::SeededRandom) for
/// reproducible runs.
pub fn random_sample<A>(probability: f64) -> Filter<A, impl Fn(&A) -> bool> {
    random_sample_with(probability, ThreadRandom)
}

/// Like [`random_sample`], but draws from an injected source.
pub fn random_sample_with<A, S>(probability: f64, source: S) -> Filter<A, impl Fn(&A) -> bool>
where
    S: RandomSource,
{
    let probability = probability.clamp(0.0, 1.0);
    filter(move |_: &A| source.next_f64() < probability)
}

impl<A, P> Transducer<A, A> for Filter<A, P>
where
    P: Fn(&A) -> bool,
{
    type Stage<R, D>
        = FilterStage<D, P>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        FilterStage {
            downstream,
            pred: Arc::clone(&self.pred),
            retain: self.retain,
        }
    }
}

/// Stage built by [`Filter`].
pub struct FilterStage<D, P> {
    downstream: D,
    pred: Arc<P>,
    retain: bool,
}

impl<R, A, D, P> Reducer<R, A> for FilterStage<D, P>
where
    P: Fn(&A) -> bool,
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if (self.pred)(&item) == self.retain {
            self.downstream.step(acc, item, signal)
        } else {
            acc
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
