//! Pass-through counting stage backed by a [`MetricsCollector`].

use std::marker::PhantomData;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`meter`].
pub struct Meter<A> {
    name: String,
    collector: MetricsCollector,
    _in: PhantomData<fn(A)>,
}

impl<A> Clone for Meter<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            collector: self.collector.clone(),
            _in: PhantomData,
        }
    }
}

/// Count the items that reach this point of a pipeline.
///
/// Items pass through unchanged. The stage counts locally and adds its total
/// to the `name` counter of `collector` when the reduction completes, so a
/// reduction aborted by a panicking callback records nothing.
///
/// ```
/// use ironfold::metrics::MetricsCollector;
/// use ironfold::{filter, into, meter, Transducer};
///
/// let metrics = MetricsCollector::new();
/// let xf = meter("seen", &metrics)
///     .compose(filter(|n: &u32| n % 3 == 0))
///     .compose(meter("kept", &metrics));
/// let out = into(&xf, Vec::new(), 0..10u32);
///
/// assert_eq!(out, vec![0, 3, 6, 9]);
/// assert_eq!(metrics.counter("seen"), Some(10));
/// assert_eq!(metrics.counter("kept"), Some(4));
/// ```
pub fn meter<A>(name: impl Into<String>, collector: &MetricsCollector) -> Meter<A> {
    Meter {
        name: name.into(),
        collector: collector.clone(),
        _in: PhantomData,
    }
}

impl<A> Transducer<A, A> for Meter<A> {
    type Stage<R, D>
        = MeterStage<D>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        MeterStage {
            downstream,
            name: self.name.clone(),
            collector: self.collector.clone(),
            count: 0,
        }
    }
}

/// Stage built by [`Meter`].
pub struct MeterStage<D> {
    downstream: D,
    name: String,
    collector: MetricsCollector,
    count: u64,
}

impl<R, A, D> Reducer<R, A> for MeterStage<D>
where
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        self.count += 1;
        self.downstream.step(acc, item, signal)
    }

    fn complete(&mut self, acc: R) -> R {
        self.collector.increment_counter(&self.name, self.count);
        self.downstream.complete(acc)
    }
}
