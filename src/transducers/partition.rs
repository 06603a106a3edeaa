//! Grouping stages that buffer items and forward them as `Vec`s:
//! [`partition_by`] and [`partition_all`].
//!
//! Both flush a non-empty buffer during `complete`, before completing the
//! downstream. That flush runs under a fresh signal since the reduction is
//! already ending and there is nothing left to stop.

use std::marker::PhantomData;
use std::mem;
use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`partition_by`].
pub struct PartitionBy<A, K, F> {
    key_fn: Arc<F>,
    _in: PhantomData<fn(A) -> K>,
}

impl<A, K, F> Clone for PartitionBy<A, K, F> {
    fn clone(&self) -> Self {
        Self {
            key_fn: Arc::clone(&self.key_fn),
            _in: PhantomData,
        }
    }
}

/// Group consecutive items that share the same `key_fn` result.
///
/// A group is forwarded as soon as an item with a different key arrives; the
/// last group is forwarded on completion.
///
/// ```
/// use ironfold::{into, partition_by};
///
/// let out = into(&partition_by(|n: &i32| *n > 0), Vec::new(), [1, 2, -1, 3]);
/// assert_eq!(out, vec![vec![1, 2], vec![-1], vec![3]]);
/// ```
pub fn partition_by<A, K, F>(key_fn: F) -> PartitionBy<A, K, F>
where
    F: Fn(&A) -> K,
    K: PartialEq,
{
    PartitionBy {
        key_fn: Arc::new(key_fn),
        _in: PhantomData,
    }
}

impl<A, K, F> Transducer<A, Vec<A>> for PartitionBy<A, K, F>
where
    F: Fn(&A) -> K,
    K: PartialEq,
{
    type Stage<R, D>
        = PartitionByStage<D, A, K, F>
    where
        D: Reducer<R, Vec<A>>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, Vec<A>>,
    {
        PartitionByStage {
            downstream,
            key_fn: Arc::clone(&self.key_fn),
            part: Vec::new(),
            prior: None,
        }
    }
}

/// Stage built by [`PartitionBy`].
pub struct PartitionByStage<D, A, K, F> {
    downstream: D,
    key_fn: Arc<F>,
    part: Vec<A>,
    prior: Option<K>,
}

impl<R, A, K, D, F> Reducer<R, A> for PartitionByStage<D, A, K, F>
where
    F: Fn(&A) -> K,
    K: PartialEq,
    D: Reducer<R, Vec<A>>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        let key = (self.key_fn)(&item);
        let boundary = self.prior.as_ref().is_some_and(|prior| *prior != key);
        self.prior = Some(key);
        if !boundary {
            self.part.push(item);
            return acc;
        }

        let group = mem::take(&mut self.part);
        let acc = self.downstream.step(acc, group, signal);
        // a stopped downstream gets no new group
        if !signal.is_stopped() {
            self.part.push(item);
        }
        acc
    }

    fn complete(&mut self, acc: R) -> R {
        let acc = if self.part.is_empty() {
            acc
        } else {
            let group = mem::take(&mut self.part);
            trace!(size = group.len(), "flushing trailing partition");
            self.downstream
                .step(acc, group, &mut TerminationSignal::new())
        };
        self.downstream.complete(acc)
    }
}

/// Transducer returned by [`partition_all`].
pub struct PartitionAll<A> {
    size: usize,
    _in: PhantomData<fn(A)>,
}

impl<A> Clone for PartitionAll<A> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            _in: PhantomData,
        }
    }
}

impl<A> Copy for PartitionAll<A> {}

/// Group items into `Vec`s of exactly `size` items; the final group may be
/// shorter.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn partition_all<A>(size: usize) -> PartitionAll<A> {
    assert!(size > 0, "partition_all requires a group size of at least 1");
    PartitionAll {
        size,
        _in: PhantomData,
    }
}

impl<A> Transducer<A, Vec<A>> for PartitionAll<A> {
    type Stage<R, D>
        = PartitionAllStage<D, A>
    where
        D: Reducer<R, Vec<A>>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, Vec<A>>,
    {
        PartitionAllStage {
            downstream,
            size: self.size,
            part: Vec::with_capacity(self.size),
        }
    }
}

/// Stage built by [`PartitionAll`].
pub struct PartitionAllStage<D, A> {
    downstream: D,
    size: usize,
    part: Vec<A>,
}

impl<R, A, D> Reducer<R, A> for PartitionAllStage<D, A>
where
    D: Reducer<R, Vec<A>>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        self.part.push(item);
        if self.part.len() < self.size {
            return acc;
        }
        let group = mem::replace(&mut self.part, Vec::with_capacity(self.size));
        self.downstream.step(acc, group, signal)
    }

    fn complete(&mut self, acc: R) -> R {
        let acc = if self.part.is_empty() {
            acc
        } else {
            let group = mem::take(&mut self.part);
            trace!(size = group.len(), "flushing trailing partition");
            self.downstream
                .step(acc, group, &mut TerminationSignal::new())
        };
        self.downstream.complete(acc)
    }
}
