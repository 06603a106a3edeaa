//! Map-and-suppress: [`keep`] and [`keep_indexed`].
//!
//! The callback returns an `Option`; `None` means "forward nothing for this
//! item", so the item type itself never needs an absent value.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`keep`].
pub struct Keep<A, F> {
    f: Arc<F>,
    _in: PhantomData<fn(A)>,
}

impl<A, F> Clone for Keep<A, F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _in: PhantomData,
        }
    }
}

/// Forward `f(item)` whenever it is `Some`.
pub fn keep<A, B, F>(f: F) -> Keep<A, F>
where
    F: Fn(A) -> Option<B>,
{
    Keep {
        f: Arc::new(f),
        _in: PhantomData,
    }
}

impl<A, B, F> Transducer<A, B> for Keep<A, F>
where
    F: Fn(A) -> Option<B>,
{
    type Stage<R, D>
        = KeepStage<D, F>
    where
        D: Reducer<R, B>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, B>,
    {
        KeepStage {
            downstream,
            f: Arc::clone(&self.f),
        }
    }
}

/// Stage built by [`Keep`].
pub struct KeepStage<D, F> {
    downstream: D,
    f: Arc<F>,
}

impl<R, A, B, D, F> Reducer<R, A> for KeepStage<D, F>
where
    F: Fn(A) -> Option<B>,
    D: Reducer<R, B>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        match (self.f)(item) {
            Some(kept) => self.downstream.step(acc, kept, signal),
            None => acc,
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}

/// Transducer returned by [`keep_indexed`].
pub struct KeepIndexed<A, F> {
    f: Arc<F>,
    _in: PhantomData<fn(A)>,
}

impl<A, F> Clone for KeepIndexed<A, F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _in: PhantomData,
        }
    }
}

/// Like [`keep`], but `f` also receives a running count of the items seen by
/// this stage, starting at 1.
///
/// ```
/// use ironfold::{into, keep_indexed};
///
/// let xf = keep_indexed(|i: u64, n: i32| (i == 1 || i == 4).then_some(n));
/// assert_eq!(into(&xf, Vec::new(), 0..10), vec![0, 3]);
/// ```
pub fn keep_indexed<A, B, F>(f: F) -> KeepIndexed<A, F>
where
    F: Fn(u64, A) -> Option<B>,
{
    KeepIndexed {
        f: Arc::new(f),
        _in: PhantomData,
    }
}

impl<A, B, F> Transducer<A, B> for KeepIndexed<A, F>
where
    F: Fn(u64, A) -> Option<B>,
{
    type Stage<R, D>
        = KeepIndexedStage<D, F>
    where
        D: Reducer<R, B>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, B>,
    {
        KeepIndexedStage {
            downstream,
            f: Arc::clone(&self.f),
            seen: 0,
        }
    }
}

/// Stage built by [`KeepIndexed`].
pub struct KeepIndexedStage<D, F> {
    downstream: D,
    f: Arc<F>,
    seen: u64,
}

impl<R, A, B, D, F> Reducer<R, A> for KeepIndexedStage<D, F>
where
    F: Fn(u64, A) -> Option<B>,
    D: Reducer<R, B>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        self.seen += 1;
        match (self.f)(self.seen, item) {
            Some(kept) => self.downstream.step(acc, kept, signal),
            None => acc,
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
