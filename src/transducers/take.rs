//! Prefix selection that ends the reduction early: [`take`] and
//! [`take_while`], plus the strided [`take_nth`].

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`take`].
pub struct Take<A> {
    n: u64,
    _in: PhantomData<fn(A)>,
}

impl<A> Clone for Take<A> {
    fn clone(&self) -> Self {
        take(self.n)
    }
}

impl<A> Copy for Take<A> {}

/// Forward the first `n` items, then request termination on the next one.
///
/// The item that trips the limit is not forwarded.
#[must_use]
pub const fn take<A>(n: u64) -> Take<A> {
    Take {
        n,
        _in: PhantomData,
    }
}

impl<A> Transducer<A, A> for Take<A> {
    type Stage<R, D>
        = TakeStage<D>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        TakeStage {
            downstream,
            limit: self.n,
            taken: 0,
        }
    }
}

/// Stage built by [`Take`].
pub struct TakeStage<D> {
    downstream: D,
    limit: u64,
    taken: u64,
}

impl<R, A, D> Reducer<R, A> for TakeStage<D>
where
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if self.taken < self.limit {
            self.taken += 1;
            self.downstream.step(acc, item, signal)
        } else {
            signal.stop();
            acc
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}

/// Transducer returned by [`take_while`].
pub struct TakeWhile<A, P> {
    pred: Arc<P>,
    _in: PhantomData<fn(A)>,
}

impl<A, P> Clone for TakeWhile<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
            _in: PhantomData,
        }
    }
}

/// Forward items while `pred` holds; the first failing item stops the
/// reduction and is not forwarded.
pub fn take_while<A, P>(pred: P) -> TakeWhile<A, P>
where
    P: Fn(&A) -> bool,
{
    TakeWhile {
        pred: Arc::new(pred),
        _in: PhantomData,
    }
}

impl<A, P> Transducer<A, A> for TakeWhile<A, P>
where
    P: Fn(&A) -> bool,
{
    type Stage<R, D>
        = TakeWhileStage<D, P>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        TakeWhileStage {
            downstream,
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Stage built by [`TakeWhile`].
pub struct TakeWhileStage<D, P> {
    downstream: D,
    pred: Arc<P>,
}

impl<R, A, D, P> Reducer<R, A> for TakeWhileStage<D, P>
where
    P: Fn(&A) -> bool,
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if (self.pred)(&item) {
            self.downstream.step(acc, item, signal)
        } else {
            signal.stop();
            acc
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}

/// Transducer returned by [`take_nth`].
pub struct TakeNth<A> {
    n: u64,
    _in: PhantomData<fn(A)>,
}

impl<A> Clone for TakeNth<A> {
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            _in: PhantomData,
        }
    }
}

impl<A> Copy for TakeNth<A> {}

/// Forward the 1st, (n+1)th, (2n+1)th, ... items.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn take_nth<A>(n: u64) -> TakeNth<A> {
    assert!(n > 0, "take_nth requires a stride of at least 1");
    TakeNth {
        n,
        _in: PhantomData,
    }
}

impl<A> Transducer<A, A> for TakeNth<A> {
    type Stage<R, D>
        = TakeNthStage<D>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        TakeNthStage {
            downstream,
            stride: self.n,
            seen: 0,
        }
    }
}

/// Stage built by [`TakeNth`].
pub struct TakeNthStage<D> {
    downstream: D,
    stride: u64,
    seen: u64,
}

impl<R, A, D> Reducer<R, A> for TakeNthStage<D>
where
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        let forward = self.seen % self.stride == 0;
        self.seen += 1;
        if forward {
            self.downstream.step(acc, item, signal)
        } else {
            acc
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
