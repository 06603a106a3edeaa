//! Prefix suppression: [`drop`] and [`drop_while`].

use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`drop`].
pub struct DropFirst<A> {
    n: u64,
    _in: PhantomData<fn(A)>,
}

impl<A> Clone for DropFirst<A> {
    fn clone(&self) -> Self {
        drop(self.n)
    }
}

impl<A> Copy for DropFirst<A> {}

/// Suppress the first `n` items and forward the rest.
///
/// A glob import of the crate root (`use ironfold::*`) brings this function
/// into scope under the name `drop`, shadowing the prelude's
/// [`std::mem::drop`]. Call that one by its full path in such modules.
///
/// ```
/// use ironfold::*;
///
/// let buffer = vec![1, 2, 3];
/// let out = into(&drop(2), Vec::new(), buffer.iter().copied());
/// std::mem::drop(buffer);
/// assert_eq!(out, vec![3]);
/// ```
#[must_use]
pub const fn drop<A>(n: u64) -> DropFirst<A> {
    DropFirst {
        n,
        _in: PhantomData,
    }
}

impl<A> Transducer<A, A> for DropFirst<A> {
    type Stage<R, D>
        = DropFirstStage<D>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        DropFirstStage {
            downstream,
            remaining: self.n,
        }
    }
}

/// Stage built by [`DropFirst`].
pub struct DropFirstStage<D> {
    downstream: D,
    remaining: u64,
}

impl<R, A, D> Reducer<R, A> for DropFirstStage<D>
where
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if self.remaining > 0 {
            self.remaining -= 1;
            acc
        } else {
            self.downstream.step(acc, item, signal)
        }
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}

/// Transducer returned by [`drop_while`].
pub struct DropWhile<A, P> {
    pred: Arc<P>,
    _in: PhantomData<fn(A)>,
}

impl<A, P> Clone for DropWhile<A, P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
            _in: PhantomData,
        }
    }
}

/// Suppress items while `pred` holds. From the first item that fails it,
/// everything is forwarded and `pred` is no longer consulted.
pub fn drop_while<A, P>(pred: P) -> DropWhile<A, P>
where
    P: Fn(&A) -> bool,
{
    DropWhile {
        pred: Arc::new(pred),
        _in: PhantomData,
    }
}

impl<A, P> Transducer<A, A> for DropWhile<A, P>
where
    P: Fn(&A) -> bool,
{
    type Stage<R, D>
        = DropWhileStage<D, P>
    where
        D: Reducer<R, A>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        DropWhileStage {
            downstream,
            pred: Arc::clone(&self.pred),
            dropping: true,
        }
    }
}

/// Stage built by [`DropWhile`].
pub struct DropWhileStage<D, P> {
    downstream: D,
    pred: Arc<P>,
    dropping: bool,
}

impl<R, A, D, P> Reducer<R, A> for DropWhileStage<D, P>
where
    P: Fn(&A) -> bool,
    D: Reducer<R, A>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: A, signal: &mut TerminationSignal) -> R {
        if self.dropping && (self.pred)(&item) {
            return acc;
        }
        self.dropping = false;
        self.downstream.step(acc, item, signal)
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
