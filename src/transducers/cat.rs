//! Flattening: [`cat`] and [`mapcat`].

use std::marker::PhantomData;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::runner::reduce_steps;
use crate::signal::TerminationSignal;
use crate::transducer::{Compose, Transducer};
use crate::transducers::map::{Map, map};

/// Transducer returned by [`cat`].
pub struct Cat<I>(PhantomData<fn(I)>);

impl<I> Clone for Cat<I> {
    fn clone(&self) -> Self {
        cat()
    }
}

impl<I> Copy for Cat<I> {}

/// Treat every item as a sequence and forward its elements one by one.
///
/// Each inner sequence is reduced under the same termination signal as the
/// outer reduction: a downstream stop halts both.
#[must_use]
pub const fn cat<I>() -> Cat<I> {
    Cat(PhantomData)
}

/// [`map`] followed by [`cat`].
pub type MapCat<In, F, I> = Compose<Map<In, F>, Cat<I>, I>;

/// Map every item to a sequence and forward the elements of that sequence.
///
/// ```
/// use ironfold::{into, mapcat};
///
/// let digits = mapcat(|n: u32| n.to_string().chars().collect::<Vec<_>>());
/// let out: String = into(&digits, String::new(), [7, 42]);
/// assert_eq!(out, "742");
/// ```
pub fn mapcat<In, I, F>(f: F) -> MapCat<In, F, I>
where
    F: Fn(In) -> I,
    I: IntoIterator,
{
    map(f).compose(cat())
}

impl<I> Transducer<I, I::Item> for Cat<I>
where
    I: IntoIterator,
{
    type Stage<R, D>
        = CatStage<D>
    where
        D: Reducer<R, I::Item>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, I::Item>,
    {
        CatStage { downstream }
    }
}

/// Stage built by [`Cat`].
pub struct CatStage<D> {
    downstream: D,
}

impl<R, I, D> Reducer<R, I> for CatStage<D>
where
    I: IntoIterator,
    D: Reducer<R, I::Item>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: I, signal: &mut TerminationSignal) -> R {
        reduce_steps(&mut self.downstream, acc, item, signal)
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
