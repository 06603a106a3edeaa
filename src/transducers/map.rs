//! Element-wise mapping: [`map`] and the table-driven [`replace`].

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Transducer returned by [`map`].
pub struct Map<In, F> {
    f: Arc<F>,
    _in: PhantomData<fn(In)>,
}

impl<In, F> Clone for Map<In, F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _in: PhantomData,
        }
    }
}

/// Replace every item with `f(item)`.
///
/// ```
/// use ironfold::{into, map};
///
/// let out = into(&map(|n: i32| n * 10), Vec::new(), [1, 2, 3]);
/// assert_eq!(out, vec![10, 20, 30]);
/// ```
pub fn map<In, Out, F>(f: F) -> Map<In, F>
where
    F: Fn(In) -> Out,
{
    Map {
        f: Arc::new(f),
        _in: PhantomData,
    }
}

/// Substitute items found in `table` with their mapped value; everything else
/// passes through unchanged.
pub fn replace<A>(table: HashMap<A, A>) -> Map<A, impl Fn(A) -> A>
where
    A: Eq + Hash + Clone,
{
    map(move |a: A| match table.get(&a) {
        Some(substitute) => substitute.clone(),
        None => a,
    })
}

impl<In, Out, F> Transducer<In, Out> for Map<In, F>
where
    F: Fn(In) -> Out,
{
    type Stage<R, D>
        = MapStage<D, F>
    where
        D: Reducer<R, Out>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, Out>,
    {
        MapStage {
            downstream,
            f: Arc::clone(&self.f),
        }
    }
}

/// Stage built by [`Map`].
pub struct MapStage<D, F> {
    downstream: D,
    f: Arc<F>,
}

impl<R, In, Out, D, F> Reducer<R, In> for MapStage<D, F>
where
    F: Fn(In) -> Out,
    D: Reducer<R, Out>,
{
    fn init(&mut self) -> Result<R> {
        self.downstream.init()
    }

    #[inline]
    fn step(&mut self, acc: R, item: In, signal: &mut TerminationSignal) -> R {
        self.downstream.step(acc, (self.f)(item), signal)
    }

    fn complete(&mut self, acc: R) -> R {
        self.downstream.complete(acc)
    }
}
