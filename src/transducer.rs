//! The transducer abstraction and its composition algebra.
//!
//! A [`Transducer<In, Out>`] turns a reducing function over `Out` items into a
//! reducing function over `In` items, for any accumulator type `R`. The
//! transducer value itself is immutable; every call to
//! [`apply`](Transducer::apply) builds a fresh stage with its own state, so one
//! transducer can serve any number of reductions, including concurrent ones on
//! different threads.
//!
//! Composition is plain nesting of stages: `left.compose(right).apply(rf)` is
//! `left.apply(right.apply(rf))`. Items therefore flow through `left` first,
//! and only what `left` forwards reaches `right`. Because the nested stage is a
//! concrete type, a composed pipeline monomorphizes into one reducing function
//! with no boxing between stages.

use std::marker::PhantomData;

use crate::reducer::Reducer;

/// A transformation from `Reducer<R, Out>` to `Reducer<R, In>`.
pub trait Transducer<In, Out> {
    /// The stage produced when wrapping a downstream `D`.
    type Stage<R, D>: Reducer<R, In>
    where
        D: Reducer<R, Out>;

    /// Wrap `downstream` in a new stage.
    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, Out>;

    /// Chain `next` after this transducer.
    ///
    /// Items are processed by `self` first; whatever `self` forwards is
    /// handed to `next`.
    fn compose<Next, T>(self, next: T) -> Compose<Self, T, Out>
    where
        Self: Sized,
        T: Transducer<Out, Next>,
    {
        Compose::new(self, next)
    }
}

/// Compose two transducers; see [`Transducer::compose`].
pub fn compose<In, Mid, Out, L, T>(left: L, right: T) -> Compose<L, T, Mid>
where
    L: Transducer<In, Mid>,
    T: Transducer<Mid, Out>,
{
    left.compose(right)
}

/// Two transducers chained through an intermediate item type `Mid`.
pub struct Compose<L, T, Mid> {
    left: L,
    right: T,
    _mid: PhantomData<fn(Mid) -> Mid>,
}

impl<L, T, Mid> Compose<L, T, Mid> {
    const fn new(left: L, right: T) -> Self {
        Self {
            left,
            right,
            _mid: PhantomData,
        }
    }
}

impl<L: Clone, T: Clone, Mid> Clone for Compose<L, T, Mid> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

impl<In, Mid, Out, L, T> Transducer<In, Out> for Compose<L, T, Mid>
where
    L: Transducer<In, Mid>,
    T: Transducer<Mid, Out>,
{
    type Stage<R, D>
        = L::Stage<R, T::Stage<R, D>>
    where
        D: Reducer<R, Out>;

    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, Out>,
    {
        self.left.apply::<R, _>(self.right.apply::<R, D>(downstream))
    }
}

/// The pass-through transducer; the identity element of composition.
pub struct Identity<A>(PhantomData<fn(A) -> A>);

/// Build the identity transducer, observationally equal to `map(|a| a)`.
#[must_use]
pub const fn identity<A>() -> Identity<A> {
    Identity(PhantomData)
}

impl<A> Clone for Identity<A> {
    fn clone(&self) -> Self {
        identity()
    }
}

impl<A> Copy for Identity<A> {}

impl<A> Transducer<A, A> for Identity<A> {
    type Stage<R, D>
        = D
    where
        D: Reducer<R, A>;

    #[inline]
    fn apply<R, D>(&self, downstream: D) -> Self::Stage<R, D>
    where
        D: Reducer<R, A>,
    {
        downstream
    }
}
