//! Terminal reducing functions.
//!
//! These sit at the end of a pipeline and decide what the reduction returns.
//! All of them can initialize themselves, so they work with
//! [`transduce`](crate::transduce) as well as with an explicit initial value.
//!
//! - [`Append`] -- extend any growable container (`Vec`, `String`, sets, ...).
//! - [`Sum<T>`] -- add items together.
//! - [`Count`] -- count items.
//!
//! # Examples
//! ```
//! use ironfold::{filter, transduce, Append, Count, Sum};
//!
//! let odd = filter(|n: &u64| n % 2 == 1);
//! let v: Vec<u64> = transduce(&odd, Append, 0..10)?;
//! assert_eq!(v, vec![1, 3, 5, 7, 9]);
//! assert_eq!(transduce(&odd, Sum::new(), 0..10)?, 25);
//! assert_eq!(transduce(&odd, Count, 0..10)?, 5);
//! # Ok::<(), ironfold::TransduceError>(())
//! ```

use std::iter;
use std::marker::PhantomData;
use std::ops::Add;

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;

/// Appends every item to a container.
#[derive(Clone, Copy, Debug, Default)]
pub struct Append;

impl<C, A> Reducer<C, A> for Append
where
    C: Extend<A> + Default,
{
    fn init(&mut self) -> Result<C> {
        Ok(C::default())
    }

    #[inline]
    fn step(&mut self, mut acc: C, item: A, _signal: &mut TerminationSignal) -> C {
        acc.extend(iter::once(item));
        acc
    }

    fn complete(&mut self, acc: C) -> C {
        acc
    }
}

/// Sums items, starting from `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    /// A summing reducer starting from `T::default()`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Reducer<T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn init(&mut self) -> Result<T> {
        Ok(T::default())
    }

    #[inline]
    fn step(&mut self, acc: T, item: T, _signal: &mut TerminationSignal) -> T {
        acc + item
    }

    fn complete(&mut self, acc: T) -> T {
        acc
    }
}

/// Counts items.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<A> Reducer<u64, A> for Count {
    fn init(&mut self) -> Result<u64> {
        Ok(0)
    }

    #[inline]
    fn step(&mut self, acc: u64, _item: A, _signal: &mut TerminationSignal) -> u64 {
        acc + 1
    }

    fn complete(&mut self, acc: u64) -> u64 {
        acc
    }
}
