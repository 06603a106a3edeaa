//! Random sources for [`random_sample`](crate::transducers::random_sample).
//!
//! Sampling draws one uniform `f64` in `[0, 1)` per item. The source is an
//! explicit dependency so tests and reproducible jobs can pin it:
//!
//! - [`ThreadRandom`] -- `rand`'s thread-local generator (the default).
//! - [`SeededRandom`] -- a seeded `StdRng` behind a mutex; the same seed and
//!   input yield the same sample, and one instance may be shared by clones of
//!   a transducer across threads.
//! - any `Fn() -> f64` closure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// A producer of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// The next uniform value.
    fn next_f64(&self) -> f64;
}

impl<F> RandomSource for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn next_f64(&self) -> f64 {
        self()
    }
}

/// Draws from `rand`'s thread-local generator. Unseeded.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn next_f64(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// A deterministic source seeded from a `u64`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Seed a new generator; equal seeds produce equal draw sequences.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}
