//! A terminal reducing function that records how it is driven.

use crate::error::Result;
use crate::reducer::Reducer;
use crate::signal::TerminationSignal;

/// One protocol call observed by a [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call<A> {
    Init,
    Step(A),
    Complete,
}

/// Collects items into a `Vec` while logging every `init`, `step` and
/// `complete` call it receives.
///
/// Pass it by `&mut` to keep it inspectable after the reduction. With
/// [`stopping_after`](Self::stopping_after) it also requests termination once
/// it has received the given number of items.
#[derive(Clone, Debug)]
pub struct Recorder<A> {
    calls: Vec<Call<A>>,
    steps: usize,
    stop_after: Option<usize>,
}

impl<A> Default for Recorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Recorder<A> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            steps: 0,
            stop_after: None,
        }
    }

    /// A recorder that sets the termination signal on its `n`-th step.
    #[must_use]
    pub const fn stopping_after(n: usize) -> Self {
        Self {
            calls: Vec::new(),
            steps: 0,
            stop_after: Some(n),
        }
    }

    /// Every call in the order received.
    #[must_use]
    pub fn calls(&self) -> &[Call<A>] {
        &self.calls
    }

    /// Number of `step` calls.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Number of `complete` calls.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Complete))
            .count()
    }

    /// Whether `complete` was the last call received.
    #[must_use]
    pub fn completed_last(&self) -> bool {
        matches!(self.calls.last(), Some(Call::Complete))
    }
}

impl<A: Clone> Reducer<Vec<A>, A> for Recorder<A> {
    fn init(&mut self) -> Result<Vec<A>> {
        self.calls.push(Call::Init);
        Ok(Vec::new())
    }

    fn step(&mut self, mut acc: Vec<A>, item: A, signal: &mut TerminationSignal) -> Vec<A> {
        self.calls.push(Call::Step(item.clone()));
        acc.push(item);
        self.steps += 1;
        if self.stop_after.is_some_and(|n| self.steps >= n) {
            signal.stop();
        }
        acc
    }

    fn complete(&mut self, acc: Vec<A>) -> Vec<A> {
        self.calls.push(Call::Complete);
        acc
    }
}
