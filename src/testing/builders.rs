//! Test input builders.

use std::ops::RangeInclusive;

/// A fluent builder for reduction inputs.
///
/// # Example
///
/// ```
/// use ironfold::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=3)
///     .add_repeated(5, 4)
///     .add_value(0)
///     .build();
///
/// assert_eq!(data, vec![1, 2, 3, 5, 5, 5, 5, 0]);
/// ```
#[derive(Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Add a single value.
    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Add a run of `count` copies of `value`.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add every value of an inclusive range.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<T>) -> Self
    where
        RangeInclusive<T>: Iterator<Item = T>,
    {
        self.data.extend(range);
        self
    }

    /// Finish and return the data.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }
}
