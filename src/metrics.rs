//! Counter collection for instrumented pipelines.
//!
//! A [`MetricsCollector`] is a cheap, cloneable handle onto a shared set of
//! named counters. Pipelines feed it through the [`meter`](crate::meter)
//! stage; callers read it back with [`counter`](MetricsCollector::counter),
//! [`snapshot`](MetricsCollector::snapshot) or as JSON.
//!
//! # Example
//!
//! ```
//! use ironfold::metrics::MetricsCollector;
//! use ironfold::{into, meter, take, Transducer};
//!
//! let metrics = MetricsCollector::new();
//! let xf = take(3).compose(meter("taken", &metrics));
//! let _ = into(&xf, Vec::new(), 0..100u64);
//!
//! assert_eq!(metrics.counter("taken"), Some(3));
//! assert_eq!(metrics.to_json()["taken"]["value"], 3);
//! ```

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A named monotonically increasing counter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CounterMetric {
    value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CounterMetric {
    /// Current value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Human-readable description, if one was registered.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Thread-safe registry of counters shared by every clone of the handle.
#[derive(Clone, Debug, Default)]
pub struct MetricsCollector {
    inner: Arc<Mutex<BTreeMap<String, CounterMetric>>>,
}

impl MetricsCollector {
    /// An empty collector. Clones share its counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, CounterMetric>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a counter with a description, starting at zero.
    ///
    /// An existing counter of the same name keeps its value and gets the new
    /// description.
    pub fn register_counter(&self, name: &str, description: impl Into<String>) {
        let mut counters = self.lock();
        counters.entry(name.to_string()).or_default().description = Some(description.into());
    }

    /// Add `value` to the named counter, creating it if needed.
    pub fn increment_counter(&self, name: &str, value: u64) {
        let mut counters = self.lock();
        let counter = counters.entry(name.to_string()).or_default();
        counter.value = counter.value.saturating_add(value);
    }

    /// Overwrite the named counter.
    pub fn set_counter(&self, name: &str, value: u64) {
        self.lock().entry(name.to_string()).or_default().value = value;
    }

    /// Value of the named counter, if it exists.
    #[must_use]
    pub fn counter(&self, name: &str) -> Option<u64> {
        self.lock().get(name).map(CounterMetric::value)
    }

    /// All counter values, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.lock()
            .iter()
            .map(|(name, counter)| (name.clone(), counter.value))
            .collect()
    }

    /// All counters as a JSON object of `{ "value": .., "description": .. }`
    /// entries keyed by name.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let counters = self.lock().clone();
        serde_json::to_value(counters).unwrap_or(Value::Null)
    }
}
