//! # Ironfold
//!
//! **Transducers** for Rust: reusable map/filter/partition/take-style
//! transformations that are independent of where items come from and of what
//! the reduction builds. A transducer is written once and can then feed a
//! `Vec`, a `String`, a running sum, or any custom consumer, from any source
//! that can be iterated.
//!
//! ## Key Features
//!
//! - **Source-agnostic** - anything `IntoIterator` can be reduced
//! - **Sink-agnostic** - the terminal [`Reducer`] decides the result type
//! - **Zero-cost composition** - composed stages nest as concrete types; no boxing
//! - **Early termination** - `take`/`take_while` stop pulling input, even from infinite sources
//! - **Correct flushing** - buffering stages emit their last group exactly once, on completion
//!
//! ## Quick Start
//!
//! ```
//! use ironfold::*;
//!
//! // Build a pipeline once...
//! let xf = filter(|n: &u32| n % 2 == 1).compose(map(|n: u32| n.to_string()));
//!
//! // ...and run it into whatever you need.
//! let strings: Vec<String> = into(&xf, Vec::new(), 0..10);
//! assert_eq!(strings, vec!["1", "3", "5", "7", "9"]);
//!
//! let joined = into(&xf, String::new(), 0..10);
//! assert_eq!(joined, "13579");
//! ```
//!
//! The glob import also brings the [`drop`](transducers::drop) transducer into
//! scope, which shadows [`std::mem::drop`]; use the full path for the latter.
//!
//! ## Core Concepts
//!
//! ### Reducing functions
//!
//! A [`Reducer<R, A>`] folds items of type `A` into an accumulator `R` through
//! three operations: [`init`](Reducer::init), [`step`](Reducer::step) and
//! [`complete`](Reducer::complete). Every `step` receives the reduction's
//! [`TerminationSignal`]; setting it asks the engine to stop.
//!
//! ### Transducers
//!
//! A [`Transducer<In, Out>`] wraps a `Reducer<R, Out>` into a `Reducer<R, In>`.
//! [`compose`](Transducer::compose) chains transducers left to right: in
//! `a.compose(b)` items pass through `a`'s logic first.
//!
//! ### The reduction engine
//!
//! [`reduce`] steps every item in source order, stops as soon as the signal is
//! set and then calls `complete` exactly once, which lets stateful stages
//! flush before the terminal reducer finalizes.
//!
//! ### Facade
//!
//! - [`transduce`] - reduce with the terminal reducer's own initial value
//! - [`transduce_with`] / [`transduce_step`] - reduce from an explicit initial value
//! - [`into`] - append every output into a container
//! - [`TransduceExt`] - the same, as methods on any source
//!
//! ## Feature Flags
//!
//! - `metrics` (default) - the [`meter`] stage and [`metrics::MetricsCollector`]
//!
//! ## Module Overview
//!
//! - [`reducer`] - the reducing-function protocol and [`completing`]
//! - [`transducer`] - the transducer trait, [`identity`] and [`compose`]
//! - [`runner`] - the reduction engine
//! - [`transducers`] - the built-in transducer library
//! - [`reducers`] - terminal reducers ([`Append`], [`Sum`], [`Count`])
//! - [`helpers`] - facade functions
//! - [`random`] - random sources for [`random_sample`]
//! - [`testing`] - assertions and a recording reducer for tests

pub mod error;
pub mod extensions;
pub mod helpers;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod random;
pub mod reducer;
pub mod reducers;
pub mod runner;
pub mod signal;
pub mod testing;
pub mod transducer;
pub mod transducers;

// General re-exports
pub use error::TransduceError;
pub use extensions::TransduceExt;
pub use helpers::*;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use reducer::{Completing, Reducer, completing};
pub use reducers::{Append, Count, Sum};
pub use runner::{reduce, reduce_steps};
pub use signal::TerminationSignal;
pub use transducer::{Compose, Identity, Transducer, compose, identity};
pub use transducers::*;
