//! Testing utilities for transducer pipelines.
//!
//! - **Assertions**: compare reduction outputs with expected results, check
//!   adjacency and grouping properties.
//! - **[`Recorder`]**: a terminal reducing function that logs every protocol
//!   call, for checking init/step/complete ordering and early termination.
//! - **[`TestDataBuilder`]**: build inputs out of ranges and repeated runs.
//!
//! # Quick Start
//!
//! ```
//! use ironfold::*;
//! use ironfold::testing::*;
//!
//! let input = TestDataBuilder::new().add_repeated(1, 3).add_range(2..=4).build();
//! let mut recorder = Recorder::new();
//! let out = transduce_with(&dedupe(), &mut recorder, Vec::new(), input);
//!
//! assert_collections_equal(&out, &[1, 2, 3, 4]);
//! assert_eq!(recorder.completions(), 1);
//! ```

pub mod assertions;
pub mod builders;
pub mod recorder;

pub use assertions::*;
pub use builders::*;
pub use recorder::*;
