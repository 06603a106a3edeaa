//! The built-in transducer library.
//!
//! Stateless stages keep nothing between items:
//!
//! - [`map`], [`replace`] -- transform each item.
//! - [`filter`], [`remove`], [`random_sample`] -- select items.
//! - [`cat`], [`mapcat`] -- flatten nested sequences.
//! - [`keep`], [`keep_indexed`] -- map and drop `None` results.
//!
//! Stateful stages hold per-reduction state, created fresh by every
//! [`apply`](crate::Transducer::apply):
//!
//! - [`take`], [`take_while`] -- forward a prefix, then stop the reduction.
//! - [`drop`], [`drop_while`] -- suppress a prefix.
//! - [`take_nth`] -- forward every n-th item.
//! - [`dedupe`] -- collapse runs of equal items.
//! - [`partition_by`], [`partition_all`] -- forward items in `Vec` groups,
//!   flushing the last group on completion.
//!
//! With the `metrics` feature, [`meter`] counts the items passing through.
//!
//! # Examples
//! ```
//! use ironfold::*;
//!
//! let xf = drop_while(|n: &u32| *n < 3)
//!     .compose(take_nth(2))
//!     .compose(take(3))
//!     .compose(map(|n: u32| n * n));
//! assert_eq!(into(&xf, Vec::new(), 0..), vec![9, 25, 49]);
//! ```

mod cat;
mod dedupe;
mod drop;
mod filter;
mod keep;
mod map;
#[cfg(feature = "metrics")]
mod meter;
mod partition;
mod take;

pub use cat::{Cat, CatStage, MapCat, cat, mapcat};
pub use dedupe::{Dedupe, DedupeStage, dedupe};
pub use drop::{DropFirst, DropFirstStage, DropWhile, DropWhileStage, drop, drop_while};
pub use filter::{Filter, FilterStage, filter, random_sample, random_sample_with, remove};
pub use keep::{Keep, KeepIndexed, KeepIndexedStage, KeepStage, keep, keep_indexed};
pub use map::{Map, MapStage, map, replace};
#[cfg(feature = "metrics")]
pub use meter::{Meter, MeterStage, meter};
pub use partition::{
    PartitionAll, PartitionAllStage, PartitionBy, PartitionByStage, partition_all, partition_by,
};
pub use take::{Take, TakeNth, TakeNthStage, TakeStage, TakeWhile, TakeWhileStage, take, take_nth, take_while};
