//! Method-call entry points on input sources.
//!
//! [`TransduceExt`] is implemented for every [`IntoIterator`], so any source
//! can be driven through a transducer without naming the facade functions:
//!
//! ```
//! use ironfold::{dedupe, partition_all, Transducer, TransduceExt};
//!
//! let groups: Vec<Vec<u8>> = b"aabbbcd"
//!     .iter()
//!     .copied()
//!     .transduce_into(&dedupe().compose(partition_all(2)), Vec::new());
//! assert_eq!(groups, vec![b"ab".to_vec(), b"cd".to_vec()]);
//! ```

use crate::helpers::{into, transduce_with};
use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// Extension methods for driving a source through a transducer.
pub trait TransduceExt: IntoIterator + Sized {
    /// Reduce `self` through `xf` into `rf`, starting from `init`.
    fn transduce_with<R, Out, X, F>(self, xf: &X, rf: F, init: R) -> R
    where
        X: Transducer<Self::Item, Out>,
        F: Reducer<R, Out>,
    {
        transduce_with(xf, rf, init, self)
    }

    /// Reduce `self` through `xf`, appending every output to `container`.
    fn transduce_into<Out, X, C>(self, xf: &X, container: C) -> C
    where
        X: Transducer<Self::Item, Out>,
        C: Extend<Out>,
    {
        into(xf, container, self)
    }
}

impl<I: IntoIterator> TransduceExt for I {}
