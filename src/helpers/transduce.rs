//! Facade entry points over [`reduce`].
//!
//! - [`transduce`] -- the downstream initializes the accumulator.
//! - [`transduce_with`] -- the caller supplies the accumulator; `init` is never called.
//! - [`transduce_step`] -- like `transduce_with`, for a bare step closure.
//! - [`into`] -- append every output into a container.

use std::iter;

use tracing::debug;

use crate::error::Result;
use crate::reducer::{Reducer, completing};
use crate::runner::reduce;
use crate::signal::TerminationSignal;
use crate::transducer::Transducer;

/// Apply `xf` to `rf` and reduce `source`, starting from `rf.init()`.
///
/// # Errors
///
/// Returns [`TransduceError::UnsupportedInit`](crate::TransduceError::UnsupportedInit)
/// if `rf` cannot produce an initial accumulator; no input is consumed then.
pub fn transduce<R, In, Out, X, F, I>(xf: &X, mut rf: F, source: I) -> Result<R>
where
    X: Transducer<In, Out>,
    F: Reducer<R, Out>,
    I: IntoIterator<Item = In>,
{
    let init = rf.init().inspect_err(|err| {
        debug!(%err, "downstream reducing function cannot initialize");
    })?;
    Ok(reduce(xf.apply::<R, F>(rf), init, source))
}

/// Apply `xf` to `rf` and reduce `source`, starting from `init`.
pub fn transduce_with<R, In, Out, X, F, I>(xf: &X, rf: F, init: R, source: I) -> R
where
    X: Transducer<In, Out>,
    F: Reducer<R, Out>,
    I: IntoIterator<Item = In>,
{
    reduce(xf.apply::<R, F>(rf), init, source)
}

/// Promote `step` with [`completing`] and reduce `source` from `init`.
///
/// ```
/// use ironfold::{map, transduce_step};
///
/// let xf = map(|n: i32| n + 1);
/// let out = transduce_step(&xf, |mut acc: Vec<i32>, n, _| { acc.push(n); acc }, Vec::new(), 0..3);
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub fn transduce_step<R, In, Out, X, S, I>(xf: &X, step: S, init: R, source: I) -> R
where
    X: Transducer<In, Out>,
    S: FnMut(R, Out, &mut TerminationSignal) -> R,
    I: IntoIterator<Item = In>,
{
    transduce_with(xf, completing(step), init, source)
}

/// Reduce `source` through `xf`, appending every output to `container`.
///
/// ```
/// use ironfold::{filter, into, map, Transducer};
///
/// let xf = filter(|n: &u32| n % 2 == 1).compose(map(|n: u32| n.to_string()));
/// assert_eq!(into(&xf, Vec::new(), 0..10), vec!["1", "3", "5", "7", "9"]);
/// ```
pub fn into<In, Out, X, C, I>(xf: &X, container: C, source: I) -> C
where
    X: Transducer<In, Out>,
    C: Extend<Out>,
    I: IntoIterator<Item = In>,
{
    transduce_step(
        xf,
        |mut acc: C, item: Out, _: &mut TerminationSignal| {
            acc.extend(iter::once(item));
            acc
        },
        container,
        source,
    )
}
