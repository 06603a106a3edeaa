//! The reduction engine.
//!
//! [`reduce`] drives a source through a reducing function: one `step` per
//! item, in source order, stopping as soon as the [`TerminationSignal`] is
//! set, then exactly one `complete`. [`reduce_steps`] is the nested form used
//! by stages that reduce an inner sequence (`cat`): it shares the caller's
//! signal and leaves completion to the outermost reduction.

use tracing::trace;

use crate::reducer::Reducer;
use crate::signal::TerminationSignal;

/// Reduce `source` through `rf`, starting from `init`.
///
/// The source is consumed lazily; once a stage requests termination no
/// further items are pulled, so infinite sources are fine as long as some
/// stage eventually stops the reduction.
///
/// ```
/// use ironfold::{reduce, Append, Transducer, take};
///
/// let stage = take::<u64>(3).apply::<Vec<u64>, _>(Append);
/// let out: Vec<u64> = reduce(stage, Vec::new(), 0..);
/// assert_eq!(out, vec![0, 1, 2]);
/// ```
pub fn reduce<R, A, F, I>(mut rf: F, init: R, source: I) -> R
where
    F: Reducer<R, A>,
    I: IntoIterator<Item = A>,
{
    let mut signal = TerminationSignal::new();
    let acc = reduce_steps(&mut rf, init, source, &mut signal);
    trace!(stopped = signal.is_stopped(), "completing reduction");
    rf.complete(acc)
}

/// Step every item of `source` into `rf` under an existing `signal`.
///
/// Does not call `complete`. If `signal` is already set on entry, nothing is
/// consumed; if a step sets it, iteration stops and the signal stays set so
/// the enclosing reduction stops as well.
pub fn reduce_steps<R, A, F, I>(
    rf: &mut F,
    init: R,
    source: I,
    signal: &mut TerminationSignal,
) -> R
where
    F: Reducer<R, A> + ?Sized,
    I: IntoIterator<Item = A>,
{
    let mut acc = init;
    if signal.is_stopped() {
        return acc;
    }
    for (consumed, item) in source.into_iter().enumerate() {
        acc = rf.step(acc, item, signal);
        if signal.is_stopped() {
            trace!(steps = consumed + 1, "termination requested");
            break;
        }
    }
    acc
}
