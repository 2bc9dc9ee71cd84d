//! stk-streak
//!
//! Longest run of consecutive strictly positive values in an ordered series.
//! - Zero and negatives break a run; so does `NaN` (it never compares `> 0`)
//! - Single left-to-right pass, O(1) extra space
//! - Slice, iterator and incremental (push-based) entry points share one predicate
//! - Pure deterministic logic (no IO, no time, no logging)

mod counter;
mod summary;

pub use counter::StreakCounter;
pub use summary::{summarize_streaks, StreakSummary};

/// True when `value` is strictly greater than the zero of its type.
///
/// `T::default()` is zero for every primitive integer and float.
#[inline]
pub fn is_strictly_positive<T>(value: &T) -> bool
where
    T: PartialOrd + Default,
{
    *value > T::default()
}

/// Length of the longest contiguous run of strictly positive values.
///
/// Returns 0 for an empty slice or one with no positive element.
pub fn longest_positive_streak<T>(values: &[T]) -> usize
where
    T: PartialOrd + Default,
{
    let mut current_run = 0usize;
    let mut best_run = 0usize;

    for v in values {
        if is_strictly_positive(v) {
            current_run += 1;
        } else {
            current_run = 0;
        }
        best_run = best_run.max(current_run);
    }

    best_run
}

/// Iterator form of [`longest_positive_streak`].
///
/// Consumes `values` exactly once. The iterator must be finite; for an
/// unbounded source feed a [`StreakCounter`] and read [`StreakCounter::best`].
pub fn longest_positive_streak_iter<I>(values: I) -> usize
where
    I: IntoIterator,
    I::Item: PartialOrd + Default,
{
    let mut counter = StreakCounter::new();
    counter.extend(values);
    counter.best()
}
