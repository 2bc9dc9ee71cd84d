use serde::{Deserialize, Serialize};

use crate::is_strictly_positive;

/// Single-pass report over a series.
///
/// `longest` always equals [`crate::longest_positive_streak`] on the same input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Number of values scanned.
    pub len: usize,
    /// Values strictly greater than zero.
    pub positive_count: usize,
    /// Maximal runs of positive values.
    pub streak_count: usize,
    pub longest: usize,
    /// Index of the first value of the earliest run achieving `longest`.
    pub longest_start: Option<usize>,
}

/// Scan `values` once and build a [`StreakSummary`].
///
/// Ties between equally long runs resolve to the earliest one.
pub fn summarize_streaks<T>(values: &[T]) -> StreakSummary
where
    T: PartialOrd + Default,
{
    let mut s = StreakSummary {
        len: values.len(),
        ..StreakSummary::default()
    };

    let mut current_run = 0usize;
    let mut run_start = 0usize;

    for (i, v) in values.iter().enumerate() {
        if is_strictly_positive(v) {
            if current_run == 0 {
                run_start = i;
                s.streak_count += 1;
            }
            current_run += 1;
            s.positive_count += 1;

            // strict: an equal later run does not move the start
            if current_run > s.longest {
                s.longest = current_run;
                s.longest_start = Some(run_start);
            }
        } else {
            current_run = 0;
        }
    }

    s
}
