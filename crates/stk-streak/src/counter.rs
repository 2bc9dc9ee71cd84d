use crate::is_strictly_positive;

/// Incremental streak state.
///
/// Holds only two run lengths and a count of observed values, so it can be
/// fed from an unbounded source; [`best`](Self::best) is the answer for the
/// prefix seen so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakCounter {
    current: usize,
    best: usize,
    observed: usize,
}

impl StreakCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one value. Returns the run length ending at this value
    /// (0 when the value broke the run).
    pub fn push<T>(&mut self, value: T) -> usize
    where
        T: PartialOrd + Default,
    {
        if is_strictly_positive(&value) {
            self.current += 1;
        } else {
            self.current = 0;
        }
        self.best = self.best.max(self.current);
        self.observed += 1;
        self.current
    }

    /// Run length ending at the last value pushed.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Longest run seen so far.
    pub fn best(&self) -> usize {
        self.best
    }

    /// Number of values pushed since construction or the last reset.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T> Extend<T> for StreakCounter
where
    T: PartialOrd + Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}
