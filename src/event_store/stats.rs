//! Single-pass reduction of live values into `Statistics`
//!
//! The mean uses Neumaier's compensated summation so that error does not grow
//! with the number of samples in the window. A running mean is kept alongside
//! for windows whose finite values overflow the sum.

use crate::types::Statistics;

/// Running min/max/sum over a stream of values
#[derive(Debug, Clone)]
pub struct StatsAccumulator {
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
    sum: f64,
    compensation: f64,
    running_mean: f64,
    all_finite: bool,
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self {
            count: 0,
            min: None,
            max: None,
            sum: 0.0,
            compensation: 0.0,
            running_mean: 0.0,
            all_finite: true,
        }
    }
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the running totals
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));

        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;

        // Both terms are scaled by 1/n first, so finite inputs stay finite
        let n = self.count as f64;
        self.running_mean += value / n - self.running_mean / n;
        self.all_finite &= value.is_finite();
    }

    /// Number of values seen so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Compensated sum of the values seen so far
    pub fn sum(&self) -> f64 {
        let total = self.sum + self.compensation;
        // Compensation is meaningless once the running sum overflowed
        if total.is_finite() {
            total
        } else {
            self.sum
        }
    }

    /// Finish the reduction
    pub fn finish(&self) -> Statistics {
        if self.count == 0 {
            return Statistics::empty();
        }

        let sum = self.sum();
        let mean = if sum.is_finite() || !self.all_finite {
            sum / self.count as f64
        } else {
            self.running_mean
        };

        Statistics {
            count: self.count,
            min: self.min,
            max: self.max,
            mean: Some(mean),
        }
    }
}

impl Extend<f64> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for StatsAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
