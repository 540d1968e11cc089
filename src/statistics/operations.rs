//! Core statistical building blocks
//!
//! Every grouping in this crate reduces to "mean of the finite values in a
//! bucket", which [`MeanAccumulator`] implements.

/// Running mean that skips NaN and infinite values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    /// Add one observation; non-finite values are ignored.
    pub fn push(&mut self, value: f64) {
        if value.is_finite() {
            self.sum += value;
            self.count += 1;
        }
    }

    /// Number of finite observations seen
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, or `NaN` when no finite value was seen
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            f64::NAN
        }
    }

    /// Mean of the finite values of a slice
    #[must_use]
    pub fn mean_of<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
        let mut acc = Self::default();
        for &value in values {
            acc.push(value);
        }
        acc.mean()
    }
}
