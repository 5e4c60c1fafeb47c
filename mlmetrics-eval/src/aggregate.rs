//! Support-weighted averaging of per-class scores.

/// Running `sum(score * weight) / sum(weight)`.
///
/// Weights are class supports. An accumulator that received no weight
/// (every class skipped, or no classes at all) evaluates to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedAverage {
    weighted_sum: f64,
    total_weight: usize,
}

impl WeightedAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one class score with its support.
    #[inline]
    pub fn push(&mut self, score: f64, weight: usize) {
        self.weighted_sum += score * weight as f64;
        self.total_weight += weight;
    }

    /// Sum of the weights pushed so far.
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }

    /// The weighted mean, or 0 when the total weight is 0.
    pub fn value(&self) -> f64 {
        if self.total_weight == 0 {
            return 0.0;
        }
        self.weighted_sum / self.total_weight as f64
    }
}

impl Extend<(f64, usize)> for WeightedAverage {
    fn extend<I: IntoIterator<Item = (f64, usize)>>(&mut self, iter: I) {
        for (score, weight) in iter {
            self.push(score, weight);
        }
    }
}

impl FromIterator<(f64, usize)> for WeightedAverage {
    fn from_iter<I: IntoIterator<Item = (f64, usize)>>(iter: I) -> Self {
        let mut avg = Self::new();
        avg.extend(iter);
        avg
    }
}

/// Weighted mean of `(score, weight)` pairs; 0 if the weights sum to 0.
pub fn weighted_average<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, usize)>,
{
    pairs.into_iter().collect::<WeightedAverage>().value()
}
