//! Statistics accumulator for ensemble cross-sections and path payoffs.

use esg_core::Real;

/// Running mean, variance and range of a stream of samples.
///
/// Uses Welford's update so that the variance of large ensembles with a big
/// mean (e.g. price levels in the thousands) does not lose precision.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    mean: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// An accumulator that has seen nothing.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Samples added so far.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Unbiased (Bessel-corrected) variance.  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        (self.count > 1).then(|| self.m2 / (self.count as Real - 1.0))
    }

    /// Square root of [`variance`](Self::variance).
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean, `σ / √n`.  Returns `None` for fewer than
    /// 2 samples.
    pub fn error_estimate(&self) -> Option<Real> {
        self.variance().map(|v| (v / self.count as Real).sqrt())
    }

    /// Smallest sample seen.
    pub fn minimum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest sample seen.
    pub fn maximum(&self) -> Option<Real> {
        (self.count > 0).then_some(self.max)
    }

    /// Forget every sample.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn moments_of_small_sample() {
        let s: Statistics = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();
        assert_eq!(s.samples(), 5);
        assert_abs_diff_eq!(s.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(s.minimum(), Some(1.0));
        assert_eq!(s.maximum(), Some(5.0));
    }

    #[test]
    fn error_estimate_and_reset() {
        let mut s: Statistics = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();
        // sqrt(2.5 / 5)
        assert_abs_diff_eq!(s.error_estimate().unwrap(), 0.5_f64.sqrt(), epsilon = 1e-12);
        s.reset();
        assert_eq!(s.samples(), 0);
        assert!(s.error_estimate().is_none());
    }

    #[test]
    fn large_offset_keeps_precision() {
        let s: Statistics = (0..1_000).map(|i| 1.0e9 + (i % 2) as Real).collect();
        assert_abs_diff_eq!(s.mean().unwrap(), 1.0e9 + 0.5, epsilon = 1e-6);
        // variance of a 0/1 alternating sequence with Bessel correction
        assert_abs_diff_eq!(s.variance().unwrap(), 0.25 * 1000.0 / 999.0, epsilon = 1e-9);
    }

    #[test]
    fn undefined_moments_are_none() {
        let s = Statistics::new();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        assert!(s.minimum().is_none());
        let one: Statistics = std::iter::once(4.0).collect();
        assert_eq!(one.mean(), Some(4.0));
        assert!(one.std_dev().is_none());
    }
}
