mod interval;

use interval::GoldenInterval;

use super::{ConfigError, LineMinimum, LineSearch, normalize};

/// Golden section search.
///
/// Keeps two interior points at golden-ratio positions and discards the
/// subinterval beyond the worse one, so each iteration reuses one previous
/// evaluation and costs a single new one. Iteration stops once the half-width
/// of the interval is within the tolerance; the reported minimizer is the
/// interval midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldenSection {
    max_iters: usize,
}

impl Default for GoldenSection {
    fn default() -> Self {
        // Each iteration shrinks by φ⁻¹, so 200 iterations reach any tolerance
        // representable relative to a unit interval.
        Self { max_iters: 200 }
    }
}

impl GoldenSection {
    /// Creates a golden section search with an iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl LineSearch for GoldenSection {
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
    {
        let (left, right) = normalize(interval);
        let mut interval = GoldenInterval::new(left, right);

        let mut left_value = phi(interval.inner_left);
        let mut right_value = phi(interval.inner_right);
        let mut evals = 2;

        for _ in 0..self.max_iters {
            if interval.width() / 2.0 <= tolerance {
                break;
            }
            if left_value <= right_value {
                right_value = left_value;
                left_value = phi(interval.shrink_right());
            } else {
                left_value = right_value;
                right_value = phi(interval.shrink_left());
            }
            evals += 1;
        }

        let x = interval.midpoint();
        LineMinimum {
            x,
            value: phi(x),
            evals: evals + 1,
        }
    }
}
