use super::{ConfigError, LineMinimum, SlopeSearch};

/// Secant search on `phi' = 0`.
///
/// Starts from the two points `interval[0]` and `interval[1]`, which need
/// not bracket the stationary point, and replaces the older one with the
/// root of the secant through their slopes. The order matters: iteration
/// continues from `interval[1]`.
///
/// Stops once `|phi'|` is within the tolerance, or when the two slopes are
/// equal and the secant has no root. Convergence is not guaranteed for
/// poor starting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secant {
    max_iters: usize,
}

impl Default for Secant {
    fn default() -> Self {
        Self { max_iters: 100 }
    }
}

impl Secant {
    /// Creates a secant search with an iteration cap.
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
}

impl SlopeSearch for Secant {
    fn search<F, G>(&self, phi: F, slope: G, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let [mut previous, mut x] = interval;
        let mut previous_slope = slope(previous);

        for _ in 0..self.max_iters {
            let current_slope = slope(x);
            if current_slope.abs() <= tolerance {
                break;
            }

            let denominator = current_slope - previous_slope;
            if denominator == 0.0 || !denominator.is_finite() {
                break;
            }

            let next = x - (x - previous) * current_slope / denominator;
            previous = x;
            previous_slope = current_slope;
            x = next;
        }

        LineMinimum {
            x,
            value: phi(x),
            evals: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn exact_on_quadratic() {
        let min = Secant::default().search(|x| (x - 2.0).powi(2), |x| 2.0 * (x - 2.0), [0.0, 5.0], 1e-6);

        assert_abs_diff_eq!(min.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(min.value, 0.0, epsilon = 1e-12);
        assert_eq!(min.evals, 1);
    }

    #[test]
    fn converges_outside_starting_pair() {
        let min = Secant::default().search(
            |x| x + 2.0 / x,
            |x| 1.0 - 2.0 / (x * x),
            [0.8, 1.0],
            1e-10,
        );

        assert_abs_diff_eq!(min.x, 2.0_f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn stops_on_flat_slope() {
        // phi' is constant, so the secant never crosses zero.
        let min = Secant::default().search(|x| 3.0 * x, |_| 3.0, [0.0, 1.0], 1e-6);

        assert_abs_diff_eq!(min.x, 1.0);
        assert_eq!(min.evals, 1);
    }
}
