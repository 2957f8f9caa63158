use super::{ConfigError, LineMinimum, LineSearch, normalize};

/// Dichotomy search.
///
/// Evaluates two probes a distance `delta` apart around the interval midpoint
/// and keeps the half containing the smaller value. Each iteration costs two
/// evaluations and nearly halves the interval.
///
/// The probe separation is `delta = offset_ratio * tolerance`. The interval
/// can never shrink below `delta`, so `offset_ratio` must be less than 2 for
/// the half-width to reach the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dichotomy {
    offset_ratio: f64,
    max_iters: usize,
}

impl Default for Dichotomy {
    fn default() -> Self {
        Self {
            offset_ratio: 0.1,
            max_iters: 200,
        }
    }
}

impl Dichotomy {
    /// Creates a dichotomy search.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset_ratio` is outside `(0, 2)` or `max_iters`
    /// is zero.
    pub fn new(offset_ratio: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !(offset_ratio > 0.0 && offset_ratio < 2.0) {
            return Err(ConfigError::OffsetRatio);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            offset_ratio,
            max_iters,
        })
    }

    /// Returns the probe separation as a multiple of the tolerance.
    #[must_use]
    pub fn offset_ratio(&self) -> f64 {
        self.offset_ratio
    }
}

impl LineSearch for Dichotomy {
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
    {
        let (mut a, mut b) = normalize(interval);
        let delta = self.offset_ratio * tolerance;
        let mut evals = 0;

        for _ in 0..self.max_iters {
            if (b - a) / 2.0 <= tolerance {
                break;
            }
            let mid = 0.5 * (a + b);
            let c = mid - delta / 2.0;
            let d = mid + delta / 2.0;

            if phi(c) <= phi(d) {
                b = d;
            } else {
                a = c;
            }
            evals += 2;
        }

        let x = 0.5 * (a + b);
        LineMinimum {
            x,
            value: phi(x),
            evals: evals + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn minimizes_quadratic() {
        let min = Dichotomy::default().search(|x| (x - 1.3).powi(2), [0.0, 4.0], 1e-6);
        assert_abs_diff_eq!(min.x, 1.3, epsilon = 1e-6);
    }

    #[test]
    fn costs_two_evaluations_per_iteration() {
        let min = Dichotomy::default().search(|x| x * x, [-1.0, 1.0], 1e-3);
        assert_eq!(min.evals % 2, 1);
        assert!(min.evals > 1);
    }

    #[test]
    fn already_narrow_interval_needs_one_evaluation() {
        let min = Dichotomy::default().search(|x| x * x, [0.0, 1e-4], 1e-3);
        assert_eq!(min.evals, 1);
        assert_abs_diff_eq!(min.x, 5e-5);
    }

    #[test]
    fn rejects_offsets_that_cannot_converge() {
        assert_eq!(Dichotomy::new(2.0, 10), Err(ConfigError::OffsetRatio));
        assert_eq!(Dichotomy::new(0.0, 10), Err(ConfigError::OffsetRatio));
        assert_eq!(Dichotomy::new(0.5, 0), Err(ConfigError::MaxIters));
    }
}
