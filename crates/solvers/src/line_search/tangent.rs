use super::{ConfigError, LineMinimum, SlopeSearch, normalize};

/// Tangent-intersection search.
///
/// Requires `phi'(a) < 0 < phi'(b)`. Each iteration intersects the tangent
/// lines at both ends and keeps the side of the intersection where the slope
/// changes sign. If the slope is already non-negative at `a`, or
/// non-positive at `b`, that end is returned.
///
/// Stops when the interval width or `|phi'|` at the intersection is within
/// the tolerance. For a quadratic the intersection is the interval midpoint,
/// so the search reduces to bisection on the slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tangent {
    max_iters: usize,
}

impl Default for Tangent {
    fn default() -> Self {
        Self { max_iters: 200 }
    }
}

impl Tangent {
    /// Creates a tangent search with an iteration cap.
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

impl SlopeSearch for Tangent {
    fn search<F, G>(&self, phi: F, slope: G, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let (mut a, mut b) = normalize(interval);

        if slope(a) >= 0.0 {
            return LineMinimum {
                x: a,
                value: phi(a),
                evals: 1,
            };
        }
        if slope(b) <= 0.0 {
            return LineMinimum {
                x: b,
                value: phi(b),
                evals: 1,
            };
        }

        let mut x = 0.5 * (a + b);
        let mut evals = 0;

        for _ in 0..self.max_iters {
            let (slope_a, slope_b) = (slope(a), slope(b));
            let intercept_a = phi(a) - slope_a * a;
            let intercept_b = phi(b) - slope_b * b;
            evals += 2;

            x = (intercept_b - intercept_a) / (slope_a - slope_b);
            let slope_x = slope(x);

            if (b - a).abs() <= tolerance || slope_x.abs() <= tolerance {
                break;
            }
            if slope_x > 0.0 {
                b = x;
            } else {
                a = x;
            }
        }

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
    fn bisects_slope_of_quadratic() {
        let min = Tangent::default().search(
            |x| x * x + 2.0 * x + 1.0,
            |x| 2.0 * x + 2.0,
            [-3.0, 2.0],
            1e-6,
        );

        assert_abs_diff_eq!(min.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(min.value, 0.0, epsilon = 1e-6);
        assert_eq!(min.evals, 43);
    }

    #[test]
    fn returns_end_when_slope_does_not_change_sign() {
        let increasing = Tangent::default().search(|x| x * x, |x| 2.0 * x, [1.0, 3.0], 1e-6);
        assert_abs_diff_eq!(increasing.x, 1.0);
        assert_eq!(increasing.evals, 1);

        let decreasing = Tangent::default().search(|x| x * x, |x| 2.0 * x, [-3.0, -1.0], 1e-6);
        assert_abs_diff_eq!(decreasing.x, -1.0);
    }

    #[test]
    fn minimizes_non_quadratic() {
        let min = Tangent::default().search(
            |x| x + 2.0 / x,
            |x| 1.0 - 2.0 / (x * x),
            [0.5, 3.5],
            1e-7,
        );

        assert_abs_diff_eq!(min.x, 2.0_f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Tangent::new(0), Err(ConfigError::MaxIters));
    }
}
