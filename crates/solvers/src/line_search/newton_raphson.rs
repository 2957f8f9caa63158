use super::{ConfigError, LineMinimum};

/// Newton–Raphson search on `phi' = 0`.
///
/// Iterates `x ← x - phi'(x) / phi''(x)` from a single starting point until
/// `|phi'|` is within the tolerance. A zero or non-finite curvature stops
/// the iteration at the current point. Converges quadratically near a
/// minimum with positive curvature, but may diverge from a poor start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewtonRaphson {
    max_iters: usize,
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self { max_iters: 100 }
    }
}

impl NewtonRaphson {
    /// Creates a Newton–Raphson search with an iteration cap.
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

    /// Returns an approximate stationary point of `phi` starting from `start`.
    ///
    /// Only the final `phi` evaluation is counted.
    pub fn search<F, G, H>(
        &self,
        phi: F,
        slope: G,
        curvature: H,
        start: f64,
        tolerance: f64,
    ) -> LineMinimum
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
        H: Fn(f64) -> f64,
    {
        let mut x = start;

        for _ in 0..self.max_iters {
            let g = slope(x);
            if g.abs() <= tolerance {
                break;
            }
            let h = curvature(x);
            if h == 0.0 || !h.is_finite() {
                break;
            }
            x -= g / h;
        }

        LineMinimum {
            x,
            value: phi(x),
            evals: 1,
        }
    }
}
