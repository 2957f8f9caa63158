use super::{ConfigError, LineMinimum, LineSearch, normalize};

/// Passive (uniform grid) search.
///
/// Evaluates `phi` at `k + 1` evenly spaced points including both ends,
/// where `k = ceil((b - a) / tolerance)`, and returns the smallest. The
/// first grid point wins ties. No assumption is made about the shape of
/// `phi`, but the cost grows with the inverse of the tolerance, so the grid
/// is capped at `max_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passive {
    max_points: usize,
}

impl Default for Passive {
    fn default() -> Self {
        Self {
            max_points: 100_001,
        }
    }
}

impl Passive {
    /// Creates a passive search that evaluates at most `max_points` points.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_points` is below 2.
    pub fn new(max_points: usize) -> Result<Self, ConfigError> {
        if max_points < 2 {
            return Err(ConfigError::MaxPoints);
        }
        Ok(Self { max_points })
    }

    /// Returns the largest number of grid points evaluated.
    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }
}

impl LineSearch for Passive {
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
    {
        let (a, b) = normalize(interval);
        let width = b - a;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((width / tolerance).ceil() as usize).clamp(1, self.max_points - 1);

        let mut best = LineMinimum {
            x: a,
            value: phi(a),
            evals: 1,
        };
        for i in 1..=steps {
            #[allow(clippy::cast_precision_loss)]
            let x = a + i as f64 * width / steps as f64;
            let value = phi(x);
            best.evals += 1;
            if value < best.value {
                best.x = x;
                best.value = value;
            }
        }

        best
    }
}
