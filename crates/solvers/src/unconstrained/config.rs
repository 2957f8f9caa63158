use thiserror::Error;

/// Configuration shared by the unconstrained strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating unconstrained solver parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("order must be at least 1")]
    Order,

    #[error("offset must be finite and non-zero")]
    Offset,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("decrease must be in (0, 1)")]
    Decrease,

    #[error("shrink must be in (0, 1)")]
    Shrink,

    #[error("max_backtracks must be at least 1")]
    MaxBacktracks,

    #[error("bounds must be finite and non-empty")]
    Bounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iters: 10_000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The tolerance bounds the gradient norm at convergence and is also the
    /// tolerance passed to every line search.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-3, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
    }

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_iters(), 10_000);
    }
}
