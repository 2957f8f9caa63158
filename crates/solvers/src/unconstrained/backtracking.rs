//! Gradient descent with backtracking.
//!
//! Each iteration moves along `-∇f`, starting from a fixed step length and
//! shrinking it until the Armijo condition
//! `f(x - α∇f) - f(x) <= -α ε ‖∇f‖²` holds.

use descent_core::{Differentiable, EvalCounter, Observer, Steppable, Vec2};

use super::{Action, Config, ConfigError, Error, Event, Searcher, Solution, Status};

/// Step-length parameters for backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backtracking {
    initial_step: f64,
    decrease: f64,
    shrink: f64,
    max_backtracks: usize,
}

impl Backtracking {
    /// Creates backtracking parameters.
    ///
    /// - `initial_step` is the first step length tried each iteration.
    /// - `decrease` is the sufficient-decrease factor `ε`.
    /// - `shrink` multiplies the step after each rejected trial.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive, or if
    /// `decrease` or `shrink` lies outside `(0, 1)`.
    pub fn new(initial_step: f64, decrease: f64, shrink: f64) -> Result<Self, ConfigError> {
        let unit = |v: f64| v > 0.0 && v < 1.0;

        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !unit(decrease) {
            return Err(ConfigError::Decrease);
        }
        if !unit(shrink) {
            return Err(ConfigError::Shrink);
        }

        Ok(Self {
            initial_step,
            decrease,
            shrink,
            max_backtracks: 64,
        })
    }

    /// Sets the number of step reductions tried before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxBacktracks`] if `max_backtracks` is zero.
    pub fn with_max_backtracks(self, max_backtracks: usize) -> Result<Self, ConfigError> {
        if max_backtracks == 0 {
            return Err(ConfigError::MaxBacktracks);
        }
        Ok(Self {
            max_backtracks,
            ..self
        })
    }

    /// Returns the initial step length.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the sufficient-decrease factor.
    #[must_use]
    pub fn decrease(&self) -> f64 {
        self.decrease
    }

    /// Returns the step reduction factor.
    #[must_use]
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// Returns the maximum number of step reductions per iteration.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }
}

impl Default for Backtracking {
    fn default() -> Self {
        Self {
            initial_step: 0.1,
            decrease: 1e-6,
            shrink: 0.1,
            max_backtracks: 64,
        }
    }
}

/// Minimizes `problem` by backtracking gradient descent.
///
/// # Errors
///
/// Returns [`Error::StepNotFound`] if no step satisfies sufficient decrease
/// within the allowed reductions, or [`Error::NonFiniteGradient`] if the
/// gradient is not finite.
pub fn minimize<P, Obs>(
    problem: &P,
    start: Vec2,
    params: &Backtracking,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Differentiable,
    Obs: Observer<Event, Action>,
{
    let counter = EvalCounter::new();
    let searcher = Searcher::fixed_step(problem, &counter, config.tolerance());

    let mut point = start;

    for iter in 0..config.max_iters() {
        let gradient = searcher.iterate(point)?.gradient;

        let event = Event {
            iter,
            point,
            gradient,
            evals: searcher.evals(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(searcher.finish(point, Status::StoppedByObserver, iter));
        }

        if gradient.norm() <= config.tolerance() {
            return Ok(searcher.finish(point, Status::Converged, iter));
        }

        point = sufficient_step(&searcher, point, gradient, params)?;
    }

    let status = if searcher.iterate(point)?.gradient.norm() <= config.tolerance() {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(searcher.finish(point, status, config.max_iters()))
}

/// Minimizes `problem` by backtracking gradient descent without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<P: Differentiable>(
    problem: &P,
    start: Vec2,
    params: &Backtracking,
    config: &Config,
) -> Result<Solution, Error> {
    minimize(problem, start, params, config, ())
}

/// Returns the first trial point that satisfies sufficient decrease.
fn sufficient_step<P: Differentiable>(
    searcher: &Searcher<'_, P, ()>,
    point: Vec2,
    gradient: Vec2,
    params: &Backtracking,
) -> Result<Vec2, Error> {
    let value = searcher.value(point);
    let required = params.decrease * gradient.norm_squared();

    let mut alpha = params.initial_step;
    for _ in 0..params.max_backtracks {
        let trial = point.step(-gradient, alpha);
        if searcher.value(trial) - value <= -alpha * required {
            return Ok(trial);
        }
        alpha *= params.shrink;
    }

    Err(Error::StepNotFound {
        point,
        attempts: params.max_backtracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use descent_core::FnDifferentiable;

    #[test]
    fn finds_exp_minimum() {
        let problem = FnDifferentiable::new(
            |x: f64, y: f64| x * x + (x * x + y * y).exp() + 4.0 * x + 3.0 * y,
            |x: f64, y: f64| {
                let e = (x * x + y * y).exp();
                (2.0 * x + 2.0 * x * e + 4.0, 2.0 * y * e + 3.0)
            },
        );

        let solution = minimize_unobserved(
            &problem,
            Vec2::new(1.0, 1.0),
            &Backtracking::default(),
            &Config::default(),
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.point.x, -0.613225, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.point.y, -0.663293, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.value, -1.805292, epsilon = 1e-5);
    }

    #[test]
    fn quadratic_with_unit_step_is_exact() {
        // With f = (x² + y²)/2 and α = 1, the first trial lands on the origin.
        let problem = FnDifferentiable::new(|x: f64, y: f64| 0.5 * (x * x + y * y), |x, y| (x, y));
        let params = Backtracking::new(1.0, 0.5, 0.5).expect("valid params");

        let solution = minimize_unobserved(&problem, Vec2::new(3.0, -4.0), &params, &Config::default())
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.point, Vec2::ZERO);
        // One base value, one trial, one final value.
        assert_eq!(solution.evals, 3);
    }

    #[test]
    fn exhausted_backtracks_is_an_error() {
        // The gradient points the wrong way, so no step ever decreases f.
        let problem = FnDifferentiable::new(|x: f64, y: f64| x * x + y * y, |x, y| (-x, -y));
        let params = Backtracking::default()
            .with_max_backtracks(5)
            .expect("valid count");

        let error = minimize_unobserved(&problem, Vec2::new(1.0, 1.0), &params, &Config::default())
            .expect_err("no descent step exists");

        assert_eq!(
            error,
            Error::StepNotFound {
                point: Vec2::new(1.0, 1.0),
                attempts: 5,
            }
        );
    }

    #[test]
    fn iteration_budget_is_reported() {
        let problem = FnDifferentiable::new(|x: f64, y: f64| 9.0 * x * x + y * y, |x, y| (18.0 * x, 2.0 * y));
        let config = Config::new(1e-10, 3).expect("valid config");

        let solution = minimize_unobserved(
            &problem,
            Vec2::new(1.0, 1.0),
            &Backtracking::default(),
            &config,
        )
        .expect("steps exist");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn validates_parameters() {
        assert_eq!(Backtracking::new(0.0, 0.5, 0.5), Err(ConfigError::InitialStep));
        assert_eq!(Backtracking::new(1.0, 1.0, 0.5), Err(ConfigError::Decrease));
        assert_eq!(Backtracking::new(1.0, 0.5, 0.0), Err(ConfigError::Shrink));
        assert_eq!(
            Backtracking::default().with_max_backtracks(0),
            Err(ConfigError::MaxBacktracks)
        );
    }
}
