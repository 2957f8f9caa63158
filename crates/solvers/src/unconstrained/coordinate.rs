//! Coordinate descent.
//!
//! Alternately minimizes along `x` with `y` fixed and along `y` with `x`
//! fixed, each within caller-supplied bounds. Only objective values are
//! needed. The run stops once a full sweep moves the point, or changes the
//! objective, by no more than the tolerance.

use descent_core::{EvalCounter, Objective, Observer, Vec2};

use crate::line_search::{GoldenSection, LineSearch};

use super::{Action, Config, ConfigError, Ray, Searcher, Solution, Status};

/// Search intervals for each coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    x: [f64; 2],
    y: [f64; 2],
}

impl Bounds {
    /// Creates bounds from an `x` interval and a `y` interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bounds`] if any bound is not finite or an
    /// interval has zero width.
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Result<Self, ConfigError> {
        let valid = |[a, b]: [f64; 2]| a.is_finite() && b.is_finite() && a != b;
        if !valid(x) || !valid(y) {
            return Err(ConfigError::Bounds);
        }
        Ok(Self { x, y })
    }

    /// Returns the `x` interval.
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        self.x
    }

    /// Returns the `y` interval.
    #[must_use]
    pub fn y(&self) -> [f64; 2] {
        self.y
    }
}

/// Emitted after each full sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based sweep number.
    pub iter: usize,

    /// The point after the sweep.
    pub point: Vec2,

    /// Objective value at `point`.
    pub value: f64,

    /// Objective evaluations performed so far.
    pub evals: usize,
}

/// Minimizes `problem` by coordinate descent within `bounds`.
pub fn minimize<P, L, Obs>(
    problem: &P,
    start: Vec2,
    bounds: &Bounds,
    config: &Config,
    line_search: &L,
    mut observer: Obs,
) -> Solution
where
    P: Objective,
    L: LineSearch,
    Obs: Observer<Event, Action>,
{
    let counter = EvalCounter::new();
    let searcher = Searcher::new(problem, &counter, line_search, config.tolerance());
    let along_x = Vec2::new(1.0, 0.0);
    let along_y = Vec2::new(0.0, 1.0);

    let mut point = start;
    let mut value = searcher.value(point);

    for iter in 0..config.max_iters() {
        let previous = point;
        let previous_value = value;

        point = searcher.minimize_within(Ray::new(Vec2::new(0.0, point.y), along_x), bounds.x);
        point = searcher.minimize_within(Ray::new(Vec2::new(point.x, 0.0), along_y), bounds.y);
        value = searcher.value(point);

        let event = Event {
            iter,
            point,
            value,
            evals: searcher.evals(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return searcher.finish(point, Status::StoppedByObserver, iter + 1);
        }

        let moved = (point - previous).norm();
        let improved = (value - previous_value).abs();
        if moved <= config.tolerance() || improved <= config.tolerance() {
            return searcher.finish(point, Status::Converged, iter + 1);
        }
    }

    searcher.finish(point, Status::MaxIters, config.max_iters())
}

/// Minimizes `problem` by coordinate descent without observer support.
///
/// Uses golden-section line searches.
pub fn minimize_unobserved<P: Objective>(
    problem: &P,
    start: Vec2,
    bounds: &Bounds,
    config: &Config,
) -> Solution {
    minimize(problem, start, bounds, config, &GoldenSection::default(), ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use descent_core::FnObjective;

    use crate::line_search::Fibonacci;

    fn exp_problem() -> FnObjective<impl Fn(f64, f64) -> f64> {
        FnObjective(|x: f64, y: f64| x * x + (x * x + y * y).exp() + 4.0 * x + 3.0 * y)
    }

    fn square_bounds() -> Bounds {
        Bounds::new([-4.0, 4.0], [-4.0, 4.0]).expect("valid bounds")
    }

    #[test]
    fn finds_exp_minimum() {
        let solution = minimize_unobserved(
            &exp_problem(),
            Vec2::new(1.0, 1.0),
            &square_bounds(),
            &Config::default(),
        );

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.point.x, -0.613225, epsilon = 1e-4);
        assert_abs_diff_eq!(solution.point.y, -0.663293, epsilon = 1e-4);
        assert_abs_diff_eq!(solution.value, -1.805292, epsilon = 1e-4);
    }

    #[test]
    fn separable_problem_converges_in_two_sweeps() {
        let problem = FnObjective(|x: f64, y: f64| (x - 1.0).powi(2) + (y + 2.0).powi(2));
        let solution = minimize_unobserved(
            &problem,
            Vec2::ZERO,
            &square_bounds(),
            &Config::default(),
        );

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 2);
        assert_abs_diff_eq!(solution.point.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.point.y, -2.0, epsilon = 1e-6);
    }

    #[test]
    fn minimum_outside_bounds_lands_on_edge() {
        let problem = FnObjective(|x: f64, y: f64| (x - 10.0).powi(2) + y * y);
        let bounds = Bounds::new([-1.0, 2.0], [-1.0, 1.0]).expect("valid bounds");

        let solution = minimize_unobserved(&problem, Vec2::ZERO, &bounds, &Config::default());

        assert_abs_diff_eq!(solution.point.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn works_with_other_line_searches() {
        let solution = minimize(
            &exp_problem(),
            Vec2::new(1.0, 1.0),
            &square_bounds(),
            &Config::default(),
            &Fibonacci::default(),
            (),
        );

        assert_abs_diff_eq!(solution.point.x, -0.613225, epsilon = 1e-4);
        assert_abs_diff_eq!(solution.point.y, -0.663293, epsilon = 1e-4);
    }

    #[test]
    fn observer_sees_every_sweep_and_can_stop() {
        let mut sweeps = Vec::new();
        let solution = minimize(
            &exp_problem(),
            Vec2::new(1.0, 1.0),
            &square_bounds(),
            &Config::default(),
            &GoldenSection::default(),
            |event: &Event| {
                sweeps.push(event.iter);
                (event.iter == 1).then_some(Action::StopEarly)
            },
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(sweeps, vec![0, 1]);
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert_eq!(
            Bounds::new([1.0, 1.0], [0.0, 1.0]),
            Err(ConfigError::Bounds)
        );
        assert_eq!(
            Bounds::new([0.0, 1.0], [0.0, f64::INFINITY]),
            Err(ConfigError::Bounds)
        );
    }
}
