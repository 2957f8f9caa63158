use descent_core::{
    Counted, Differentiable, EvalCounter, Mat2, Objective, Steppable, TwiceDifferentiable, Vec2,
};

use crate::line_search::{LineSearch, NewtonRaphson, SlopeSearch, bracket};

use super::{Error, Solution, Status};

/// A half-line `origin + alpha * direction` for `alpha >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    /// Creates a ray from `origin` along `direction`.
    #[must_use]
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Creates the ray from `from` through `to`.
    ///
    /// `at(1.0)` returns `to`.
    #[must_use]
    pub fn through(from: Vec2, to: Vec2) -> Self {
        Self::new(from, to - from)
    }

    /// Returns the point at step length `alpha`.
    #[must_use]
    pub fn at(&self, alpha: f64) -> Vec2 {
        self.origin.step(self.direction, alpha)
    }
}

/// A point together with its gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    pub point: Vec2,
    pub gradient: Vec2,
}

/// Evaluation context for a single solver run.
///
/// Every objective evaluation made through a `Searcher`, including those
/// inside the bracketing helper and the line search, is recorded in the
/// run's [`EvalCounter`]. Gradients and Hessians are not counted.
///
/// Methods that pick step lengths without a line search use
/// [`Searcher::fixed_step`], whose line-search slot is `()`.
pub struct Searcher<'a, P, L> {
    problem: Counted<'a, &'a P>,
    line_search: &'a L,
    tolerance: f64,
}

impl<'a, P, L> Searcher<'a, P, L> {
    /// Creates a searcher that records evaluations in `counter`.
    pub fn new(problem: &'a P, counter: &'a EvalCounter, line_search: &'a L, tolerance: f64) -> Self {
        Self {
            problem: Counted::new(problem, counter),
            line_search,
            tolerance,
        }
    }

    /// Returns the objective evaluations recorded so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.problem.counter().count()
    }

    /// Returns the tolerance passed to each line search.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl<'a, P> Searcher<'a, P, ()> {
    /// Creates a searcher with no line search that records evaluations in
    /// `counter`.
    pub fn fixed_step(problem: &'a P, counter: &'a EvalCounter, tolerance: f64) -> Self {
        Self {
            problem: Counted::new(problem, counter),
            line_search: &(),
            tolerance,
        }
    }
}

impl<P: Objective, L> Searcher<'_, P, L> {
    /// Evaluates the objective, recording the call.
    pub fn value(&self, point: Vec2) -> f64 {
        self.problem.value(point)
    }

    /// Evaluates the objective at `point` and packages the result.
    ///
    /// `evals` is the counter's total, so it includes evaluations recorded
    /// before this searcher was created.
    pub(super) fn finish(&self, point: Vec2, status: Status, iters: usize) -> Solution {
        let value = self.value(point);
        Solution {
            status,
            point,
            value,
            evals: self.evals(),
            iters,
        }
    }
}

impl<P: Objective, L: LineSearch> Searcher<'_, P, L> {
    /// Minimizes the objective along `ray`.
    ///
    /// The step interval comes from [`bracket`], so only `alpha >= 0` is
    /// searched.
    pub fn minimize_along(&self, ray: Ray) -> Vec2 {
        let phi = |alpha: f64| self.value(ray.at(alpha));
        let interval = bracket(&phi);
        let minimum = self.line_search.search(&phi, interval, self.tolerance);
        ray.at(minimum.x)
    }

    /// Minimizes the objective along `ray` with the step restricted to
    /// `interval`.
    pub fn minimize_within(&self, ray: Ray, interval: [f64; 2]) -> Vec2 {
        let phi = |alpha: f64| self.value(ray.at(alpha));
        let minimum = self.line_search.search(&phi, interval, self.tolerance);
        ray.at(minimum.x)
    }
}

impl<P: Differentiable, L> Searcher<'_, P, L> {
    /// Evaluates the gradient.
    pub fn gradient(&self, point: Vec2) -> Vec2 {
        self.problem.gradient(point)
    }

    /// Evaluates the gradient and pairs it with `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGradient`] if any gradient component is NaN
    /// or infinite.
    pub fn iterate(&self, point: Vec2) -> Result<Iterate, Error> {
        let gradient = self.gradient(point);
        if !gradient.is_finite() {
            return Err(Error::NonFiniteGradient { point, gradient });
        }
        Ok(Iterate { point, gradient })
    }

    /// Returns the slope `∇f(ray.at(alpha)) · direction` of the objective
    /// along `ray`.
    pub fn slope(&self, ray: Ray, alpha: f64) -> f64 {
        self.gradient(ray.at(alpha)).dot(ray.direction)
    }

    /// Minimizes the objective along `ray` with a slope-based search over the
    /// bracketed step interval.
    pub fn minimize_along_slope<S: SlopeSearch>(&self, ray: Ray, search: &S) -> Vec2 {
        let phi = |alpha: f64| self.value(ray.at(alpha));
        let interval = bracket(&phi);
        let minimum = search.search(&phi, |alpha| self.slope(ray, alpha), interval, self.tolerance);
        ray.at(minimum.x)
    }
}

impl<P: TwiceDifferentiable, L> Searcher<'_, P, L> {
    /// Evaluates the Hessian.
    pub fn hessian(&self, point: Vec2) -> Mat2 {
        self.problem.hessian(point)
    }

    /// Returns the curvature `dᵀ H d` of the objective along `ray`.
    pub fn curvature(&self, ray: Ray, alpha: f64) -> f64 {
        ray.direction.dot(self.hessian(ray.at(alpha)) * ray.direction)
    }

    /// Minimizes the objective along `ray` by Newton–Raphson on the step
    /// length, starting from `alpha = 0`.
    pub fn minimize_along_newton(&self, ray: Ray, search: &NewtonRaphson) -> Vec2 {
        let minimum = search.search(
            |alpha| self.value(ray.at(alpha)),
            |alpha| self.slope(ray, alpha),
            |alpha| self.curvature(ray, alpha),
            0.0,
            self.tolerance,
        );
        ray.at(minimum.x)
    }
}
