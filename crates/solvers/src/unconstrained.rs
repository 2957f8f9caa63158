//! Unconstrained descent methods for two-variable objectives.
//!
//! # Algorithm
//!
//! Most strategies share one loop: evaluate the gradient, stop if its norm is
//! within tolerance, choose a ray, minimize the objective along it, repeat.
//! They differ only in how the ray is chosen, captured by
//! [`DirectionPolicy`]:
//!
//! - [`Steepest`] — the negative gradient
//! - [`Accelerated`] — through the end of `p` steepest-descent steps
//! - [`Ravine`] — between the ends of two steepest-descent trajectories
//! - [`Newton`] — `-H⁻¹ ∇f` from the exact Hessian
//! - [`QuasiNewton`] — `-H ∇f` with a rank-1 inverse-Hessian estimate
//! - [`ConjugateGradient`] — Fletcher–Reeves directions
//!
//! Every "minimize along a ray" step brackets the step length with
//! [`bracket`](crate::line_search::bracket) and refines it with a
//! [`LineSearch`] to the same tolerance as the outer loop.
//!
//! Two strategies use their own loops: [`coordinate`] descent needs no
//! gradient and stops on small progress, and [`backtracking`] descent picks
//! its step by sufficient decrease instead of a line search.
//!
//! # Evaluation counting
//!
//! Each run owns one [`EvalCounter`]. Every objective evaluation, including
//! those made inside bracketing and line searches, increments it. The final
//! value reported in the [`Solution`] is one more evaluation. Gradient and
//! Hessian calls are not counted.
//!
//! Solvers that call [`minimize`] repeatedly, such as the exterior penalty
//! method, pass their own counter to [`minimize_counted`] so that one counter
//! spans every layer of the run. [`Solution::evals`] then reports the
//! counter's running total.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, before the convergence
//! check. Observers can return [`Action::StopEarly`] to halt with the current
//! iterate.
//!
//! # Limits
//!
//! Iterations are capped by [`Config::max_iters`]. Running out is reported as
//! [`Status::MaxIters`], never as convergence.

pub mod backtracking;
pub mod coordinate;

mod accelerated;
mod action;
mod config;
mod conjugate_gradient;
mod descend;
mod error;
mod event;
mod newton;
mod policy;
mod quasi_newton;
mod ravine;
mod searcher;
mod solution;
mod steepest;


pub use accelerated::Accelerated;
pub use action::Action;
pub use config::{Config, ConfigError};
pub use conjugate_gradient::ConjugateGradient;
pub use error::Error;
pub use event::Event;
pub use newton::{MIN_DETERMINANT, Newton};
pub use policy::DirectionPolicy;
pub use quasi_newton::QuasiNewton;
pub use ravine::Ravine;
pub use searcher::{Iterate, Ray, Searcher};
pub use solution::{Solution, Status};
pub use steepest::Steepest;

use descent_core::{Differentiable, EvalCounter, Observer, Vec2};

use crate::line_search::{GoldenSection, LineSearch};

/// Minimizes `problem` from `start`, choosing directions with `policy`.
///
/// The observer receives an [`Event`] each iteration.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the policy cannot form a direction (for example a
/// singular Hessian for [`Newton`]) or the gradient is not finite.
pub fn minimize<P, D, L, Obs>(
    problem: &P,
    start: Vec2,
    policy: D,
    config: &Config,
    line_search: &L,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Differentiable,
    D: DirectionPolicy<P>,
    L: LineSearch,
    Obs: Observer<Event, Action>,
{
    let counter = EvalCounter::new();
    descend::descend(problem, &counter, start, policy, config, line_search, observer)
}

/// Minimizes `problem` like [`minimize`], recording evaluations in `counter`.
///
/// [`Solution::evals`] and [`Event::evals`] report the counter's total,
/// including anything recorded before this call.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_counted<P, D, L, Obs>(
    problem: &P,
    counter: &EvalCounter,
    start: Vec2,
    policy: D,
    config: &Config,
    line_search: &L,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Differentiable,
    D: DirectionPolicy<P>,
    L: LineSearch,
    Obs: Observer<Event, Action>,
{
    descend::descend(problem, counter, start, policy, config, line_search, observer)
}

/// Minimizes `problem` with golden-section line searches and no observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<P, D>(
    problem: &P,
    start: Vec2,
    policy: D,
    config: &Config,
) -> Result<Solution, Error>
where
    P: Differentiable,
    D: DirectionPolicy<P>,
{
    minimize(problem, start, policy, config, &GoldenSection::default(), ())
}
