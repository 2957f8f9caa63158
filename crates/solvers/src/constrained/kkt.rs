//! Active-set solver for the first-order optimality (KKT) conditions.
//!
//! # Algorithm
//!
//! The Hessian at the origin is estimated by forward differences of the
//! gradient with step equal to the tolerance. Together with the gradient at
//! the origin this gives a quadratic model `q(z) = cᵀz + ½ zᵀHz`.
//!
//! For each [`ActiveSet`], in [`ActiveSet::ALL`] order, the solver builds the
//! 4×4 system in `(x, y, λ₁, λ₂)`:
//!
//! ```text
//! H z - λ = -c
//! x = 0   if x is active, else λ₁ = 0
//! y = 0   if y is active, else λ₂ = 0
//! ```
//!
//! A singular system skips the candidate. Otherwise the candidate is feasible
//! when `x`, `y`, `λ₁` and `λ₂` are all at least `-tolerance`. The first
//! feasible candidate is returned.
//!
//! The model is exact for quadratic objectives. For other objectives the
//! result is the constrained minimizer of the model.
//!
//! When several active sets are feasible, enumeration order decides which is
//! returned.
//!
//! # Evaluation counting
//!
//! One [`EvalCounter`] spans the run. The gradient calls behind the
//! Hessian estimate go through it but, like every gradient call, are not
//! counted; the objective value at the accepted point is.
//!
//! # Observer Events
//!
//! One [`Event`] per candidate. Every event's action is honored:
//!
//! - [`Action::Reject`] on a [`Event::Feasible`] candidate skips it and
//!   continues the enumeration. On other events the candidate is already
//!   skipped, so it changes nothing.
//! - [`Action::StopEarly`] ends the solve with [`Error::StoppedByObserver`].

mod active_set;


pub use active_set::ActiveSet;

use descent_core::{Counted, Differentiable, EvalCounter, Mat2, Objective, Observer, Vec2};
use thiserror::Error;

use crate::linear;

/// Configuration for the KKT solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

/// Errors that can occur when validating a KKT solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// The tolerance is both the finite-difference step and the feasibility
    /// slack.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self { tolerance })
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Errors that can occur during the active-set solve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No active set produced a primal- and dual-feasible point.
    #[error("no feasible active set among {tried} candidates")]
    NoFeasibleActiveSet { tried: usize },

    /// The observer stopped the solve before a candidate was accepted.
    #[error("stopped by observer after {tried} candidates")]
    StoppedByObserver { tried: usize },
}

/// Emitted once per active set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The stationarity system had no unique solution.
    Singular { active_set: ActiveSet },

    /// The solution violated a primal or dual bound.
    Infeasible {
        active_set: ActiveSet,
        point: Vec2,
        multipliers: [f64; 2],
    },

    /// The solution satisfied every bound.
    Feasible {
        active_set: ActiveSet,
        point: Vec2,
        multipliers: [f64; 2],
    },
}

impl Event {
    /// Returns the active set this event describes.
    #[must_use]
    pub fn active_set(&self) -> ActiveSet {
        match self {
            Self::Singular { active_set }
            | Self::Infeasible { active_set, .. }
            | Self::Feasible { active_set, .. } => *active_set,
        }
    }
}

/// Actions an observer can take during the active-set solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Treat a feasible candidate as infeasible and keep enumerating.
    Reject,

    /// Stop without accepting a candidate.
    StopEarly,
}

/// The result of an active-set solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The constrained minimizer.
    pub point: Vec2,

    /// Objective value at `point`.
    pub value: f64,

    /// Lagrange multipliers `(λ₁, λ₂)` for `x >= 0` and `y >= 0`.
    pub multipliers: [f64; 2],

    /// The active set that produced the solution.
    pub active_set: ActiveSet,

    /// Objective evaluations performed.
    pub evals: usize,

    /// Number of active sets examined, including the accepted one.
    pub candidates: usize,
}

/// Minimizes `problem` subject to `x >= 0, y >= 0`.
///
/// # Errors
///
/// Returns [`Error::NoFeasibleActiveSet`] if no candidate is both primal and
/// dual feasible, or if the observer rejects every feasible one.
/// Returns [`Error::StoppedByObserver`] if the observer stops the solve.
pub fn solve<P, Obs>(problem: &P, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    P: Differentiable,
    Obs: Observer<Event, Action>,
{
    let counter = EvalCounter::new();
    let problem = Counted::new(problem, &counter);

    let tol = config.tolerance();
    let linear_term = problem.gradient(Vec2::ZERO);
    let hessian = forward_difference_hessian(&problem, linear_term, tol);
    let rhs = [-linear_term.x, -linear_term.y, 0.0, 0.0];

    for (index, active_set) in ActiveSet::ALL.into_iter().enumerate() {
        let tried = index + 1;
        let system = stationarity_system(hessian, active_set);

        let event = match linear::solve(system, rhs) {
            Err(_) => Event::Singular { active_set },
            Ok([x, y, l1, l2]) if [x, y, l1, l2].iter().any(|&v| v < -tol) => Event::Infeasible {
                active_set,
                point: Vec2::new(x, y),
                multipliers: [l1, l2],
            },
            Ok([x, y, l1, l2]) => Event::Feasible {
                active_set,
                point: Vec2::new(x, y),
                multipliers: [l1, l2],
            },
        };

        match observer.observe(&event) {
            Some(Action::StopEarly) => return Err(Error::StoppedByObserver { tried }),
            Some(Action::Reject) => continue,
            None => {}
        }

        if let Event::Feasible {
            point, multipliers, ..
        } = event
        {
            let value = problem.value(point);
            return Ok(Solution {
                point,
                value,
                multipliers,
                active_set,
                evals: counter.count(),
                candidates: tried,
            });
        }
    }

    Err(Error::NoFeasibleActiveSet {
        tried: ActiveSet::ALL.len(),
    })
}

/// Minimizes `problem` subject to `x >= 0, y >= 0` without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<P: Differentiable>(
    problem: &P,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, config, ())
}

/// Estimates the Hessian at the origin from forward differences of the
/// gradient.
fn forward_difference_hessian<P: Differentiable>(
    problem: &P,
    origin_gradient: Vec2,
    step: f64,
) -> Mat2 {
    let dx = (problem.gradient(Vec2::new(step, 0.0)) - origin_gradient) * step.recip();
    let dy = (problem.gradient(Vec2::new(0.0, step)) - origin_gradient) * step.recip();

    Mat2::new(dx.x, dy.x, dx.y, dy.y)
}

/// Builds the stationarity rows plus one equality per constraint.
fn stationarity_system(hessian: Mat2, active_set: ActiveSet) -> [[f64; 4]; 4] {
    let x_row = if active_set.x_active() {
        [1.0, 0.0, 0.0, 0.0]
    } else {
        [0.0, 0.0, 1.0, 0.0]
    };
    let y_row = if active_set.y_active() {
        [0.0, 1.0, 0.0, 0.0]
    } else {
        [0.0, 0.0, 0.0, 1.0]
    };

    [
        [hessian.xx, hessian.xy, -1.0, 0.0],
        [hessian.yx, hessian.yy, 0.0, -1.0],
        x_row,
        y_row,
    ]
}
