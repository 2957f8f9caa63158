//! Exterior penalty method.
//!
//! # Algorithm
//!
//! Each outer iteration minimizes the augmented objective
//! `f + r · (max(0, -x)² + max(0, -y)²)` with steepest descent, starting from
//! the previous outer iterate. If the violation at the result is within
//! [`Config::constraint_tol`] the method has converged. Otherwise the
//! penalty `r` is multiplied by [`Config::growth`] and the loop repeats.
//!
//! # Evaluation counting
//!
//! One [`EvalCounter`] spans the whole run. Each inner solve records into it
//! through [`unconstrained::minimize_counted`], and the final unpenalized
//! value is one more evaluation.
//!
//! # Observer Events
//!
//! One [`Event`] per outer iteration, after the inner solve. Observers can
//! return [`Action::StopEarly`] to halt with the current iterate.

mod penalized;

#[cfg(test)]
mod tests;

pub use penalized::{Penalized, violation};

use std::iter;

use descent_core::{Counted, Differentiable, EvalCounter, Objective, Observer, Vec2};
use thiserror::Error;

use crate::{
    line_search::{GoldenSection, LineSearch},
    unconstrained::{self, Steepest},
};

pub use crate::unconstrained::{Action, Status};

/// Configuration for the exterior penalty method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_penalty: f64,
    growth: f64,
    constraint_tol: f64,
    max_outer_iters: usize,
    inner: unconstrained::Config,
}

/// Errors that can occur when validating a penalty method config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_penalty must be finite and positive")]
    InitialPenalty,

    #[error("growth must be finite and greater than 1")]
    Growth,

    #[error("constraint_tol must be finite and non-negative")]
    ConstraintTol,

    #[error("max_outer_iters must be at least 1")]
    MaxOuterIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_penalty: 1.0,
            growth: 10.0,
            constraint_tol: 0.01,
            max_outer_iters: 50,
            inner: unconstrained::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `inner` controls each steepest-descent solve; its tolerance bounds
    /// the gradient norm of the augmented objective.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range.
    pub fn new(
        initial_penalty: f64,
        growth: f64,
        constraint_tol: f64,
        max_outer_iters: usize,
        inner: unconstrained::Config,
    ) -> Result<Self, ConfigError> {
        if !initial_penalty.is_finite() || initial_penalty <= 0.0 {
            return Err(ConfigError::InitialPenalty);
        }
        if !growth.is_finite() || growth <= 1.0 {
            return Err(ConfigError::Growth);
        }
        if !constraint_tol.is_finite() || constraint_tol < 0.0 {
            return Err(ConfigError::ConstraintTol);
        }
        if max_outer_iters == 0 {
            return Err(ConfigError::MaxOuterIters);
        }

        Ok(Self {
            initial_penalty,
            growth,
            constraint_tol,
            max_outer_iters,
            inner,
        })
    }

    /// Returns the penalty used in the first outer iteration.
    #[must_use]
    pub fn initial_penalty(&self) -> f64 {
        self.initial_penalty
    }

    /// Returns the factor applied to the penalty after each infeasible result.
    #[must_use]
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Returns the largest violation accepted as feasible.
    #[must_use]
    pub fn constraint_tol(&self) -> f64 {
        self.constraint_tol
    }

    /// Returns the maximum number of outer iterations.
    #[must_use]
    pub fn max_outer_iters(&self) -> usize {
        self.max_outer_iters
    }

    /// Returns the config for each inner solve.
    #[must_use]
    pub fn inner(&self) -> &unconstrained::Config {
        &self.inner
    }
}

/// Emitted after each outer iteration's inner solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// One-based outer iteration number.
    pub outer_iter: usize,

    /// Result of the inner solve.
    pub point: Vec2,

    /// Penalty coefficient used for the inner solve.
    pub penalty: f64,

    /// Quadrant violation at `point`.
    pub violation: f64,

    /// Status of the inner solve.
    pub inner_status: Status,

    /// Objective evaluations performed so far.
    pub evals: usize,
}

/// Errors that can occur during the penalty method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// An inner steepest-descent solve failed.
    #[error("inner solve failed: {0}")]
    Inner(#[from] unconstrained::Error),
}

/// The result of the penalty method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final status. [`Status::MaxIters`] means the last iterate is still
    /// outside the constraint tolerance.
    pub status: Status,

    /// The last outer iterate.
    pub point: Vec2,

    /// Value of the unpenalized objective at `point`.
    pub value: f64,

    /// Penalty coefficient used for the last inner solve.
    pub penalty: f64,

    /// Quadrant violation at `point`.
    pub violation: f64,

    /// Number of outer iterations performed.
    pub outer_iters: usize,

    /// Objective evaluations across all inner solves, plus one for `value`.
    pub evals: usize,
}

/// Minimizes `problem` subject to `x >= 0, y >= 0` by exterior penalty.
///
/// # Errors
///
/// Returns an error if an inner solve fails.
pub fn solve<P, L, Obs>(
    problem: &P,
    start: Vec2,
    config: &Config,
    line_search: &L,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Differentiable,
    L: LineSearch,
    Obs: Observer<Event, Action>,
{
    let growth = config.growth();
    let penalties = iter::successors(Some(config.initial_penalty()), |r| Some(r * growth));

    let counter = EvalCounter::new();
    let mut point = start;
    let mut penalty = config.initial_penalty();

    for (outer_iter, r) in (1..=config.max_outer_iters()).zip(penalties) {
        penalty = r;

        let penalized = Penalized::new(problem, penalty);
        let inner = unconstrained::minimize_counted(
            &penalized,
            &counter,
            point,
            Steepest,
            config.inner(),
            line_search,
            (),
        )?;
        point = inner.point;

        let violation = violation(point);
        let event = Event {
            outer_iter,
            point,
            penalty,
            violation,
            inner_status: inner.status,
            evals: counter.count(),
        };
        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if violation <= config.constraint_tol() {
            Some(Status::Converged)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(finish(problem, &counter, point, penalty, outer_iter, status));
        }
    }

    Ok(finish(
        problem,
        &counter,
        point,
        penalty,
        config.max_outer_iters(),
        Status::MaxIters,
    ))
}

/// Minimizes `problem` by exterior penalty with golden-section line searches
/// and no observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<P: Differentiable>(
    problem: &P,
    start: Vec2,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, start, config, &GoldenSection::default(), ())
}

fn finish<P: Differentiable>(
    problem: &P,
    counter: &EvalCounter,
    point: Vec2,
    penalty: f64,
    outer_iters: usize,
    status: Status,
) -> Solution {
    let value = Counted::new(problem, counter).value(point);

    Solution {
        status,
        point,
        value,
        penalty,
        violation: violation(point),
        outer_iters,
        evals: counter.count(),
    }
}
