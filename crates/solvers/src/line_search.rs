//! One-dimensional minimizers used to choose step lengths.
//!
//! A [`LineSearch`] minimizes a scalar function `phi` over a closed interval.
//! Descent methods call it with `phi(alpha) = f(x + alpha * d)` to find the
//! step length along a direction `d`. The interval usually comes from
//! [`bracket`], which expands `[0, 1]` until `phi` stops decreasing.
//!
//! # Oracles
//!
//! Value-only searches implement [`LineSearch`]:
//!
//! - [`GoldenSection`] — golden-ratio interval reduction (the default)
//! - [`Fibonacci`] — Fibonacci-ratio reduction with a precomputed step count
//! - [`Dichotomy`] — paired probes around the interval midpoint
//! - [`Passive`] — a uniform grid with spacing at most the tolerance
//!
//! These assume `phi` is unimodal on the interval. On multimodal input the
//! interval reductions converge to some local minimum.
//!
//! Searches that also use the slope `phi'` implement [`SlopeSearch`]:
//!
//! - [`Tangent`] — intersects the tangent lines at both interval ends
//! - [`Secant`] — secant iteration on `phi' = 0`
//!
//! [`NewtonRaphson`] additionally needs the curvature `phi''` and starts
//! from a single point rather than an interval.
//!
//! Along a ray `x + alpha * d`, the slope is `∇f(x + alpha * d) · d` and the
//! curvature is `dᵀ H d`; see
//! [`Searcher`](crate::unconstrained::Searcher).
//!
//! # Evaluation counts
//!
//! [`LineMinimum::evals`] counts calls to `phi` only. Slope and curvature
//! calls are not counted.

mod bracket;
mod dichotomy;
mod fibonacci;
mod golden_section;
mod newton_raphson;
mod passive;
mod secant;
mod tangent;

pub use bracket::{MAX_BRACKET_END, bracket};
pub use dichotomy::Dichotomy;
pub use fibonacci::Fibonacci;
pub use golden_section::GoldenSection;
pub use newton_raphson::NewtonRaphson;
pub use passive::Passive;
pub use secant::Secant;
pub use tangent::Tangent;

use thiserror::Error;

/// The result of a one-dimensional search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMinimum {
    /// Approximate minimizer.
    pub x: f64,

    /// Value of `phi` at `x`.
    pub value: f64,

    /// Number of `phi` evaluations performed by the search.
    pub evals: usize,
}

/// A one-dimensional minimizer over a bounded interval.
pub trait LineSearch {
    /// Returns a point within `tolerance` of a local minimizer of `phi` on
    /// `interval`.
    ///
    /// Reversed interval bounds are accepted and normalized.
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64;
}

impl<L: LineSearch + ?Sized> LineSearch for &L {
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
    {
        (**self).search(phi, interval, tolerance)
    }
}

/// A one-dimensional minimizer that uses the slope of `phi`.
///
/// The search looks for a stationary point `phi'(x) = 0` and reports it
/// once `|phi'|` is within the tolerance.
pub trait SlopeSearch {
    /// Returns an approximate stationary point of `phi` starting from
    /// `interval`.
    fn search<F, G>(&self, phi: F, slope: G, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64;
}

impl<S: SlopeSearch + ?Sized> SlopeSearch for &S {
    fn search<F, G>(&self, phi: F, slope: G, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        (**self).search(phi, slope, interval, tolerance)
    }
}

/// Errors that can occur when configuring a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("offset_ratio must be in (0, 2)")]
    OffsetRatio,
    #[error("max_iters must be at least 1")]
    MaxIters,
    #[error("max_points must be at least 2")]
    MaxPoints,
}

/// Orders interval bounds so that `left <= right`.
fn normalize([a, b]: [f64; 2]) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
