//! Problem traits for two-variable minimization.
//!
//! Solvers are generic over how much derivative information a problem
//! provides:
//!
//! - [`Objective`] — the scalar function `f(x, y)`
//! - [`Differentiable`] — adds the gradient `∇f(x, y)`
//! - [`TwiceDifferentiable`] — adds the Hessian `∇²f(x, y)`
//!
//! Implementations must be deterministic: the same point always yields the
//! same value. Evaluation counts reported by solvers depend on this.

mod closure;

pub use closure::{FnDifferentiable, FnObjective, FnTwiceDifferentiable};

use crate::{Mat2, Vec2};

/// A scalar objective over the plane.
pub trait Objective {
    /// Evaluates the objective at `point`.
    fn value(&self, point: Vec2) -> f64;
}

/// An objective with a caller-supplied gradient.
pub trait Differentiable: Objective {
    /// Evaluates the gradient at `point`.
    fn gradient(&self, point: Vec2) -> Vec2;
}

/// An objective with caller-supplied gradient and Hessian.
///
/// The Hessian is expected to be symmetric, but this is not enforced.
pub trait TwiceDifferentiable: Differentiable {
    /// Evaluates the Hessian at `point`.
    fn hessian(&self, point: Vec2) -> Mat2;
}

impl<P: Objective + ?Sized> Objective for &P {
    fn value(&self, point: Vec2) -> f64 {
        (**self).value(point)
    }
}

impl<P: Differentiable + ?Sized> Differentiable for &P {
    fn gradient(&self, point: Vec2) -> Vec2 {
        (**self).gradient(point)
    }
}

impl<P: TwiceDifferentiable + ?Sized> TwiceDifferentiable for &P {
    fn hessian(&self, point: Vec2) -> Mat2 {
        (**self).hessian(point)
    }
}
