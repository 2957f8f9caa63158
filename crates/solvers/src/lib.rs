//! Minimization methods for two-variable objectives.
//!
//! # Modules
//!
//! - [`line_search`] — one-dimensional minimizers and the expanding bracket
//!   used to seed them
//! - [`linear`] — dense Gaussian elimination for small systems
//! - [`unconstrained`] — descent strategies driven by the gradient (and, for
//!   Newton, the Hessian), plus coordinate descent
//! - [`constrained`] — active-set KKT enumeration and the exterior penalty
//!   method for the non-negativity constraints `x ≥ 0, y ≥ 0`

pub mod constrained;
pub mod line_search;
pub mod linear;
pub mod unconstrained;
