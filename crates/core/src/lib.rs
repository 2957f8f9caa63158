//! Core traits and types for two-variable descent methods.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Vec2`], [`Mat2`] — points, gradients, directions, and 2×2 matrices
//! - [`Steppable`] — advancing a value along a direction by a step length
//! - [`Objective`], [`Differentiable`], [`TwiceDifferentiable`] — problem
//!   traits, with closure adapters
//! - [`EvalCounter`], [`Counted`] — explicit objective-evaluation accounting
//! - [`Observer`] — receives solver events and optionally returns control actions

mod counter;
mod mat2;
mod observer;
mod problem;
mod step;
mod vec2;

pub use counter::{Counted, EvalCounter};
pub use mat2::Mat2;
pub use observer::Observer;
pub use problem::{
    Differentiable, FnDifferentiable, FnObjective, FnTwiceDifferentiable, Objective,
    TwiceDifferentiable,
};
pub use step::{DirectionOf, Steppable};
pub use vec2::Vec2;
