//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the iterative solvers in `descent-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasPoint`], [`HasEvaluations`], [`HasGradientNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every point a solver reports
//! - [`EvalBudget`] — stops a solver once it has spent an evaluation budget
//!
//! [`Observer`]: descent_core::Observer
//! [`HasPoint`]: traits::HasPoint
//! [`HasEvaluations`]: traits::HasEvaluations
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod history;

pub use budget::EvalBudget;
pub use history::History;
