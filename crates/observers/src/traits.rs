//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasPoint`] — events that carry the current iterate
//! - [`HasEvaluations`] — events that carry a running evaluation count
//! - [`HasGradientNorm`] — events that carry a gradient
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use descent_core::Vec2;

use descent_solvers::{
    constrained::{kkt, penalty},
    unconstrained::{self, coordinate},
};

/// An event that carries the solver's current iterate.
pub trait HasPoint {
    /// Returns the point for this event.
    fn point(&self) -> Vec2;
}

/// An event that carries the number of objective evaluations so far.
pub trait HasEvaluations {
    /// Returns the running evaluation count.
    fn evals(&self) -> usize;
}

/// An event that carries a gradient.
pub trait HasGradientNorm {
    /// Returns the Euclidean norm of the gradient.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- unconstrained::Event ---

impl HasPoint for unconstrained::Event {
    fn point(&self) -> Vec2 {
        self.point
    }
}

impl HasEvaluations for unconstrained::Event {
    fn evals(&self) -> usize {
        self.evals
    }
}

impl HasGradientNorm for unconstrained::Event {
    fn gradient_norm(&self) -> f64 {
        unconstrained::Event::gradient_norm(self)
    }
}

// --- coordinate::Event ---

impl HasPoint for coordinate::Event {
    fn point(&self) -> Vec2 {
        self.point
    }
}

impl HasEvaluations for coordinate::Event {
    fn evals(&self) -> usize {
        self.evals
    }
}

// --- penalty::Event ---

impl HasPoint for penalty::Event {
    fn point(&self) -> Vec2 {
        self.point
    }
}

impl HasEvaluations for penalty::Event {
    fn evals(&self) -> usize {
        self.evals
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for unconstrained::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for kkt::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
