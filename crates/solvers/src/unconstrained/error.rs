use descent_core::Vec2;

/// Errors that can occur during unconstrained descent.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The Hessian could not be inverted at `point`.
    #[error("singular Hessian at {point:?} (determinant {determinant:e})")]
    SingularHessian { point: Vec2, determinant: f64 },

    /// No step length satisfied the sufficient-decrease condition.
    #[error("no acceptable step from {point:?} after {attempts} reductions")]
    StepNotFound { point: Vec2, attempts: usize },

    /// The gradient returned a NaN or infinite component.
    #[error("non-finite gradient {gradient:?} at {point:?}")]
    NonFiniteGradient { point: Vec2, gradient: Vec2 },
}
