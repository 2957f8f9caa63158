use descent_core::Vec2;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an unconstrained minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub point: Vec2,

    /// Objective value at `point`.
    pub value: f64,

    /// Total objective evaluations, including those inside line searches.
    pub evals: usize,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
