use descent_core::Vec2;

/// Emitted once per iteration, before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Zero-based iteration number.
    pub iter: usize,

    /// The current iterate.
    pub point: Vec2,

    /// The gradient at `point`.
    pub gradient: Vec2,

    /// Objective evaluations performed so far.
    pub evals: usize,
}

impl Event {
    /// Returns the Euclidean norm of the gradient.
    #[must_use]
    pub fn gradient_norm(&self) -> f64 {
        self.gradient.norm()
    }
}
