use descent_core::Observer;

use crate::traits::{CanStopEarly, HasEvaluations};

/// Stops a solver once it has used a given number of objective evaluations.
///
/// The check runs when an event arrives, so the solver may overshoot the
/// budget by the evaluations of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBudget {
    limit: usize,
    exhausted: bool,
}

impl EvalBudget {
    /// Creates a budget of `limit` evaluations.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            exhausted: false,
        }
    }

    /// Returns the evaluation limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns `true` if this budget has stopped a solver.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<E: HasEvaluations, A: CanStopEarly> Observer<E, A> for EvalBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.evals() >= self.limit {
            self.exhausted = true;
            return Some(A::stop_early());
        }
        None
    }
}

/// Allows `&mut EvalBudget` to be passed to solvers that take an observer by
/// value, so [`EvalBudget::exhausted`] can be checked afterwards.
impl<E: HasEvaluations, A: CanStopEarly> Observer<E, A> for &mut EvalBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
