use std::cell::Cell;

use crate::{Differentiable, Mat2, Objective, TwiceDifferentiable, Vec2};

/// Counts objective evaluations for a single solver run.
///
/// A solver creates one counter per invocation and threads a shared reference
/// through every layer that evaluates the objective, including line searches.
/// Interior mutability lets closures that only hold `&EvalCounter` record
/// calls while remaining `Fn`.
#[derive(Debug, Default)]
pub struct EvalCounter {
    count: Cell<usize>,
}

impl EvalCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluation.
    pub fn increment(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Returns the number of evaluations recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

/// An objective wrapper that records every call in an [`EvalCounter`].
///
/// Only objective values are counted. Gradient and Hessian calls pass
/// through unrecorded.
#[derive(Debug, Clone, Copy)]
pub struct Counted<'c, P> {
    problem: P,
    counter: &'c EvalCounter,
}

impl<'c, P> Counted<'c, P> {
    /// Wraps `problem` so its evaluations are recorded in `counter`.
    pub fn new(problem: P, counter: &'c EvalCounter) -> Self {
        Self { problem, counter }
    }

    /// Returns the counter shared by this wrapper.
    #[must_use]
    pub fn counter(&self) -> &'c EvalCounter {
        self.counter
    }

    /// Returns the wrapped problem.
    pub fn inner(&self) -> &P {
        &self.problem
    }
}

impl<P: Objective> Objective for Counted<'_, P> {
    fn value(&self, point: Vec2) -> f64 {
        self.counter.increment();
        self.problem.value(point)
    }
}

impl<P: Differentiable> Differentiable for Counted<'_, P> {
    fn gradient(&self, point: Vec2) -> Vec2 {
        self.problem.gradient(point)
    }
}

impl<P: TwiceDifferentiable> TwiceDifferentiable for Counted<'_, P> {
    fn hessian(&self, point: Vec2) -> Mat2 {
        self.problem.hessian(point)
    }
}
