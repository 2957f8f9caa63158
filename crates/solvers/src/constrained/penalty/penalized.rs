use descent_core::{Differentiable, Objective, Vec2};

/// Returns the quadrant violation `max(0, -x)² + max(0, -y)²`.
#[must_use]
pub fn violation(point: Vec2) -> f64 {
    let x = point.x.min(0.0);
    let y = point.y.min(0.0);
    x * x + y * y
}

/// The augmented objective `f + r · violation`.
#[derive(Debug, Clone, Copy)]
pub struct Penalized<P> {
    problem: P,
    penalty: f64,
}

impl<P> Penalized<P> {
    /// Wraps `problem` with penalty coefficient `penalty`.
    pub fn new(problem: P, penalty: f64) -> Self {
        Self { problem, penalty }
    }

    /// Returns the penalty coefficient.
    #[must_use]
    pub fn penalty(&self) -> f64 {
        self.penalty
    }
}

impl<P: Objective> Objective for Penalized<P> {
    fn value(&self, point: Vec2) -> f64 {
        self.problem.value(point) + self.penalty * violation(point)
    }
}

impl<P: Differentiable> Differentiable for Penalized<P> {
    fn gradient(&self, point: Vec2) -> Vec2 {
        let violation_gradient = Vec2::new(2.0 * point.x.min(0.0), 2.0 * point.y.min(0.0));
        self.problem.gradient(point) + violation_gradient * self.penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::FnDifferentiable;

    #[test]
    fn feasible_points_are_not_penalized() {
        assert_eq!(violation(Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(violation(Vec2::ZERO), 0.0);
    }

    #[test]
    fn violation_sums_squared_shortfalls() {
        assert_relative_eq!(violation(Vec2::new(-2.0, 3.0)), 4.0);
        assert_relative_eq!(violation(Vec2::new(-2.0, -1.0)), 5.0);
    }

    #[test]
    fn gradient_matches_finite_difference() {
        let problem = Penalized::new(
            FnDifferentiable::new(|x: f64, y: f64| x * y, |x, y| (y, x)),
            10.0,
        );
        let point = Vec2::new(-0.5, 0.25);
        let h = 1e-7;

        let analytic = problem.gradient(point);
        let fd_x = (problem.value(Vec2::new(point.x + h, point.y)) - problem.value(point)) / h;
        let fd_y = (problem.value(Vec2::new(point.x, point.y + h)) - problem.value(point)) / h;

        assert_relative_eq!(analytic.x, fd_x, epsilon = 1e-5);
        assert_relative_eq!(analytic.y, fd_y, epsilon = 1e-5);
        assert_relative_eq!(analytic.x, 0.25 - 10.0);
    }
}
