use crate::{Mat2, Vec2};

use super::{Differentiable, Objective, TwiceDifferentiable};

/// Adapts a closure `f(x, y)` into an [`Objective`].
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F>(pub F);

impl<F> Objective for FnObjective<F>
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, point: Vec2) -> f64 {
        (self.0)(point.x, point.y)
    }
}

/// Adapts an objective closure and a gradient closure into a [`Differentiable`].
#[derive(Debug, Clone, Copy)]
pub struct FnDifferentiable<F, G> {
    pub f: F,
    pub grad: G,
}

impl<F, G> FnDifferentiable<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> (f64, f64),
{
    /// Creates a problem from `f(x, y)` and `grad(x, y) -> (gx, gy)`.
    pub fn new(f: F, grad: G) -> Self {
        Self { f, grad }
    }

    /// Attaches a Hessian closure `hess(x, y) -> (hxx, hxy, hyx, hyy)`.
    pub fn with_hessian<H>(self, hess: H) -> FnTwiceDifferentiable<F, G, H>
    where
        H: Fn(f64, f64) -> (f64, f64, f64, f64),
    {
        FnTwiceDifferentiable {
            f: self.f,
            grad: self.grad,
            hess,
        }
    }
}

impl<F, G> Objective for FnDifferentiable<F, G>
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, point: Vec2) -> f64 {
        (self.f)(point.x, point.y)
    }
}

impl<F, G> Differentiable for FnDifferentiable<F, G>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> (f64, f64),
{
    fn gradient(&self, point: Vec2) -> Vec2 {
        let (gx, gy) = (self.grad)(point.x, point.y);
        Vec2::new(gx, gy)
    }
}

/// Adapts objective, gradient, and Hessian closures into a [`TwiceDifferentiable`].
#[derive(Debug, Clone, Copy)]
pub struct FnTwiceDifferentiable<F, G, H> {
    pub f: F,
    pub grad: G,
    pub hess: H,
}

impl<F, G, H> Objective for FnTwiceDifferentiable<F, G, H>
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, point: Vec2) -> f64 {
        (self.f)(point.x, point.y)
    }
}

impl<F, G, H> Differentiable for FnTwiceDifferentiable<F, G, H>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> (f64, f64),
{
    fn gradient(&self, point: Vec2) -> Vec2 {
        let (gx, gy) = (self.grad)(point.x, point.y);
        Vec2::new(gx, gy)
    }
}

impl<F, G, H> TwiceDifferentiable for FnTwiceDifferentiable<F, G, H>
where
    F: Fn(f64, f64) -> f64,
    G: Fn(f64, f64) -> (f64, f64),
    H: Fn(f64, f64) -> (f64, f64, f64, f64),
{
    fn hessian(&self, point: Vec2) -> Mat2 {
        let (hxx, hxy, hyx, hyy) = (self.hess)(point.x, point.y);
        Mat2::new(hxx, hxy, hyx, hyy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closures_forward_coordinates() {
        let problem = FnDifferentiable::new(
            |x, y| 9.0 * x * x + y * y,
            |x, y| (18.0 * x, 2.0 * y),
        )
        .with_hessian(|_, _| (18.0, 0.0, 0.0, 2.0));

        let p = Vec2::new(1.0, 2.0);

        assert_relative_eq!(problem.value(p), 13.0);
        assert_eq!(problem.gradient(p), Vec2::new(18.0, 4.0));
        assert_eq!(problem.hessian(p), Mat2::new(18.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn objective_only() {
        let problem = FnObjective(|x: f64, y: f64| x - y);
        assert_relative_eq!(problem.value(Vec2::new(5.0, 2.0)), 3.0);
    }

    #[test]
    fn references_are_problems() {
        fn value_of(problem: impl Objective) -> f64 {
            problem.value(Vec2::new(1.0, 1.0))
        }

        let problem = FnObjective(|x: f64, y: f64| x + y);
        assert_relative_eq!(value_of(&problem), 2.0);
    }
}
