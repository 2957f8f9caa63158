use descent_core::{Differentiable, Mat2};

use crate::line_search::LineSearch;

use super::{DirectionPolicy, Error, Iterate, Ray, Searcher};

/// Rank-1 updates with a smaller denominator than this are skipped.
const MIN_DENOMINATOR: f64 = 1e-14;

/// Quasi-Newton descent with a symmetric rank-1 inverse-Hessian update.
///
/// The direction is `-H ∇f`, where `H` starts as the identity. After each
/// step, with `δ` the change in position and `γ` the change in gradient,
/// `v = δ - Hγ` and `H += v vᵀ / (vᵀγ)`. The estimate is reset to the
/// identity every second iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuasiNewton {
    inverse_hessian: Mat2,
    iter: usize,
}

impl QuasiNewton {
    /// Creates a policy with an identity inverse-Hessian estimate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inverse_hessian: Mat2::IDENTITY,
            iter: 0,
        }
    }

    /// Returns the current inverse-Hessian estimate.
    #[must_use]
    pub fn inverse_hessian(&self) -> Mat2 {
        self.inverse_hessian
    }

    fn update(&mut self, previous: &Iterate, next: &Iterate) {
        let delta = next.point - previous.point;
        let gamma = next.gradient - previous.gradient;

        let v = delta - self.inverse_hessian * gamma;
        let denominator = v.dot(gamma);
        if denominator.abs() > MIN_DENOMINATOR {
            self.inverse_hessian += Mat2::outer(v, v) / denominator;
        }

        if self.iter % 2 == 0 {
            self.inverse_hessian = Mat2::IDENTITY;
        }
    }
}

impl Default for QuasiNewton {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Differentiable> DirectionPolicy<P> for QuasiNewton {
    fn direction<L: LineSearch>(
        &mut self,
        _searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        self.iter += 1;
        Ok(Ray::new(
            iterate.point,
            -(self.inverse_hessian * iterate.gradient),
        ))
    }

    fn accept(&mut self, previous: &Iterate, next: &Iterate) {
        self.update(previous, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::Vec2;

    #[test]
    fn update_satisfies_secant_condition() {
        let mut policy = QuasiNewton::new();
        policy.iter = 1;

        // f = 2x² + y², Hessian diag(4, 2).
        let previous = Iterate {
            point: Vec2::new(1.0, 1.0),
            gradient: Vec2::new(4.0, 2.0),
        };
        let next = Iterate {
            point: Vec2::new(0.5, 0.0),
            gradient: Vec2::new(2.0, 0.0),
        };
        policy.update(&previous, &next);

        let delta = next.point - previous.point;
        let gamma = next.gradient - previous.gradient;
        let mapped = policy.inverse_hessian() * gamma;

        assert_relative_eq!(mapped.x, delta.x, epsilon = 1e-12);
        assert_relative_eq!(mapped.y, delta.y, epsilon = 1e-12);
    }

    #[test]
    fn resets_to_identity_every_second_iteration() {
        let mut policy = QuasiNewton::new();
        policy.iter = 2;

        let previous = Iterate {
            point: Vec2::new(1.0, 1.0),
            gradient: Vec2::new(4.0, 2.0),
        };
        let next = Iterate {
            point: Vec2::new(0.5, 0.0),
            gradient: Vec2::new(2.0, 0.0),
        };
        policy.update(&previous, &next);

        assert_eq!(policy.inverse_hessian(), Mat2::IDENTITY);
    }
}
