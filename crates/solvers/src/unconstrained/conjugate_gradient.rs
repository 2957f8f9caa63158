use descent_core::{Differentiable, Vec2};

use crate::line_search::LineSearch;

use super::{DirectionPolicy, Error, Iterate, Ray, Searcher};

/// Fletcher–Reeves conjugate gradient.
///
/// The first direction is `-∇f`. After each step the next direction is
/// `-∇f_new + β d` with `β = ‖∇f_new‖² / ‖∇f_old‖²`, restarting from the
/// plain negative gradient every second iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConjugateGradient {
    direction: Option<Vec2>,
    iter: usize,
}

impl ConjugateGradient {
    /// Creates a policy whose first direction is the negative gradient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, previous: &Iterate, next: &Iterate) {
        let old_norm_squared = previous.gradient.norm_squared();
        let beta = if old_norm_squared > 0.0 {
            next.gradient.norm_squared() / old_norm_squared
        } else {
            0.0
        };

        let restart = -next.gradient;
        self.direction = Some(match self.direction {
            Some(direction) if self.iter % 2 != 0 => restart + direction * beta,
            _ => restart,
        });
    }
}

impl<P: Differentiable> DirectionPolicy<P> for ConjugateGradient {
    fn direction<L: LineSearch>(
        &mut self,
        _searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        self.iter += 1;
        let direction = *self.direction.get_or_insert(-iterate.gradient);
        Ok(Ray::new(iterate.point, direction))
    }

    fn accept(&mut self, previous: &Iterate, next: &Iterate) {
        self.update(previous, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn step() -> (Iterate, Iterate) {
        let previous = Iterate {
            point: Vec2::new(1.0, 1.0),
            gradient: Vec2::new(2.0, 0.0),
        };
        let next = Iterate {
            point: Vec2::new(0.0, 1.0),
            gradient: Vec2::new(0.0, 1.0),
        };
        (previous, next)
    }

    #[test]
    fn odd_iteration_mixes_previous_direction() {
        let (previous, next) = step();
        let mut policy = ConjugateGradient {
            direction: Some(Vec2::new(-2.0, 0.0)),
            iter: 1,
        };

        policy.update(&previous, &next);

        // beta = 1 / 4
        let direction = policy.direction.expect("set after update");
        assert_relative_eq!(direction.x, -0.5);
        assert_relative_eq!(direction.y, -1.0);
    }

    #[test]
    fn even_iteration_restarts() {
        let (previous, next) = step();
        let mut policy = ConjugateGradient {
            direction: Some(Vec2::new(-2.0, 0.0)),
            iter: 2,
        };

        policy.update(&previous, &next);

        assert_eq!(policy.direction, Some(Vec2::new(0.0, -1.0)));
    }
}
