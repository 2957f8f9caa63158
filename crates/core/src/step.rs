use crate::Vec2;

/// A type that can be moved a distance `alpha` along a direction.
///
/// Descent methods advance an iterate with `x.step(direction, alpha)`, which
/// reads as `x + alpha * direction`. Line searches use the scalar impl to
/// parametrize a ray by its step length.
pub trait Steppable {
    /// The direction type the value is stepped along.
    type Direction;

    /// Returns the value after stepping `alpha` along `direction`.
    #[must_use]
    fn step(&self, direction: Self::Direction, alpha: f64) -> Self;
}

/// Type alias for the direction of a `Steppable` type.
pub type DirectionOf<T> = <T as Steppable>::Direction;

impl Steppable for f64 {
    type Direction = f64;

    fn step(&self, direction: f64, alpha: f64) -> Self {
        self + direction * alpha
    }
}

impl Steppable for Vec2 {
    type Direction = Vec2;

    fn step(&self, direction: Vec2, alpha: f64) -> Self {
        *self + direction * alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_scalar() {
        let x = 1.0_f64;
        assert_eq!(x.step(-2.0, 0.5), 0.0);
    }

    #[test]
    fn step_point_along_direction() {
        let point = Vec2::new(1.0, 1.0);
        let direction: DirectionOf<Vec2> = Vec2::new(-2.0, 4.0);

        let next = point.step(direction, 0.25);

        assert_eq!(next, Vec2::new(0.5, 2.0));
    }

    #[test]
    fn zero_step_is_identity() {
        let point = Vec2::new(3.0, -7.0);
        assert_eq!(point.step(Vec2::new(100.0, 100.0), 0.0), point);
    }
}
