use std::ops::{Add, AddAssign, Div, Mul};

use crate::Vec2;

/// A 2×2 matrix stored row by row.
///
/// Used for Hessians and inverse-Hessian approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
}

impl Mat2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Creates a matrix from its entries in row order.
    #[must_use]
    pub const fn new(xx: f64, xy: f64, yx: f64, yy: f64) -> Self {
        Self { xx, xy, yx, yy }
    }

    /// Returns the outer product `u vᵀ`.
    #[must_use]
    pub fn outer(u: Vec2, v: Vec2) -> Self {
        Self::new(u.x * v.x, u.x * v.y, u.y * v.x, u.y * v.y)
    }

    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    /// Returns the inverse, or `None` if `|det| < min_determinant`.
    #[must_use]
    pub fn inverse(&self, min_determinant: f64) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < min_determinant {
            return None;
        }
        Some(Self::new(self.yy, -self.xy, -self.yx, self.xx) / det)
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(
            self.xx * rhs.x + self.xy * rhs.y,
            self.yx * rhs.x + self.yy * rhs.y,
        )
    }
}

impl Mul<f64> for Mat2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.xx * rhs, self.xy * rhs, self.yx * rhs, self.yy * rhs)
    }
}

impl Div<f64> for Mat2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.xx / rhs, self.xy / rhs, self.yx / rhs, self.yy / rhs)
    }
}

impl Add for Mat2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
        )
    }
}

impl AddAssign for Mat2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
