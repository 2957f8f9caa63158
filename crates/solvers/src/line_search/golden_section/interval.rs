/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Golden section search interval.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenInterval {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenInterval {
    /// Creates an interval from ordered bounds with golden-ratio interior points.
    pub(super) fn new(left: f64, right: f64) -> Self {
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Shrinks the bounds to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`. Returns the new
    /// `inner_left`, which is the only point that needs evaluating.
    pub(super) fn shrink_right(&mut self) -> f64 {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
        self.inner_left
    }

    /// Shrinks the bounds to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`. Returns the new
    /// `inner_right`, which is the only point that needs evaluating.
    pub(super) fn shrink_left(&mut self) -> f64 {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
        self.inner_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interior_points_divide_in_golden_ratio() {
        let interval = GoldenInterval::new(0.0, 1.0);

        assert_relative_eq!(interval.width(), 1.0);
        assert_relative_eq!(interval.inner_left, 1.0 - INV_PHI);
        assert_relative_eq!(interval.inner_right, INV_PHI);
        assert_relative_eq!(interval.inner_left / (1.0 - interval.inner_left), INV_PHI);
    }

    #[test]
    fn shrink_left_reuses_inner_right() {
        let mut interval = GoldenInterval::new(0.0, 1.0);
        let old_inner_right = interval.inner_right;

        let new_point = interval.shrink_left();

        assert_relative_eq!(interval.left, 1.0 - INV_PHI);
        assert_relative_eq!(interval.right, 1.0);
        assert_relative_eq!(interval.inner_left, old_inner_right);
        assert_relative_eq!(new_point, interval.left + INV_PHI * interval.width());
    }

    #[test]
    fn shrink_right_reuses_inner_left() {
        let mut interval = GoldenInterval::new(0.0, 1.0);
        let old_inner_left = interval.inner_left;

        let new_point = interval.shrink_right();

        assert_relative_eq!(interval.left, 0.0);
        assert_relative_eq!(interval.right, INV_PHI);
        assert_relative_eq!(interval.inner_right, old_inner_left);
        assert_relative_eq!(
            new_point,
            interval.left + (1.0 - INV_PHI) * interval.width()
        );
    }
}
