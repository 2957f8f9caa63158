use descent_core::{Differentiable, Vec2};

use crate::line_search::LineSearch;

use super::{ConfigError, DirectionPolicy, Error, Iterate, Ray, Searcher, steepest::steepest_steps};

/// Ravine descent.
///
/// Each iteration runs `order` steepest-descent steps from the current
/// point and from a companion point shifted by `offset` along both axes.
/// Both trajectories settle near the bottom of the ravine; the next line
/// search runs from the first endpoint through the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ravine {
    order: usize,
    offset: f64,
}

impl Ravine {
    /// Creates a ravine policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is zero or `offset` is zero or not finite.
    pub fn new(order: usize, offset: f64) -> Result<Self, ConfigError> {
        if order == 0 {
            return Err(ConfigError::Order);
        }
        if !offset.is_finite() || offset == 0.0 {
            return Err(ConfigError::Offset);
        }
        Ok(Self { order, offset })
    }

    /// Returns the number of sub-steps per trajectory.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the companion point offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Default for Ravine {
    fn default() -> Self {
        Self {
            order: 2,
            offset: 0.01,
        }
    }
}

impl<P: Differentiable> DirectionPolicy<P> for Ravine {
    fn direction<L: LineSearch>(
        &mut self,
        searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        let companion = iterate.point + Vec2::splat(self.offset);

        let floor = steepest_steps(searcher, iterate.point, self.order)?;
        let companion_floor = steepest_steps(searcher, companion, self.order)?;

        Ok(Ray::through(floor, companion_floor))
    }
}
