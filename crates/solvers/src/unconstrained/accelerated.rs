use descent_core::Differentiable;

use crate::line_search::LineSearch;

use super::{ConfigError, DirectionPolicy, Error, Iterate, Ray, Searcher, steepest::steepest_steps};

/// Accelerated descent of order `p`.
///
/// Each iteration takes `p` steepest-descent steps to an auxiliary point,
/// then searches along the line from the current point through it. On
/// elongated valleys that line follows the valley floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerated {
    order: usize,
}

impl Accelerated {
    /// Creates an accelerated policy taking `order` sub-steps per iteration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Order`] if `order` is zero.
    pub fn new(order: usize) -> Result<Self, ConfigError> {
        if order == 0 {
            return Err(ConfigError::Order);
        }
        Ok(Self { order })
    }

    /// Returns the number of sub-steps per iteration.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Default for Accelerated {
    fn default() -> Self {
        Self { order: 2 }
    }
}

impl<P: Differentiable> DirectionPolicy<P> for Accelerated {
    fn direction<L: LineSearch>(
        &mut self,
        searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        let auxiliary = steepest_steps(searcher, iterate.point, self.order)?;
        Ok(Ray::through(iterate.point, auxiliary))
    }
}
