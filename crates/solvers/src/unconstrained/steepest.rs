use descent_core::{Differentiable, Vec2};

use crate::line_search::LineSearch;

use super::{DirectionPolicy, Error, Iterate, Ray, Searcher};

/// Steepest descent: search along the negative gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steepest;

impl<P: Differentiable> DirectionPolicy<P> for Steepest {
    fn direction<L: LineSearch>(
        &mut self,
        _searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        Ok(Ray::new(iterate.point, -iterate.gradient))
    }
}

/// Takes `steps` steepest-descent steps from `point` and returns where they end.
pub(super) fn steepest_steps<P, L>(
    searcher: &Searcher<'_, P, L>,
    point: Vec2,
    steps: usize,
) -> Result<Vec2, Error>
where
    P: Differentiable,
    L: LineSearch,
{
    (0..steps).try_fold(point, |point, _| {
        let iterate = searcher.iterate(point)?;
        Ok(searcher.minimize_along(Ray::new(point, -iterate.gradient)))
    })
}
