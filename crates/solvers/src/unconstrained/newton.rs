use descent_core::TwiceDifferentiable;

use crate::line_search::LineSearch;

use super::{DirectionPolicy, Error, Iterate, Ray, Searcher};

/// Determinants smaller than this in magnitude make the Hessian singular.
pub const MIN_DETERMINANT: f64 = 1e-14;

/// Modified Newton: search along `-H⁻¹ ∇f`.
///
/// The step length comes from a line search rather than being fixed at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newton;

impl<P: TwiceDifferentiable> DirectionPolicy<P> for Newton {
    fn direction<L: LineSearch>(
        &mut self,
        searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error> {
        let hessian = searcher.hessian(iterate.point);
        let inverse = hessian
            .inverse(MIN_DETERMINANT)
            .ok_or(Error::SingularHessian {
                point: iterate.point,
                determinant: hessian.determinant(),
            })?;

        Ok(Ray::new(iterate.point, -(inverse * iterate.gradient)))
    }
}
