use crate::line_search::LineSearch;

use super::{Error, Iterate, Ray, Searcher};

/// Chooses the ray along which the next line search runs.
///
/// Strategies that share the "gradient, direction, line search, update"
/// loop differ only in this policy. A policy value is owned by one solver
/// run, so any state it carries (an inverse-Hessian estimate, the previous
/// direction) starts fresh with each call to [`minimize`](super::minimize).
pub trait DirectionPolicy<P> {
    /// Returns the ray to minimize along from `iterate`.
    ///
    /// The policy may perform its own line searches through `searcher`;
    /// their evaluations count toward the run.
    ///
    /// # Errors
    ///
    /// Returns an error if no direction can be formed at `iterate`.
    fn direction<L: LineSearch>(
        &mut self,
        searcher: &Searcher<'_, P, L>,
        iterate: &Iterate,
    ) -> Result<Ray, Error>;

    /// Called after the line search moves the solver from `previous` to `next`.
    fn accept(&mut self, _previous: &Iterate, _next: &Iterate) {}
}
