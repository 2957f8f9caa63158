use descent_core::{Differentiable, EvalCounter, Observer, Vec2};

use crate::line_search::LineSearch;

use super::{Action, Config, DirectionPolicy, Error, Event, Searcher, Solution, Status};

/// The iteration loop shared by every [`DirectionPolicy`].
///
/// Evaluations are recorded in `counter`, which may already hold counts from
/// an enclosing solver.
pub(super) fn descend<P, D, L, Obs>(
    problem: &P,
    counter: &EvalCounter,
    start: Vec2,
    mut policy: D,
    config: &Config,
    line_search: &L,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Differentiable,
    D: DirectionPolicy<P>,
    L: LineSearch,
    Obs: Observer<Event, Action>,
{
    let searcher = Searcher::new(problem, counter, line_search, config.tolerance());
    let converged = |gradient: Vec2| gradient.norm() <= config.tolerance();

    let mut current = searcher.iterate(start)?;

    for iter in 0..config.max_iters() {
        let event = Event {
            iter,
            point: current.point,
            gradient: current.gradient,
            evals: searcher.evals(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(searcher.finish(current.point, Status::StoppedByObserver, iter));
        }

        if converged(current.gradient) {
            return Ok(searcher.finish(current.point, Status::Converged, iter));
        }

        let ray = policy.direction(&searcher, &current)?;
        let next = searcher.iterate(searcher.minimize_along(ray))?;

        policy.accept(&current, &next);
        current = next;
    }

    let status = if converged(current.gradient) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(searcher.finish(current.point, status, config.max_iters()))
}
