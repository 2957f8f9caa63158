use descent_core::{Observer, Vec2};

use crate::traits::HasPoint;

/// Records the point carried by every event.
///
/// Pass `&mut history` as the observer so the trajectory remains available
/// after the solver returns.
///
/// # Example
///
/// ```rust
/// use descent_core::{FnDifferentiable, Vec2};
/// use descent_observers::History;
/// use descent_solvers::{
///     line_search::GoldenSection,
///     unconstrained::{self, Config, Steepest},
/// };
///
/// let problem = FnDifferentiable::new(|x, y| x * x + 4.0 * y * y, |x, y| (2.0 * x, 8.0 * y));
/// let mut history = History::new();
///
/// let solution = unconstrained::minimize(
///     &problem,
///     Vec2::new(2.0, 1.0),
///     Steepest,
///     &Config::default(),
///     &GoldenSection::default(),
///     &mut history,
/// )
/// .unwrap();
///
/// assert_eq!(history.points()[0], Vec2::new(2.0, 1.0));
/// assert_eq!(history.len(), solution.iters + 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<Vec2>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points in order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the last recorded point.
    #[must_use]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Returns the total distance travelled between consecutive points.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

impl<E: HasPoint, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push(event.point());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the points can be read after the solve completes.
impl<E: HasPoint, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
