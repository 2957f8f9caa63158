use approx::assert_abs_diff_eq;

use descent_core::{FnDifferentiable, Vec2};

use crate::{
    line_search::GoldenSection,
    unconstrained::{self, Steepest},
};

use super::{Action, Config, ConfigError, Event, Penalized, Status, solve, solve_unobserved};

fn shifted_quadratic() -> FnDifferentiable<impl Fn(f64, f64) -> f64, impl Fn(f64, f64) -> (f64, f64)>
{
    FnDifferentiable::new(
        |x, y| 9.0 * x * x + y * y - 54.0 * x + 4.0 * y,
        |x, y| (18.0 * x - 54.0, 2.0 * y + 4.0),
    )
}

#[test]
fn escalates_penalty_until_feasible() {
    let solution =
        solve_unobserved(&shifted_quadratic(), Vec2::ZERO, &Config::default()).expect("solves");

    // The inner minimizer is (3, -2 / (1 + r)), feasible within 0.01 once r = 100.
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.outer_iters, 3);
    assert_abs_diff_eq!(solution.penalty, 100.0);
    assert_abs_diff_eq!(solution.point.x, 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.point.y, -2.0 / 101.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.value, -81.0788, epsilon = 1e-4);
    assert!(solution.violation <= 0.01);
}

#[test]
fn exhausted_outer_loop_is_reported() {
    let config = Config::new(1.0, 10.0, 0.01, 2, unconstrained::Config::default())
        .expect("valid config");

    let solution = solve_unobserved(&shifted_quadratic(), Vec2::ZERO, &config).expect("solves");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.outer_iters, 2);
    assert_abs_diff_eq!(solution.penalty, 10.0);
    assert!(solution.violation > 0.01);
}

#[test]
fn feasible_start_converges_in_one_outer_iteration() {
    let problem = FnDifferentiable::new(
        |x: f64, y: f64| (x - 1.0).powi(2) + (y - 2.0).powi(2),
        |x, y| (2.0 * (x - 1.0), 2.0 * (y - 2.0)),
    );

    let solution = solve_unobserved(&problem, Vec2::ZERO, &Config::default()).expect("solves");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.outer_iters, 1);
    assert_abs_diff_eq!(solution.penalty, 1.0);
    assert_abs_diff_eq!(solution.violation, 0.0);
    assert_abs_diff_eq!(solution.point.x, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(solution.point.y, 2.0, epsilon = 1e-6);
}

#[test]
fn observer_sees_each_outer_iteration() {
    let mut penalties = Vec::new();
    let mut evals = Vec::new();

    let solution = solve(
        &shifted_quadratic(),
        Vec2::ZERO,
        &Config::default(),
        &GoldenSection::default(),
        |event: &Event| {
            penalties.push(event.penalty);
            evals.push(event.evals);
            assert_eq!(event.inner_status, Status::Converged);
            None::<Action>
        },
    )
    .expect("solves");

    assert_eq!(penalties, vec![1.0, 10.0, 100.0]);
    assert!(evals.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(solution.evals, evals[2] + 1);
}

#[test]
fn one_counter_spans_every_inner_solve() {
    let problem = shifted_quadratic();
    let config = Config::default();

    let solution = solve_unobserved(&problem, Vec2::ZERO, &config).expect("solves");

    // Rerun the same inner solves, each with its own counter.
    let mut point = Vec2::ZERO;
    let mut inner_evals = 0;
    for penalty in [1.0, 10.0, 100.0] {
        let inner = unconstrained::minimize_unobserved(
            &Penalized::new(&problem, penalty),
            point,
            Steepest,
            config.inner(),
        )
        .expect("inner solve converges");
        point = inner.point;
        inner_evals += inner.evals;
    }

    assert_eq!(solution.point, point);
    assert_eq!(solution.evals, inner_evals + 1);
}

#[test]
fn observer_can_stop_early() {
    let solution = solve(
        &shifted_quadratic(),
        Vec2::ZERO,
        &Config::default(),
        &GoldenSection::default(),
        |event: &Event| (event.outer_iter == 1).then_some(Action::StopEarly),
    )
    .expect("solves");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.outer_iters, 1);
    assert_abs_diff_eq!(solution.point.y, -1.0, epsilon = 1e-6);
}

#[test]
fn rejects_bad_config() {
    let inner = unconstrained::Config::default();

    assert_eq!(
        Config::new(0.0, 10.0, 0.01, 5, inner),
        Err(ConfigError::InitialPenalty)
    );
    assert_eq!(
        Config::new(1.0, 1.0, 0.01, 5, inner),
        Err(ConfigError::Growth)
    );
    assert_eq!(
        Config::new(1.0, 10.0, -1.0, 5, inner),
        Err(ConfigError::ConstraintTol)
    );
    assert_eq!(
        Config::new(1.0, 10.0, 0.01, 0, inner),
        Err(ConfigError::MaxOuterIters)
    );
}
