/// Upper limit on the right end of an expanding bracket.
pub const MAX_BRACKET_END: f64 = 1e6;

/// Returns an interval `[0, b]` expected to contain a local minimum of `phi`.
///
/// Starting from `b = 1`, the right end doubles while `phi(b) < phi(b / 2)`,
/// that is, while the function is still decreasing along the ray. Expansion
/// stops once `b` exceeds [`MAX_BRACKET_END`].
///
/// This is a heuristic: it assumes `phi` decreases from `0` (a descent
/// direction) and does not verify that a minimum is actually enclosed.
pub fn bracket<F>(phi: F) -> [f64; 2]
where
    F: Fn(f64) -> f64,
{
    let mut right = 1.0;
    let mut right_value = phi(right);

    while right_value < phi(right / 2.0) {
        right *= 2.0;
        right_value = phi(right);
        if right > MAX_BRACKET_END {
            break;
        }
    }

    [0.0, right]
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    #[test]
    fn keeps_unit_interval_when_minimum_is_close() {
        let interval = bracket(|a: f64| (a - 0.2).powi(2));
        assert_eq!(interval, [0.0, 1.0]);
    }

    #[test]
    fn doubles_until_function_increases() {
        // Minimum at 5: phi(8) > phi(4), so expansion stops at 8.
        let interval = bracket(|a: f64| (a - 5.0).powi(2));
        assert_eq!(interval, [0.0, 8.0]);
    }

    #[test]
    fn caps_expansion_for_unbounded_decrease() {
        let interval = bracket(|a: f64| -a);
        assert!(interval[1] > MAX_BRACKET_END);
        assert!(interval[1] <= 2.0 * MAX_BRACKET_END);
    }

    #[test]
    fn evaluation_count_is_observable() {
        let calls = Cell::new(0);
        let phi = |a: f64| {
            calls.set(calls.get() + 1);
            (a - 3.0).powi(2)
        };

        // b = 1: compare phi(1), phi(0.5) → expand to 2.
        // b = 2: compare phi(2), phi(1)   → expand to 4.
        // b = 4: compare phi(4), phi(2)   → stop.
        let interval = bracket(phi);

        assert_eq!(interval, [0.0, 4.0]);
        assert_eq!(calls.get(), 6);
    }
}
