use super::{ConfigError, LineMinimum, LineSearch, normalize};

/// Fibonacci search.
///
/// Places interior points at ratios of consecutive Fibonacci numbers. The
/// number of reductions `n` is fixed up front as the first index with
/// `F(n) ≥ (b - a) / tolerance`, which makes this the optimal strategy for a
/// known evaluation budget. A final probe at `tolerance / 10` past the
/// surviving interior point decides which half to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    max_terms: usize,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self { max_terms: 90 }
    }
}

impl Fibonacci {
    /// Creates a Fibonacci search that uses at most `max_terms` terms.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_terms` is below 3.
    pub fn new(max_terms: usize) -> Result<Self, ConfigError> {
        if max_terms < 3 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_terms })
    }

    /// Builds the Fibonacci sequence up to the first term reaching `ratio`.
    fn sequence(&self, ratio: f64) -> Vec<f64> {
        let mut fib = vec![1.0, 1.0];
        while fib.len() <= self.max_terms {
            let next = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(next);
            if next >= ratio && fib.len() > 3 {
                break;
            }
        }
        fib
    }
}

impl LineSearch for Fibonacci {
    fn search<F>(&self, phi: F, interval: [f64; 2], tolerance: f64) -> LineMinimum
    where
        F: Fn(f64) -> f64,
    {
        let (mut a, mut b) = normalize(interval);
        let fib = self.sequence((b - a) / tolerance);
        let n = fib.len() - 1;

        let mut x1 = a + fib[n - 2] / fib[n] * (b - a);
        let mut x2 = a + fib[n - 1] / fib[n] * (b - a);
        let mut f1 = phi(x1);
        let mut f2 = phi(x2);
        let mut evals = 2;

        for k in 1..=n - 3 {
            if f1 > f2 {
                a = x1;
                x1 = x2;
                f1 = f2;
                x2 = a + fib[n - k - 1] / fib[n - k] * (b - a);
                f2 = phi(x2);
            } else {
                b = x2;
                x2 = x1;
                f2 = f1;
                x1 = a + fib[n - k - 2] / fib[n - k] * (b - a);
                f1 = phi(x1);
            }
            evals += 1;
        }

        let probe = x1 + tolerance / 10.0;
        if f1 > phi(probe) {
            a = x1;
        } else {
            b = probe;
        }
        evals += 1;

        let x = 0.5 * (a + b);
        LineMinimum {
            x,
            value: phi(x),
            evals: evals + 1,
        }
    }
}
