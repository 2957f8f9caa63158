//! Dense linear systems.
//!
//! [`solve`] runs Gauss–Jordan elimination with partial pivoting on an
//! `N × N` system. It is sized for the small systems that arise in active-set
//! enumeration, where the system is rebuilt for every candidate and a
//! singular system simply means the candidate is rejected.

use thiserror::Error;

/// Pivots smaller than this in magnitude make the system singular.
pub const MIN_PIVOT: f64 = 1e-12;

/// The system has no unique solution.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("singular system: best pivot in column {column} is {pivot:e}")]
pub struct SingularSystem {
    /// Column where elimination failed.
    pub column: usize,

    /// Magnitude of the best available pivot in that column.
    pub pivot: f64,
}

/// Solves `a · x = b`.
///
/// Each column picks the row with the largest absolute coefficient as its
/// pivot, so the elimination is stable for the well-scaled systems it is used
/// on.
///
/// # Errors
///
/// Returns [`SingularSystem`] if any pivot magnitude is below [`MIN_PIVOT`].
pub fn solve<const N: usize>(a: [[f64; N]; N], b: [f64; N]) -> Result<[f64; N], SingularSystem> {
    let mut m = a;
    let mut rhs = b;

    for col in 0..N {
        let pivot_row = (col..N)
            .max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))
            .unwrap_or(col);

        let pivot = m[pivot_row][col].abs();
        if pivot < MIN_PIVOT || pivot.is_nan() {
            return Err(SingularSystem { column: col, pivot });
        }

        if pivot_row != col {
            m.swap(col, pivot_row);
            rhs.swap(col, pivot_row);
        }

        let diag = m[col][col];
        for k in col..N {
            m[col][k] /= diag;
        }
        rhs[col] /= diag;

        for row in 0..N {
            if row == col {
                continue;
            }
            let factor = m[row][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..N {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    Ok(rhs)
}
