//! Minimization over the non-negative quadrant `x >= 0, y >= 0`.
//!
//! - [`kkt`] — enumerates active sets and solves the stationarity system for
//!   each, using a quadratic model of the objective at the origin
//! - [`penalty`] — exterior penalty method wrapping steepest descent

pub mod kkt;
pub mod penalty;
