//! Numerical solvers for gradwalk.
//!
//! - [`derivative`] — finite-difference partial derivatives and gradients
//! - [`optimization`] — local minimization of two-variable objectives

pub mod derivative;
pub mod optimization;
