//! Solvers for optimization problems over two-variable objectives.
//!
//! # Solvers
//!
//! - [`descent`] — steepest descent driven by finite-difference gradients,
//!   with fixed-length or gradient-proportional steps

pub mod descent;
