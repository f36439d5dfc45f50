//! Core traits and types for gradwalk.
//!
//! This crate defines the shared abstractions that the descent solver and its
//! observers build on:
//!
//! - [`Point`] and [`Vector`] — a location in the plane and a displacement
//!   (gradient, direction) at that location
//! - [`Objective`] — a pure scalar function `f(x, y)`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — types that advance by `derivative * delta`
//! - [`surface`] — sample objectives for demos and tests

mod objective;
mod observer;
mod step;
mod vector;

pub mod surface;

pub use objective::Objective;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
pub use vector::{Point, Vector, anti_gradient, intensity};
