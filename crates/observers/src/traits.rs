//! Capability traits for reusable observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used wherever the capabilities exist.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasPoint`] — events that carry the point they describe
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use gradwalk_core::Observer;
//! use gradwalk_observers::traits::{CanStopEarly, HasPoint};
//!
//! /// Stops once a run leaves the unit square.
//! struct StayInside;
//!
//! impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for StayInside {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let p = event.point();
//!         (p.x.abs() > 1.0 || p.y.abs() > 1.0).then(A::stop_early)
//!     }
//! }
//! ```

use gradwalk_core::Point;
use gradwalk_solvers::optimization::descent;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a point in the domain.
pub trait HasPoint {
    /// Returns the point this event describes.
    fn point(&self) -> Point;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasObjective for descent::Event {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasPoint for descent::Event {
    fn point(&self) -> Point {
        self.point
    }
}

impl CanStopEarly for descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
