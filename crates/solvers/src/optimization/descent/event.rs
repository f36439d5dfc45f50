use gradwalk_core::{Point, Vector};

/// Event emitted by the descent solver after each accepted step.
///
/// The point, objective, and gradient describe where the step landed; they
/// are also the new best, since every accepted step improves the objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number, starting at 1.
    pub step: usize,

    /// Direction the step moved along.
    pub direction: Vector,

    /// Gain applied to the direction.
    pub gain: f64,

    /// Point reached by the step.
    pub point: Point,

    /// Objective at the new point.
    pub objective: f64,

    /// Gradient estimate at the new point.
    pub gradient: Vector,
}
