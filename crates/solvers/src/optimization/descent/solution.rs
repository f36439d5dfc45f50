use gradwalk_core::{Point, Vector};

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Gradient intensity fell to or below the policy epsilon.
    Converged,

    /// Reached the step cap without converging.
    ///
    /// The reported point is the best one found, but it is not guaranteed to
    /// be near a stationary point.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent run that did not diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimum.
    pub point: Point,

    /// Objective value at the reported point.
    pub objective: f64,

    /// Gradient estimate at the reported point.
    pub gradient: Vector,

    /// Number of accepted steps.
    pub iters: usize,
}
