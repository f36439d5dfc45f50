use gradwalk_core::{Point, Vector};

/// Ways a descent run can diverge.
///
/// A diverged run reports no minimum. Each variant carries the best point
/// seen before divergence, frozen at that moment, and the direction of the
/// rejected step, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The step did not strictly lower the objective.
    #[error("step {step} did not improve the objective ({rejected} >= {best_objective})")]
    NoImprovement {
        step: usize,
        best: Point,
        best_objective: f64,
        direction: Vector,
        rejected: f64,
    },

    /// The step landed where the objective or its gradient is not finite.
    #[error("step {step} produced a non-finite objective or gradient")]
    ///
    /// `direction` is `None` when the gradient at the best point could not
    /// be turned into a direction.
    NonFinite {
        step: usize,
        best: Point,
        best_objective: f64,
        direction: Option<Vector>,
    },

    /// The best objective had already reached the divergence floor.
    #[error("best objective {best_objective} reached the divergence floor {floor}")]
    PastFloor {
        step: usize,
        best: Point,
        best_objective: f64,
        direction: Vector,
        floor: f64,
    },
}

impl Error {
    /// Returns the step (numbered from 1) on which the run diverged.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::NoImprovement { step, .. }
            | Self::NonFinite { step, .. }
            | Self::PastFloor { step, .. } => *step,
        }
    }

    /// Returns the direction of the rejected step, if one was computed.
    #[must_use]
    pub fn direction(&self) -> Option<Vector> {
        match self {
            Self::NoImprovement { direction, .. } | Self::PastFloor { direction, .. } => {
                Some(*direction)
            }
            Self::NonFinite { direction, .. } => *direction,
        }
    }

    /// Returns the best point and objective seen before divergence.
    #[must_use]
    pub fn best(&self) -> (Point, f64) {
        match self {
            Self::NoImprovement {
                best,
                best_objective,
                ..
            }
            | Self::NonFinite {
                best,
                best_objective,
                ..
            }
            | Self::PastFloor {
                best,
                best_objective,
                ..
            } => (*best, *best_objective),
        }
    }
}
