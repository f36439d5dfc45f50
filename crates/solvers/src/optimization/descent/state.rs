use gradwalk_core::{Objective, Point, StepIntegrable, Vector};

use super::{Config, Error, Solution, Status};

/// A point evaluated by the solver: objective and gradient estimate.
#[derive(Debug, Clone, Copy)]
pub(super) struct Probe {
    pub(super) point: Point,
    pub(super) objective: f64,
    pub(super) gradient: Vector,
}

impl Probe {
    /// Estimates the gradient at `point`, then evaluates the objective there.
    pub(super) fn at<O>(objective: &O, point: Point, config: &Config) -> Self
    where
        O: Objective + ?Sized,
    {
        let gradient = config.difference().gradient(objective, point, config.h());
        Self {
            point,
            objective: objective.value(point),
            gradient,
        }
    }
}

/// Solver state threaded through the descent loop.
///
/// Every accepted step strictly improves the objective, so the current point
/// is always the best point seen so far.
pub(super) struct State {
    best: Probe,
    steps: usize,
}

impl State {
    pub(super) fn new(start: Probe) -> Self {
        Self {
            best: start,
            steps: 0,
        }
    }

    pub(super) fn steps(&self) -> usize {
        self.steps
    }

    pub(super) fn gradient(&self) -> Vector {
        self.best.gradient
    }

    pub(super) fn is_converged(&self, epsilon: f64) -> bool {
        self.best.gradient.intensity() <= epsilon
    }

    /// Point reached by stepping from the current point.
    pub(super) fn stepped(&self, direction: Vector, gain: f64) -> Point {
        self.best.point.step(direction, gain)
    }

    /// Accepts `probe` as the next point, or reports why the run diverged.
    ///
    /// On error the state is left untouched, so the best point stays frozen.
    pub(super) fn accept(
        &mut self,
        step: usize,
        direction: Vector,
        probe: Probe,
        floor: f64,
    ) -> Result<(), Error> {
        if self.best.objective <= floor {
            return Err(Error::PastFloor {
                step,
                best: self.best.point,
                best_objective: self.best.objective,
                direction,
                floor,
            });
        }

        if probe.objective < self.best.objective {
            self.best = probe;
            self.steps = step;
            return Ok(());
        }

        if probe.objective.is_finite() {
            Err(Error::NoImprovement {
                step,
                best: self.best.point,
                best_objective: self.best.objective,
                direction,
                rejected: probe.objective,
            })
        } else {
            Err(self.non_finite(step, Some(direction)))
        }
    }

    pub(super) fn non_finite(&self, step: usize, direction: Option<Vector>) -> Error {
        Error::NonFinite {
            step,
            best: self.best.point,
            best_objective: self.best.objective,
            direction,
        }
    }

    pub(super) fn best(&self) -> &Probe {
        &self.best
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            point: self.best.point,
            objective: self.best.objective,
            gradient: self.best.gradient,
            iters: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const STEP: Vector = Vector::new(-1.0, 0.0);

    fn probe(x: f64, objective: f64) -> Probe {
        Probe {
            point: Point::new(x, 0.0),
            objective,
            gradient: Vector::new(objective, 0.0),
        }
    }

    #[test]
    fn accept_keeps_strict_improvements() {
        let mut state = State::new(probe(0.0, 3.0));

        state.accept(1, STEP, probe(1.0, 2.0), -10.0).expect("improves");
        state.accept(2, STEP, probe(2.0, 1.5), -10.0).expect("improves");

        assert_eq!(state.steps(), 2);
        assert_relative_eq!(state.best().point.x, 2.0);
        assert_relative_eq!(state.best().objective, 1.5);
    }

    #[test]
    fn equal_objective_is_not_an_improvement() {
        let mut state = State::new(probe(0.0, 3.0));

        let err = state.accept(1, STEP, probe(1.0, 3.0), -10.0).unwrap_err();

        assert!(matches!(err, Error::NoImprovement { step: 1, .. }));
        assert_eq!(err.direction(), Some(STEP));
        assert_eq!(state.steps(), 0);
        assert_relative_eq!(state.best().point.x, 0.0);
    }

    #[test]
    fn nan_objective_is_non_finite() {
        let mut state = State::new(probe(0.0, 3.0));

        let err = state.accept(1, STEP, probe(1.0, f64::NAN), -10.0).unwrap_err();

        assert!(matches!(err, Error::NonFinite { step: 1, .. }));
        assert_eq!(err.best(), (Point::new(0.0, 0.0), 3.0));
        assert_eq!(err.direction(), Some(STEP));
    }

    #[test]
    fn floor_blocks_any_further_step() {
        let mut state = State::new(probe(0.0, 3.0));
        state.accept(1, STEP, probe(1.0, -12.0), -10.0).expect("still above floor");

        // The next step would improve, but the best already crossed the floor.
        let err = state.accept(2, STEP, probe(2.0, -20.0), -10.0).unwrap_err();

        assert!(matches!(err, Error::PastFloor { step: 2, .. }));
        assert_eq!(err.direction(), Some(STEP));
        assert_eq!(err.best(), (Point::new(1.0, 0.0), -12.0));
    }

    #[test]
    fn solution_reports_best_and_step_count() {
        let mut state = State::new(probe(0.0, 3.0));
        state.accept(1, STEP, probe(0.5, 1.0), -10.0).expect("improves");

        let solution = state.into_solution(Status::MaxIters);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.point.x, 0.5);
        assert_relative_eq!(solution.objective, 1.0);
    }
}
