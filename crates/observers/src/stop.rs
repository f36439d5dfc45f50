//! Early termination once an objective target is reached.

use gradwalk_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops the solver as soon as an event's objective drops below `target`.
///
/// Handy when any point good enough will do and the remaining steps toward
/// the exact minimum are wasted work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    target: f64,
}

impl StopBelow {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.target).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gradwalk_core::{Point, surface::Paraboloid};
    use gradwalk_solvers::optimization::descent::{self, Config, Status};

    #[test]
    fn stops_once_target_is_reached() {
        let solution = descent::minimize(
            &Paraboloid,
            Point::new(2.0, 1.0),
            &Config::gradient_step(),
            StopBelow::new(1.0),
        )
        .expect("stops before diverging");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective < 1.0);
        assert!(solution.iters > 0);
    }

    #[test]
    fn unreachable_target_never_stops() {
        let config = Config::fixed_step().with_max_iters(50);

        let solution = descent::minimize(
            &Paraboloid,
            Point::new(2.0, 1.0),
            &config,
            StopBelow::new(-1.0),
        )
        .expect("stops at the cap");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 50);
    }
}
