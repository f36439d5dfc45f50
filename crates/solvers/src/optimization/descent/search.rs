use gradwalk_core::{Objective, Observer, Point};

use super::{
    Action, Config, Error, Event, Solution, Status,
    state::{Probe, State},
};

/// Core descent loop shared by both policies.
pub(super) fn search<O, Obs>(
    objective: &O,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    let policy = config.policy();
    let mut state = State::new(Probe::at(objective, start, config));

    loop {
        // Checked before normalizing, so a zero gradient never reaches a division.
        if state.is_converged(policy.epsilon()) {
            return Ok(state.into_solution(Status::Converged));
        }
        if state.steps() >= config.max_iters() {
            return Ok(state.into_solution(Status::MaxIters));
        }

        let step = state.steps() + 1;
        let Some(direction) = policy.direction(state.gradient()) else {
            return Err(state.non_finite(step, None));
        };
        let gain = policy.gain(step);

        let probe = Probe::at(objective, state.stepped(direction, gain), config);
        state.accept(step, direction, probe, policy.floor())?;

        let best = state.best();
        let event = Event {
            step,
            direction,
            gain,
            point: best.point,
            objective: best.objective,
            gradient: best.gradient,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver));
        }
    }
}
