//! Steepest descent for two-variable objectives.
//!
//! # Algorithm
//!
//! Starting from a point, the solver estimates the gradient by finite
//! differences, steps along the anti-gradient, and repeats. Each iteration:
//!
//! 1. Converge if the gradient intensity is at or below the policy epsilon.
//! 2. Stop with [`Status::MaxIters`] if the step cap is reached.
//! 3. Step `point += direction * gain` and re-estimate the gradient there.
//! 4. Accept the step only if the objective strictly decreased and the best
//!    value is still above the policy's divergence floor. Otherwise the run
//!    diverges and returns an [`Error`].
//!
//! # Policies
//!
//! The [`Policy`] decides the direction, gain, epsilon, and floor:
//!
//! - [`FixedStep`] — unit-length anti-gradient, so every step has the same
//!   length; the gain drops to a finer value late in the run
//! - [`GradientStep`] — raw anti-gradient, so steps shrink as the gradient
//!   flattens
//!
//! # Limitations
//!
//! - **Stationary points only**: a converged point may be a saddle or a
//!   plateau; no second-order check is made.
//! - **Fragile divergence test**: the first step that fails to improve the
//!   objective ends the run, even when it is caused by numerical noise next
//!   to a true minimum. With [`Difference::Forward`] the gradient estimate is
//!   biased by `O(h)`, so [`GradientStep`] can overshoot a minimum by about
//!   `h / 2` and trip this test before converging. [`Difference::Central`]
//!   removes the bias for smooth objectives.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per accepted step. Observers can return
//! [`Action::StopEarly`] to halt and keep the current best point.
//!
//! A rejected step emits no event. Its direction travels in the returned
//! [`Error`] instead (see [`Error::direction`]), so a trace can still show
//! the step that ended the run.
//!
//! [`Difference::Forward`]: crate::derivative::Difference::Forward
//! [`Difference::Central`]: crate::derivative::Difference::Central

mod action;
mod config;
mod error;
mod event;
mod policy;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_H, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use event::Event;
pub use policy::{FixedStep, GradientStep, Policy};
pub use solution::{Solution, Status};

use gradwalk_core::{Objective, Observer, Point};

use search::search;

/// Finds a local minimum of the objective by steepest descent from `start`.
///
/// The observer receives an [`Event`] after each accepted step.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the run diverges: a step fails to lower the
/// objective, lands on a non-finite value, or the best value has already
/// reached the policy's divergence floor. No minimum is reported in that
/// case; retry from a different starting point.
pub fn minimize<O, Obs>(
    objective: &O,
    start: Point,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(objective, start, config, observer)
}

/// Finds a local minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the run diverges.
pub fn minimize_unobserved<O>(objective: &O, start: Point, config: &Config) -> Result<Solution, Error>
where
    O: Objective + ?Sized,
{
    minimize(objective, start, config, ())
}
