use gradwalk_core::Vector;

use super::ConfigError;

/// Stepping strategy for descent.
///
/// Both policies share one loop; they differ only in how the step direction
/// is built from the gradient and in their numeric constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Unit-length anti-gradient scaled by a scheduled gain.
    FixedStep(FixedStep),

    /// Raw anti-gradient scaled by a constant gain.
    GradientStep(GradientStep),
}

impl Policy {
    /// Fixed-step policy with default constants.
    #[must_use]
    pub fn fixed_step() -> Self {
        Self::FixedStep(FixedStep::default())
    }

    /// Gradient-step policy with default constants.
    #[must_use]
    pub fn gradient_step() -> Self {
        Self::GradientStep(GradientStep::default())
    }

    /// Short name used in traces and on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FixedStep(_) => "fixed-step",
            Self::GradientStep(_) => "gradient-step",
        }
    }

    /// Gradient intensity at or below which the run has converged.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        match self {
            Self::FixedStep(p) => p.epsilon,
            Self::GradientStep(p) => p.epsilon,
        }
    }

    /// Best objective at or below which further improvement is not trusted.
    #[must_use]
    pub fn floor(&self) -> f64 {
        match self {
            Self::FixedStep(p) => p.floor,
            Self::GradientStep(p) => p.floor,
        }
    }

    /// Gain applied to the direction on the given step (numbered from 1).
    #[must_use]
    pub fn gain(&self, step: usize) -> f64 {
        match self {
            Self::FixedStep(p) if step > p.fine_after => p.fine_gain,
            Self::FixedStep(p) => p.gain,
            Self::GradientStep(p) => p.gain,
        }
    }

    /// Step direction for a gradient estimate.
    ///
    /// Returns `None` when the fixed-step policy cannot normalize the
    /// gradient (zero or non-finite norm).
    #[must_use]
    pub fn direction(&self, gradient: Vector) -> Option<Vector> {
        match self {
            Self::FixedStep(_) => gradient.anti_gradient().normalized(),
            Self::GradientStep(_) => Some(gradient.anti_gradient()),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::gradient_step()
    }
}

impl From<FixedStep> for Policy {
    fn from(policy: FixedStep) -> Self {
        Self::FixedStep(policy)
    }
}

impl From<GradientStep> for Policy {
    fn from(policy: GradientStep) -> Self {
        Self::GradientStep(policy)
    }
}

/// Constants for the fixed-step policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    gain: f64,
    fine_gain: f64,
    fine_after: usize,
    epsilon: f64,
    floor: f64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self {
            gain: 1e-3,
            fine_gain: 1e-4,
            fine_after: 9000,
            epsilon: 1e-3,
            floor: -30.0,
        }
    }
}

impl FixedStep {
    /// Creates a fixed-step policy.
    ///
    /// Steps `1..=fine_after` use `gain`; later steps use `fine_gain`.
    ///
    /// # Errors
    ///
    /// Returns an error if a gain is not finite and positive, `epsilon` is
    /// negative or not finite, or `floor` is not finite.
    pub fn new(
        gain: f64,
        fine_gain: f64,
        fine_after: usize,
        epsilon: f64,
        floor: f64,
    ) -> Result<Self, ConfigError> {
        check_gain(gain)?;
        check_gain(fine_gain)?;
        check_epsilon(epsilon)?;
        check_floor(floor)?;

        Ok(Self {
            gain,
            fine_gain,
            fine_after,
            epsilon,
            floor,
        })
    }

    /// Returns the gain for early steps.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Returns the gain for steps after [`fine_after`](Self::fine_after).
    #[must_use]
    pub fn fine_gain(&self) -> f64 {
        self.fine_gain
    }

    /// Returns the last step that uses the coarse gain.
    #[must_use]
    pub fn fine_after(&self) -> usize {
        self.fine_after
    }

    /// Returns the convergence threshold on gradient intensity.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the divergence floor.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}

/// Constants for the gradient-step policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStep {
    gain: f64,
    epsilon: f64,
    floor: f64,
}

impl Default for GradientStep {
    fn default() -> Self {
        Self {
            gain: 0.1,
            epsilon: 1e-5,
            floor: -1000.0,
        }
    }
}

impl GradientStep {
    /// Creates a gradient-step policy.
    ///
    /// # Errors
    ///
    /// Returns an error if `gain` is not finite and positive, `epsilon` is
    /// negative or not finite, or `floor` is not finite.
    pub fn new(gain: f64, epsilon: f64, floor: f64) -> Result<Self, ConfigError> {
        check_gain(gain)?;
        check_epsilon(epsilon)?;
        check_floor(floor)?;

        Ok(Self {
            gain,
            epsilon,
            floor,
        })
    }

    /// Returns the gain.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Returns the convergence threshold on gradient intensity.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the divergence floor.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}

fn check_gain(gain: f64) -> Result<(), ConfigError> {
    if gain.is_finite() && gain > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Gain)
    }
}

fn check_epsilon(epsilon: f64) -> Result<(), ConfigError> {
    if epsilon.is_finite() && epsilon >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Epsilon)
    }
}

fn check_floor(floor: f64) -> Result<(), ConfigError> {
    if floor.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Floor)
    }
}
