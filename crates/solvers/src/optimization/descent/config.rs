use thiserror::Error;

use crate::derivative::Difference;

use super::Policy;

/// Default finite-difference step.
pub const DEFAULT_H: f64 = 1e-4;

/// Default cap on the number of descent steps.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// Configuration for the descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    policy: Policy,
    h: f64,
    max_iters: usize,
    difference: Difference,
}

/// Errors that can occur when validating a descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("h must be finite and positive")]
    H,

    #[error("gain must be finite and positive")]
    Gain,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("floor must be finite")]
    Floor,
}

impl Default for Config {
    fn default() -> Self {
        Self::gradient_step()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is not finite and positive.
    pub fn new(policy: Policy, h: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::H);
        }

        Ok(Self {
            policy,
            h,
            max_iters,
            difference: Difference::Forward,
        })
    }

    /// Fixed-step policy with default constants, `h`, and step cap.
    #[must_use]
    pub fn fixed_step() -> Self {
        Self {
            policy: Policy::fixed_step(),
            h: DEFAULT_H,
            max_iters: DEFAULT_MAX_ITERS,
            difference: Difference::Forward,
        }
    }

    /// Gradient-step policy with default constants, `h`, and step cap.
    #[must_use]
    pub fn gradient_step() -> Self {
        Self {
            policy: Policy::gradient_step(),
            ..Self::fixed_step()
        }
    }

    /// Returns a copy with a different finite-difference step.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is not finite and positive.
    pub fn with_h(self, h: f64) -> Result<Self, ConfigError> {
        Self::new(self.policy, h, self.max_iters).map(|c| c.with_difference(self.difference))
    }

    /// Returns a copy with a different step cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different policy.
    #[must_use]
    pub fn with_policy(self, policy: impl Into<Policy>) -> Self {
        Self {
            policy: policy.into(),
            ..self
        }
    }

    /// Returns a copy with a different finite-difference scheme.
    #[must_use]
    pub fn with_difference(self, difference: Difference) -> Self {
        Self { difference, ..self }
    }

    /// Returns the stepping policy.
    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Returns the finite-difference step.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the finite-difference scheme.
    #[must_use]
    pub fn difference(&self) -> Difference {
        self.difference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_h() {
        let policy = Policy::gradient_step();

        assert_eq!(Config::new(policy, 0.0, 10), Err(ConfigError::H));
        assert_eq!(Config::new(policy, -1e-4, 10), Err(ConfigError::H));
        assert_eq!(Config::new(policy, f64::NAN, 10), Err(ConfigError::H));
        assert_eq!(Config::gradient_step().with_h(f64::INFINITY), Err(ConfigError::H));
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = Config::fixed_step()
            .with_difference(Difference::Central)
            .with_max_iters(50)
            .with_h(1e-6)
            .expect("valid h");

        assert_eq!(config.policy(), &Policy::fixed_step());
        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.difference(), Difference::Central);
        assert!((config.h() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_gradient_step() {
        let config = Config::default();

        assert_eq!(config.policy(), &Policy::gradient_step());
        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
        assert_eq!(config.difference(), Difference::Forward);
    }
}
