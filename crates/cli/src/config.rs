//! Run settings merged from a TOML file and the command line.
//!
//! A settings file holds the same fields as the flags, plus the policy
//! constants, which are only settable from a file:
//!
//! ```toml
//! surface = "paraboloid"
//! start = [[2.0, 1.0], [-1.0, 0.5]]
//! policy = "fixed-step"
//! h = 1e-4
//! max-iters = 10000
//!
//! [fixed-step]
//! gain = 1e-3
//! fine-gain = 1e-4
//! fine-after = 9000
//! epsilon = 1e-3
//! floor = -30.0
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use gradwalk_core::Point;
use gradwalk_solvers::optimization::descent::{
    Config, ConfigError, DEFAULT_H, DEFAULT_MAX_ITERS, FixedStep, GradientStep, Policy,
};
use serde::Deserialize;

use crate::args::{Args, DifferenceKind, PolicyKind, Surface};

/// Start used when neither the flags nor the file give one.
pub const DEFAULT_START: Point = Point::new(2.0, 1.0);

/// Contents of a settings file. Every field is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub surface: Option<Surface>,
    pub level: Option<f64>,
    #[serde(default)]
    pub start: Vec<[f64; 2]>,
    pub h: Option<f64>,
    pub policy: Option<PolicyKind>,
    pub difference: Option<DifferenceKind>,
    pub max_iters: Option<usize>,
    pub fixed_step: Option<FixedStepTable>,
    pub gradient_step: Option<GradientStepTable>,
}

/// Overrides for the fixed-step policy constants.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FixedStepTable {
    pub gain: Option<f64>,
    pub fine_gain: Option<f64>,
    pub fine_after: Option<usize>,
    pub epsilon: Option<f64>,
    pub floor: Option<f64>,
}

/// Overrides for the gradient-step policy constants.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GradientStepTable {
    pub gain: Option<f64>,
    pub epsilon: Option<f64>,
    pub floor: Option<f64>,
}

impl FileConfig {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid settings file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("could not parse {}", path.display()))
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML, unknown keys, or values of the wrong type.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl FixedStepTable {
    fn build(&self) -> Result<FixedStep, ConfigError> {
        let defaults = FixedStep::default();
        FixedStep::new(
            self.gain.unwrap_or(defaults.gain()),
            self.fine_gain.unwrap_or(defaults.fine_gain()),
            self.fine_after.unwrap_or(defaults.fine_after()),
            self.epsilon.unwrap_or(defaults.epsilon()),
            self.floor.unwrap_or(defaults.floor()),
        )
    }
}

impl GradientStepTable {
    fn build(&self) -> Result<GradientStep, ConfigError> {
        let defaults = GradientStep::default();
        GradientStep::new(
            self.gain.unwrap_or(defaults.gain()),
            self.epsilon.unwrap_or(defaults.epsilon()),
            self.floor.unwrap_or(defaults.floor()),
        )
    }
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub surface: Surface,
    pub level: f64,
    pub starts: Vec<Point>,
    pub descent: Config,
    pub quiet: bool,
}

impl Settings {
    /// Resolves settings from the flags and the settings file they name.
    ///
    /// # Errors
    ///
    /// Fails if the settings file cannot be loaded or the merged settings
    /// are invalid.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::read(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Merges flags over file values, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Fails if a policy constant, `h`, `level`, or a start is invalid.
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let policy = match args.policy.or(file.policy).unwrap_or_default() {
            PolicyKind::FixedStep => Policy::from(
                file.fixed_step
                    .unwrap_or_default()
                    .build()
                    .context("invalid fixed-step settings")?,
            ),
            PolicyKind::GradientStep => Policy::from(
                file.gradient_step
                    .unwrap_or_default()
                    .build()
                    .context("invalid gradient-step settings")?,
            ),
        };

        let descent = Config::new(
            policy,
            args.h.or(file.h).unwrap_or(DEFAULT_H),
            args.max_iters.or(file.max_iters).unwrap_or(DEFAULT_MAX_ITERS),
        )
        .context("invalid descent settings")?
        .with_difference(args.difference.or(file.difference).unwrap_or_default().into());

        let level = args.level.or(file.level).unwrap_or(0.0);
        if !level.is_finite() {
            bail!("level must be finite, got {level}");
        }

        let starts = if !args.starts.is_empty() {
            args.starts.clone()
        } else if !file.start.is_empty() {
            file.start.into_iter().map(Point::from).collect()
        } else {
            vec![DEFAULT_START]
        };
        if let Some(start) = starts.iter().find(|start| !start.is_finite()) {
            bail!("start ({}, {}) is not finite", start.x, start.y);
        }

        Ok(Self {
            surface: args.surface.or(file.surface).unwrap_or_default(),
            level,
            starts,
            descent,
            quiet: args.quiet,
        })
    }
}
