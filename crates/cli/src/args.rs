//! Command-line arguments.

use std::{num::ParseFloatError, path::PathBuf};

use clap::{Parser, ValueEnum};
use gradwalk_core::{
    Objective, Point,
    surface::{EggCrate, Flat, Paraboloid, RaisedParaboloid, Saddle},
};
use gradwalk_solvers::derivative::Difference;
use serde::Deserialize;
use thiserror::Error;

/// Finds the local minimum of a two-variable function by gradient descent.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Surface to minimize [default: egg-crate]
    #[arg(long, value_enum)]
    pub surface: Option<Surface>,

    /// Height of the flat surface [default: 0]
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<f64>,

    /// Starting point; repeat to run from several points [default: 2,1]
    #[arg(
        long = "start",
        value_name = "X,Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub starts: Vec<Point>,

    /// Finite-difference step [default: 1e-4]
    #[arg(long)]
    pub h: Option<f64>,

    /// Step policy [default: gradient-step]
    #[arg(long, value_enum)]
    pub policy: Option<PolicyKind>,

    /// Finite-difference scheme [default: forward]
    #[arg(long, value_enum)]
    pub difference: Option<DifferenceKind>,

    /// Maximum number of accepted steps [default: 10000]
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Print only the result, not the per-step trace
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read settings from a TOML file; flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Surfaces available from the command line.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// x² + y²
    Paraboloid,
    /// x² + y² + 2
    RaisedParaboloid,
    /// sin(5x)·cos(5y) / 5
    #[default]
    EggCrate,
    /// x·y
    Saddle,
    /// A constant, see --level
    Flat,
}

impl Surface {
    /// Builds the objective, using `level` for the flat surface.
    #[must_use]
    pub fn objective(self, level: f64) -> Box<dyn Objective + Sync> {
        match self {
            Self::Paraboloid => Box::new(Paraboloid),
            Self::RaisedParaboloid => Box::new(RaisedParaboloid),
            Self::EggCrate => Box::new(EggCrate),
            Self::Saddle => Box::new(Saddle),
            Self::Flat => Box::new(Flat(level)),
        }
    }
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Unit-length steps with a fixed gain
    FixedStep,
    /// Steps proportional to the gradient
    #[default]
    GradientStep,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DifferenceKind {
    /// (f(p + h) - f(p)) / h
    #[default]
    Forward,
    /// (f(p + h) - f(p - h)) / 2h
    Central,
}

impl From<DifferenceKind> for Difference {
    fn from(kind: DifferenceKind) -> Self {
        match kind {
            DifferenceKind::Forward => Self::Forward,
            DifferenceKind::Central => Self::Central,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("expected a point as X,Y, got `{0}`")]
    PointShape(String),

    #[error("invalid coordinate `{0}`")]
    Coordinate(String, #[source] ParseFloatError),

    #[error("point `{0}` is not finite")]
    NonFinite(String),
}

/// Parses a point written as `X,Y`.
///
/// # Errors
///
/// Returns an error unless the text is two comma-separated finite numbers.
pub fn parse_point(text: &str) -> Result<Point, ArgsError> {
    let Some((x, y)) = text.split_once(',') else {
        return Err(ArgsError::PointShape(text.to_owned()));
    };

    let coordinate = |c: &str| {
        let c = c.trim();
        c.parse::<f64>()
            .map_err(|err| ArgsError::Coordinate(c.to_owned(), err))
    };
    let point = Point::new(coordinate(x)?, coordinate(y)?);

    if !point.is_finite() {
        return Err(ArgsError::NonFinite(text.to_owned()));
    }
    Ok(point)
}
