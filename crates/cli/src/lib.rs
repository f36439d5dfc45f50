//! Command-line driver for gradwalk.
//!
//! - [`args`] — flags parsed with `clap`
//! - [`config`] — TOML settings merged under the flags
//! - [`run`] — single and multi-start runs with trace output

pub mod args;
pub mod config;
pub mod run;

pub use args::Args;
pub use config::Settings;
pub use run::{Report, run};
