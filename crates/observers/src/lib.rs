//! Reusable observers for gradwalk descent runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the descent solver's events and actions.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for reusable observers
//!   ([`HasObjective`], [`HasPoint`], [`CanStopEarly`])
//! - [`trace`] — Text trace of each accepted step ([`TraceObserver`])
//! - [`history`] — In-memory record of emitted events ([`History`])
//! - [`stop`] — Early termination once a target is reached ([`StopBelow`])
//!
//! [`Observer`]: gradwalk_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod history;
pub mod stop;
pub mod trace;
pub mod traits;

pub use history::History;
pub use stop::StopBelow;
pub use trace::TraceObserver;
