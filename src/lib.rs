//! chart-drawings: interactive annotation engine for time-value charts.
//!
//! This crate provides the base drawing engine concrete annotation tools
//! (trend lines, shaded regions, callouts) build on: pointer gesture
//! routing, shape/anchor bookkeeping, and pixel-to-domain mapping.
//! Rendering stays in the host chart; the engine reports what changed
//! through plugin events and behavior hooks.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{DrawingEngine, DrawingEngineConfig};
pub use error::{DrawingError, DrawingResult};
