//! Tessel engine crate.
//!
//! This crate owns the host-facing pieces the immediate-mode UI consumes:
//! geometry, colors, platform-agnostic input, the layered draw list and
//! text measurement.

pub mod input;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
