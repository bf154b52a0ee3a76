//! Text measurement.
//!
//! The UI never rasterizes glyphs itself; it only asks a [`TextMeasure`] how
//! large a string is and records `Text` commands for the host renderer.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{FixedMetrics, TextMeasure};
