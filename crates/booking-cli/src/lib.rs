//! CLI library components for the booking exporter.

pub mod logging;
pub mod pipeline;
