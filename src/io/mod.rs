//! Input/output: errors, defaults, command line, rendering and progress

/// Command-line interface and batch generation
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of finished maps
pub mod image;
/// Batch progress display
pub mod progress;
/// Stage capture and GIF export
pub mod visualization;
