//! Input/output operations: errors, configuration, CLI, images, and progress

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Generation progress display
pub mod progress;
/// Snapshot capture and GIF assembly
pub mod visualization;
