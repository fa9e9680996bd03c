//! Command line, configuration, errors, logging and image I/O

/// Command-line parsing and command dispatch
pub mod cli;
/// Defaults and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, tile preparation and export
pub mod image;
/// Console and file logging
pub mod logging;
/// Progress display
pub mod progress;
