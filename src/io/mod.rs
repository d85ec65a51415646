//! Input/output operations, configuration and error handling

/// Memoized tile renders
pub mod cache;
/// Command-line parsing and processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Source decoding and mosaic rendering
pub mod image;
/// Progress bars
pub mod progress;
