/// Command-line interface and single-run orchestration
pub mod cli;
/// Pipeline constants and default values
pub mod configuration;
/// Error types and path context
pub mod error;
/// PNG decoding and encoding
pub mod image;
/// Stage spinner for terminal feedback
pub mod progress;
