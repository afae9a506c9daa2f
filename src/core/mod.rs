//! Core application plumbing
//!
//! This module contains the non-domain pieces of the generator:
//! - Command line argument handling
//! - Error helpers

pub mod cli;
pub mod errors;

// Re-export commonly used items
pub use cli::CliArgs;
pub use errors::MissingInput;
