//! errors.rs - Custom error types for the rolesieve-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `rolesieve-core` library.
///
/// Malformed markup is deliberately absent: unmatched tags degrade to literal
/// text inside the engine and never surface as an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RoleSieveError {
    #[error("Role '{role}' is not in the configured role list: {}", .allowed.join(", "))]
    UnknownRole { role: String, allowed: Vec<String> },

    #[error("Invalid markup grammar: {0}")]
    InvalidGrammar(String),

    #[error("Failed to compile markup pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
