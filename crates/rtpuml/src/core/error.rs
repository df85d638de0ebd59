//! Core error types for diagram generation
//!
//! Only two situations are fatal for a generation run: an output location
//! that cannot be created, and brace nesting that does not balance while
//! reflowing assembled diagram text. Everything else is a normal branch.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: cannot use output location {}: {source}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unbalanced braces: closing brace without matching opening brace at line {line}")]
    UnbalancedBraces { line: usize },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Model error: {source}")]
    Model {
        #[from]
        source: serde_json::Error,
    },
}

impl GeneratorError {
    /// Create a new configuration error for an output location
    pub fn configuration(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Configuration {
            path: path.into(),
            source,
        }
    }

    /// Create a new unbalanced brace error (1-based line number)
    pub fn unbalanced_braces(line: usize) -> Self {
        Self::UnbalancedBraces { line }
    }

    /// Returns true if the error was raised before anything was emitted
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
