//! Error types for OBJ file operations.

use thiserror::Error;

/// Errors that can occur while reading or writing OBJ files.
#[derive(Error, Debug)]
pub enum ObjError {
    /// I/O error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed vertex, normal, or face line.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },

    /// Face referencing a vertex or normal that does not exist.
    #[error("Invalid face at line {line}: {message}")]
    InvalidFace {
        /// Line number (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },
}

impl ObjError {
    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid face error.
    pub fn invalid_face(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidFace {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias for OBJ results.
pub type Result<T> = std::result::Result<T, ObjError>;
