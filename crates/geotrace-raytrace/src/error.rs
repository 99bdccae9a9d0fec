//! Error types for the ray-tracing core.

use thiserror::Error;

/// Errors that can occur in the ray-tracing core.
#[derive(Error, Debug)]
pub enum RaytraceError {
    /// Every polygon vertex is collinear with the traced ray's projected
    /// line, so the boundary encloses no area to cross.
    #[error("polygon encloses no area, cannot trace prism crossings")]
    NoEnclosedArea,

    /// Invalid pixel grid description.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

/// Result type for ray-tracing operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;
