//! Error types
//!
//! Level generation is total and never fails. Errors only come from parsing
//! user input: difficulty names, settings files and serialized levels.

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ArrowError>;

/// Errors raised outside the generator itself.
#[derive(Debug, Error)]
pub enum ArrowError {
    /// Difficulty name not recognised.
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// Generator settings fail validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A serialized arrow lies outside the grid.
    #[error("arrow at ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// Two serialized arrows share one cell.
    #[error("more than one arrow at ({x}, {y})")]
    DuplicateArrow { x: usize, y: usize },

    /// A serialized board whose cell list does not fill its grid.
    #[error("board of size {size}x{size} has {cells} cells")]
    MalformedBoard { size: usize, cells: usize },

    /// A serialized level declares a zero-sized grid.
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
