//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Vertical field of view outside the open interval (0, 180) degrees.
    InvalidFieldOfView(f32),
    /// Pitch angle is NaN or infinite.
    InvalidPitch(f32),
    /// Bounding box has no extent at all (no points were accumulated).
    EmptyBounds,
    /// Model has zero depth and cannot be normalized.
    DegenerateModel,
    /// Node id does not belong to the scene.
    UnknownNode(usize),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldOfView(deg) => write!(
                f,
                "vertical field of view must be inside (0, 180) degrees, got \
                 {deg}"
            ),
            Self::InvalidPitch(deg) => {
                write!(f, "pitch angle must be finite, got {deg}")
            }
            Self::EmptyBounds => write!(f, "bounding box is empty"),
            Self::DegenerateModel => {
                write!(f, "model has zero depth and cannot be normalized")
            }
            Self::UnknownNode(id) => write!(f, "unknown scene node {id}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
