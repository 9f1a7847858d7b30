//! Error types for sprite animation clips and states.

use thiserror::Error;

/// Errors raised while loading clips or building playback states.
///
/// Queries never fail: once a [`crate::SpriteAnimationState`] exists every
/// lookup yields a frame-info index or "no frame".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpriteAnimationError {
    /// A state was requested for a clip that is not registered.
    #[error("sprite animation clip not found: {name}")]
    MissingClip { name: String },

    /// The clip violates a construction precondition (frame rate, boundary table).
    #[error("invalid sprite animation clip '{clip}': {reason}")]
    InvalidClip { clip: String, reason: String },

    /// The clip descriptor could not be parsed.
    #[error("clip json parse error: {0}")]
    Parse(String),
}

impl SpriteAnimationError {
    pub(crate) fn invalid(clip: &str, reason: impl Into<String>) -> Self {
        Self::InvalidClip {
            clip: clip.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SpriteAnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SpriteAnimationError>;
