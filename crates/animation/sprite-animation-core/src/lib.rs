//! Sprite Animation Core (engine-agnostic)
//!
//! Resolves an elapsed playback time into the frame info (sprite) a sprite-sheet
//! animation should display. A [`SpriteAnimationClip`] describes the frames; a
//! [`SpriteAnimationState`] is created per playing instance and answers
//! [`SpriteAnimationState::current_frame_info_index`] for whatever time the
//! playback driver has advanced it to.

pub mod clip;
pub mod clip_file;
pub mod config;
pub mod error;
pub mod library;
pub mod locator;
pub mod state;
pub mod wrap;

// Re-exports for consumers (adapters)
pub use clip::{FrameInfo, SpriteAnimationClip, StopAction, WrapMode};
pub use clip_file::parse_clip_json;
pub use config::Config;
pub use error::{Result, SpriteAnimationError};
pub use library::ClipLibrary;
pub use locator::{CachedGroup, FrameGroupLocator};
pub use state::SpriteAnimationState;
pub use wrap::{ping_pong_frame, wrap_frame};
