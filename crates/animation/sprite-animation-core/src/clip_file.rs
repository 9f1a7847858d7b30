//! JSON clip descriptor.
//!
//! ```json
//! {
//!   "name": "run",
//!   "frameRate": 12,
//!   "wrapMode": "loop",
//!   "stopAction": "doNothing",
//!   "speed": 1.0,
//!   "frameInfos": [{ "sprite": "run_0", "frames": 2 }, { "sprite": "run_1", "frames": 1 }]
//! }
//! ```
//!
//! Everything except `name` and `frameInfos` is optional. Validation of the frame
//! rate and frame counts happens when a state is built from the clip.

use serde::Deserialize;

use crate::clip::{FrameInfo, SpriteAnimationClip, StopAction, WrapMode};
use crate::error::Result;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClipFile {
    name: String,
    #[serde(default = "default_frame_rate")]
    frame_rate: f64,
    #[serde(default)]
    wrap_mode: WrapMode,
    #[serde(default)]
    stop_action: StopAction,
    #[serde(default = "default_speed")]
    speed: f64,
    frame_infos: Vec<FrameInfo>,
}

fn default_frame_rate() -> f64 {
    SpriteAnimationClip::DEFAULT_FRAME_RATE
}

fn default_speed() -> f64 {
    1.0
}

/// Parse a clip descriptor into a [`SpriteAnimationClip`].
pub fn parse_clip_json(s: &str) -> Result<SpriteAnimationClip> {
    let file: ClipFile = serde_json::from_str(s)?;
    Ok(SpriteAnimationClip::new(file.name, file.frame_rate, file.frame_infos)
        .with_wrap_mode(file.wrap_mode)
        .with_stop_action(file.stop_action)
        .with_speed(file.speed))
}
