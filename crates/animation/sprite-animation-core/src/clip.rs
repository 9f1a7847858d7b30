//! Sprite animation clip: the read-only asset a playback state is built from.
//!
//! A clip is a list of [`FrameInfo`]s, each showing one sprite for a number of
//! raw frames. The cumulative end frame of every entry forms the boundary table
//! consumed by [`crate::locator::FrameGroupLocator`]; it is computed once here and
//! shared by reference count with every state built from the clip. A clip whose
//! frame counts sum past `u32::MAX` has no table and is rejected by the state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Policy for a playback position outside `[0, total_frames)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapMode {
    #[default]
    Default,
    Once,
    Loop,
    PingPong,
    ClampForever,
}

impl WrapMode {
    /// True for modes that freeze on the last frame once it is exceeded
    /// (`Default`, `Once`, `ClampForever`).
    #[inline]
    pub fn clamps(self) -> bool {
        !matches!(self, Self::Loop | Self::PingPong)
    }
}

/// What the playback driver does once a non-looping clip finishes.
/// Carried through to the state untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopAction {
    #[default]
    DoNothing,
    DefaultSprite,
    Hide,
    Destroy,
}

/// One displayable sprite spanning `frames` raw animation frames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub sprite: String,
    pub frames: u32,
}

impl FrameInfo {
    pub fn new(sprite: impl Into<String>, frames: u32) -> Self {
        Self {
            sprite: sprite.into(),
            frames,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteAnimationClip {
    name: String,
    frame_rate: f64,
    wrap_mode: WrapMode,
    stop_action: StopAction,
    speed: f64,
    frame_infos: Vec<FrameInfo>,
    frame_info_frames: Option<Arc<[u32]>>,
}

impl SpriteAnimationClip {
    pub const DEFAULT_FRAME_RATE: f64 = 60.0;

    /// Build a clip. The boundary table is derived here and never changes.
    pub fn new(name: impl Into<String>, frame_rate: f64, frame_infos: Vec<FrameInfo>) -> Self {
        let frame_info_frames = cumulative_frames(&frame_infos);
        Self {
            name: name.into(),
            frame_rate,
            wrap_mode: WrapMode::default(),
            stop_action: StopAction::default(),
            speed: 1.0,
            frame_infos,
            frame_info_frames,
        }
    }

    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    pub fn with_stop_action(mut self, action: StopAction) -> Self {
        self.stop_action = action;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn stop_action(&self) -> StopAction {
        self.stop_action
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn frame_infos(&self) -> &[FrameInfo] {
        &self.frame_infos
    }

    /// The frame info owning a resolved group index.
    pub fn frame_info(&self, index: usize) -> Option<&FrameInfo> {
        self.frame_infos.get(index)
    }

    /// Cumulative end-frame boundary of each frame info (shared, read-only).
    /// `None` when the total frame count does not fit in a `u32`.
    pub fn frame_info_frames(&self) -> Option<Arc<[u32]>> {
        self.frame_info_frames.as_ref().map(Arc::clone)
    }

    /// Last boundary, 0 for a clip without frame infos, `None` on overflow.
    pub fn total_frames(&self) -> Option<u32> {
        self.frame_info_frames
            .as_ref()
            .map(|table| table.last().copied().unwrap_or(0))
    }
}

fn cumulative_frames(frame_infos: &[FrameInfo]) -> Option<Arc<[u32]>> {
    let mut end = 0u32;
    frame_infos
        .iter()
        .map(|info| {
            end = end.checked_add(info.frames)?;
            Some(end)
        })
        .collect()
}
