//! Per-instance playback state for one sprite animation clip.
//!
//! The playback driver owns `time` and advances it every tick; the state turns
//! the current time into the index of the frame info to display.

use std::cell::Cell;

use crate::clip::{SpriteAnimationClip, StopAction, WrapMode};
use crate::config::Config;
use crate::error::{Result, SpriteAnimationError};
use crate::locator::FrameGroupLocator;
use crate::wrap::{ping_pong_frame, wrap_frame};

#[derive(Debug, Clone)]
pub struct SpriteAnimationState {
    name: String,
    wrap_mode: WrapMode,
    stop_action: StopAction,
    speed: f64,
    frame_rate: f64,
    total_frames: u32,
    /// Seconds at speed 1.0.
    length: f64,
    /// Current time in seconds. Unbounded; wrapped on query.
    time: f64,
    frame: Cell<Option<u64>>,
    locator: FrameGroupLocator,
}

impl SpriteAnimationState {
    pub fn new(clip: &SpriteAnimationClip) -> Result<Self> {
        Self::with_config(clip, &Config::default())
    }

    pub fn with_config(clip: &SpriteAnimationClip, cfg: &Config) -> Result<Self> {
        let frame_rate = clip.frame_rate();
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            log::warn!(
                "rejecting sprite animation clip '{}': frame rate {frame_rate}",
                clip.name()
            );
            return Err(SpriteAnimationError::invalid(
                clip.name(),
                format!("frame rate must be finite and > 0, got {frame_rate}"),
            ));
        }
        let table = clip
            .frame_info_frames()
            .ok_or_else(|| "total frame count overflows u32".to_string());
        let locator = table
            .and_then(|table| FrameGroupLocator::new(table, cfg.group_cache))
            .map_err(|reason| {
                log::warn!("rejecting sprite animation clip '{}': {reason}", clip.name());
                SpriteAnimationError::invalid(clip.name(), reason)
            })?;
        let total_frames = locator.total_frames();
        log::debug!(
            "sprite animation state '{}': {} groups, {total_frames} frames @ {frame_rate} fps",
            clip.name(),
            locator.group_count()
        );
        Ok(Self {
            name: clip.name().to_string(),
            wrap_mode: clip.wrap_mode(),
            stop_action: clip.stop_action(),
            speed: clip.speed(),
            frame_rate,
            total_frames,
            length: f64::from(total_frames) / frame_rate,
            time: 0.0,
            frame: Cell::new(None),
            locator,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
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

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Advance by a tick of `dt` seconds scaled by the clip speed.
    pub fn advance(&mut self, dt: f64) {
        self.time += dt * self.speed;
    }

    /// Magnitude of the raw frame counter from the last multi-frame query.
    /// May exceed `total_frames`; `None` before the first such query.
    pub fn frame(&self) -> Option<u64> {
        self.frame.get()
    }

    pub fn locator(&self) -> &FrameGroupLocator {
        &self.locator
    }

    /// Index of the frame info to display at the current time, or `None` if the
    /// clip has no frames.
    pub fn current_frame_info_index(&self) -> Option<usize> {
        match self.total_frames {
            0 => None,
            1 => Some(0),
            total => {
                let raw = (self.time * self.frame_rate).floor() as i64;
                self.frame.set(Some(raw.unsigned_abs()));
                let wrapped = match self.wrap_mode {
                    WrapMode::PingPong => ping_pong_frame(raw, total),
                    mode => wrap_frame(raw, total - 1, mode),
                };
                Some(self.locator.locate(wrapped))
            }
        }
    }
}
