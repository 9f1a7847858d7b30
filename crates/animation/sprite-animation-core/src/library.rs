//! Named clip storage and state creation.

use std::sync::Arc;

use crate::clip::SpriteAnimationClip;
use crate::clip_file::parse_clip_json;
use crate::config::Config;
use crate::error::{Result, SpriteAnimationError};
use crate::state::SpriteAnimationState;

/// Clips keyed by name. Re-registering a name replaces the previous clip;
/// states already built from it keep the old boundary table.
#[derive(Debug, Default)]
pub struct ClipLibrary {
    cfg: Config,
    clips: Vec<Arc<SpriteAnimationClip>>,
}

impl ClipLibrary {
    pub fn new(cfg: Config) -> Self {
        Self {
            clips: Vec::with_capacity(cfg.initial_clip_capacity),
            cfg,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn insert(&mut self, clip: SpriteAnimationClip) -> Arc<SpriteAnimationClip> {
        let clip = Arc::new(clip);
        log::debug!(
            "registering sprite animation clip '{}' ({} frame infos)",
            clip.name(),
            clip.frame_infos().len()
        );
        match self.clips.iter_mut().find(|c| c.name() == clip.name()) {
            Some(slot) => *slot = Arc::clone(&clip),
            None => self.clips.push(Arc::clone(&clip)),
        }
        clip
    }

    /// Parse a JSON clip descriptor and register it.
    pub fn load_clip_json(&mut self, s: &str) -> Result<Arc<SpriteAnimationClip>> {
        let clip = parse_clip_json(s)?;
        Ok(self.insert(clip))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<SpriteAnimationClip>> {
        self.clips.iter().find(|c| c.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.iter().map(|c| c.name())
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Build a fresh playback state for the named clip.
    pub fn create_state(&self, name: &str) -> Result<SpriteAnimationState> {
        let clip = self.get(name).ok_or_else(|| SpriteAnimationError::MissingClip {
            name: name.to_string(),
        })?;
        SpriteAnimationState::with_config(clip, &self.cfg)
    }
}
