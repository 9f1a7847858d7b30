//! Core configuration for sprite-animation-core.

use serde::{Deserialize, Serialize};

/// Configuration shared by a [`crate::ClipLibrary`] and the states it creates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keep the one-slot group cache in front of the binary search.
    /// Disabling it changes timing only, never results.
    pub group_cache: bool,

    /// Initial capacity hint for clip storage.
    pub initial_clip_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_cache: true,
            initial_clip_capacity: 16,
        }
    }
}
