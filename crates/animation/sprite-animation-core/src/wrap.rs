//! Wrap resolution: reduce an unbounded raw frame counter into a bounded index.
//!
//! Negative counters are folded onto their magnitude, so reverse playback mirrors
//! forward playback. Two PingPong reductions exist and they are not the same
//! function:
//! - [`wrap_frame`] bounces with period `2 * max_index` (each end frame shown once per cycle).
//! - [`ping_pong_frame`] bounces with period `2 * total_frames` (each end frame shown twice).
//!
//! [`crate::SpriteAnimationState`] uses the second for PingPong clips and the
//! first for every other mode.

use crate::clip::WrapMode;

/// Map `counter` into `[0, max_index]` according to `mode`.
/// `max_index == 0` always yields 0.
pub fn wrap_frame(counter: i64, max_index: u32, mode: WrapMode) -> u32 {
    if max_index == 0 {
        return 0;
    }
    let value = counter.unsigned_abs();
    let max = u64::from(max_index);
    let wrapped = if mode.clamps() {
        value.min(max)
    } else if mode == WrapMode::Loop {
        value % (max + 1)
    } else {
        let reduced = value % max;
        if (value / max) % 2 == 1 {
            max - reduced
        } else {
            reduced
        }
    };
    // wrapped <= max_index in every branch
    wrapped as u32
}

/// PingPong reduction keyed on the frame count rather than the last index.
/// Result lies in `[0, total_frames - 1]`; `total_frames == 0` yields 0.
pub fn ping_pong_frame(counter: i64, total_frames: u32) -> u32 {
    if total_frames == 0 {
        return 0;
    }
    let value = counter.unsigned_abs();
    let total = u64::from(total_frames);
    let reduced = value % total;
    let wrapped = if (value / total) % 2 == 1 {
        total - 1 - reduced
    } else {
        reduced
    };
    wrapped as u32
}
