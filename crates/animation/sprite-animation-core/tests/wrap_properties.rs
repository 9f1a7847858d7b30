use sprite_animation_core::{ping_pong_frame, wrap_frame, WrapMode};

const MODES: [WrapMode; 5] = [
    WrapMode::Default,
    WrapMode::Once,
    WrapMode::Loop,
    WrapMode::PingPong,
    WrapMode::ClampForever,
];

#[test]
fn loop_is_periodic() {
    for max in 1u32..9 {
        let period = i64::from(max) + 1;
        for counter in 0i64..40 {
            let base = wrap_frame(counter, max, WrapMode::Loop);
            for k in 0..5 {
                assert_eq!(
                    wrap_frame(counter + k * period, max, WrapMode::Loop),
                    base,
                    "max={max} counter={counter} k={k}"
                );
            }
        }
    }
}

#[test]
fn ping_pong_stays_in_range_and_mirrors_at_bounce() {
    for max in 1u32..9 {
        let m = i64::from(max);
        for counter in 0i64..200 {
            assert!(wrap_frame(counter, max, WrapMode::PingPong) <= max);
        }
        for counter in 0..=2 * m {
            assert_eq!(
                wrap_frame(counter, max, WrapMode::PingPong),
                wrap_frame(2 * m - counter, max, WrapMode::PingPong),
                "max={max} counter={counter}"
            );
        }
    }
}

#[test]
fn clamp_holds_last_index_and_is_identity_in_range() {
    for mode in [WrapMode::Default, WrapMode::Once, WrapMode::ClampForever] {
        for max in 1u32..9 {
            for counter in 0..=i64::from(max) {
                assert_eq!(wrap_frame(counter, max, mode), counter as u32);
            }
            for counter in i64::from(max) + 1..50 {
                assert_eq!(wrap_frame(counter, max, mode), max);
            }
        }
    }
}

#[test]
fn negative_counters_mirror_positive_ones() {
    for mode in MODES {
        for max in 0u32..7 {
            for counter in 0i64..60 {
                assert_eq!(
                    wrap_frame(-counter, max, mode),
                    wrap_frame(counter, max, mode),
                    "{mode:?} max={max} counter={counter}"
                );
            }
        }
    }
    for total in 1u32..7 {
        for counter in 0i64..60 {
            assert_eq!(ping_pong_frame(-counter, total), ping_pong_frame(counter, total));
        }
    }
}

#[test]
fn frame_count_ping_pong_stays_below_total() {
    for total in 1u32..9 {
        for counter in 0i64..200 {
            assert!(ping_pong_frame(counter, total) < total);
        }
    }
}
