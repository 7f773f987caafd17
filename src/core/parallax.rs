// Style strings for the hero pointer effect. Everything here turns a pointer
// sample or a center-relative offset into the values written to element
// styles; the DOM wiring that applies them lives in `events`.

use crate::core::constants::*;
use glam::Vec2;

/// Per-frame presentation of one decorative ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingFrame {
    pub position: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

/// Lead and trail ring frames for a pointer sample. The lead ring sits on
/// the sample; the trail ring lags at a fixed pixel offset, dimmer and
/// slightly smaller.
pub fn ring_frames(sample: Vec2) -> [RingFrame; 2] {
    [
        RingFrame {
            position: sample,
            opacity: RING_LEAD_OPACITY,
            scale: RING_LEAD_SCALE,
        },
        RingFrame {
            position: sample + Vec2::new(RING_TRAIL_OFFSET_X_PX, RING_TRAIL_OFFSET_Y_PX),
            opacity: RING_TRAIL_OPACITY,
            scale: RING_TRAIL_SCALE,
        },
    ]
}

/// CSS pixel length, e.g. `42px`.
#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Ring transform keeping the element centered on its coordinates.
#[inline]
pub fn ring_transform(scale: f32) -> String {
    format!("translate(-50%,-50%) scale({})", scale)
}

/// Content block transform for a center-relative offset. The zero offset
/// yields the zero translation used on pointer-leave.
pub fn content_transform(rel: Vec2) -> String {
    format!(
        "translate3d({}px, {}px, 0)",
        rel.x * CONTENT_DEPTH_PX,
        rel.y * CONTENT_DEPTH_PX
    )
}

/// Hero background position for a center-relative offset, drifting a few
/// percent around dead center.
pub fn background_position(rel: Vec2) -> String {
    format!(
        "{}% {}%",
        BG_CENTER_PCT + rel.x * BG_SHIFT_SPAN_PCT,
        BG_CENTER_PCT + rel.y * BG_SHIFT_SPAN_PCT
    )
}
