// Host-side tests for ring frame derivation and style string formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
}

use crate::core::constants::*;
use crate::core::parallax::*;
use crate::core::pointer::HeroRect;
use glam::Vec2;

#[test]
fn lead_ring_sits_on_the_sample() {
    let sample = Vec2::new(320.0, 180.0);
    let [lead, _] = ring_frames(sample);
    assert_eq!(lead.position, sample);
    assert_eq!(lead.opacity, RING_LEAD_OPACITY);
    assert_eq!(lead.scale, RING_LEAD_SCALE);
}

#[test]
fn trail_ring_lags_dimmer_and_smaller() {
    let sample = Vec2::new(320.0, 180.0);
    let [lead, trail] = ring_frames(sample);
    assert_eq!(
        trail.position,
        sample + Vec2::new(RING_TRAIL_OFFSET_X_PX, RING_TRAIL_OFFSET_Y_PX)
    );
    assert!(trail.opacity < lead.opacity);
    assert!(trail.scale < lead.scale);
}

#[test]
fn zero_offset_yields_zero_translation() {
    assert_eq!(content_transform(Vec2::ZERO), "translate3d(0px, 0px, 0)");
}

#[test]
fn zero_offset_centers_background() {
    assert_eq!(background_position(Vec2::ZERO), "50% 50%");
}

#[test]
fn content_translation_scales_with_depth() {
    // Half-width offsets translate by half the depth span.
    assert_eq!(
        content_transform(Vec2::new(0.5, -0.5)),
        "translate3d(9px, -9px, 0)"
    );
}

#[test]
fn background_drift_stays_near_center() {
    assert_eq!(background_position(Vec2::new(0.5, 0.5)), "52% 52%");
    assert_eq!(background_position(Vec2::new(-0.5, -0.5)), "48% 48%");
}

#[test]
fn ring_transform_keeps_rings_centered() {
    assert_eq!(ring_transform(RING_LEAD_SCALE), "translate(-50%,-50%) scale(1)");
    assert_eq!(
        ring_transform(RING_TRAIL_SCALE),
        "translate(-50%,-50%) scale(0.86)"
    );
    assert_eq!(
        ring_transform(RING_REST_SCALE),
        "translate(-50%,-50%) scale(0.4)"
    );
}

#[test]
fn center_sample_derives_the_same_styles_as_leave() {
    // A sample on the hero center produces exactly the centered strings the
    // pointer-leave reset writes back.
    let rect = HeroRect {
        left: 40.0,
        top: 0.0,
        width: 640.0,
        height: 360.0,
    };
    let rel = rect.relative_offset(Vec2::new(360.0, 180.0));
    assert_eq!(content_transform(rel), "translate3d(0px, 0px, 0)");
    assert_eq!(background_position(rel), "50% 50%");
}

#[test]
fn px_formats_whole_and_fractional_values() {
    assert_eq!(px(0.0), "0px");
    assert_eq!(px(42.0), "42px");
    assert_eq!(px(9.5), "9.5px");
    assert_eq!(px(-3.0), "-3px");
}
