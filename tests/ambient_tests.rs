// Host-side tests for the ambient drift phase.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod ambient {
        include!("../src/core/ambient.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use crate::core::ambient::AmbientPhase;
use crate::core::constants::*;

#[test]
fn initial_offset_is_a_pure_cosine() {
    let phase = AmbientPhase::default();
    let offset = phase.offset();
    assert_eq!(offset.x, 0.0);
    assert_eq!(offset.y, AMBIENT_Y_AMPLITUDE_PX);
}

#[test]
fn advance_steps_the_phase_by_a_fixed_increment() {
    let mut phase = AmbientPhase::default();
    for _ in 0..100 {
        phase.advance();
    }
    let expected = 100.0 * AMBIENT_PHASE_STEP;
    assert!((phase.value() - expected).abs() < 1e-4);
}

#[test]
fn advance_returns_the_offset_for_the_new_phase() {
    let mut phase = AmbientPhase::default();
    let from_advance = phase.advance();
    assert_eq!(from_advance, phase.offset());
}

#[test]
fn offsets_stay_within_their_amplitudes() {
    let mut phase = AmbientPhase::default();
    for _ in 0..10_000 {
        let offset = phase.advance();
        assert!(offset.x.abs() <= AMBIENT_X_AMPLITUDE_PX + 1e-5);
        assert!(offset.y.abs() <= AMBIENT_Y_AMPLITUDE_PX + 1e-5);
    }
}

#[test]
fn drift_moves_smoothly_between_frames() {
    let mut phase = AmbientPhase::default();
    let mut prev = phase.offset();
    for _ in 0..1_000 {
        let next = phase.advance();
        assert!((next - prev).length() < 0.02);
        prev = next;
    }
}
