// Host-side tests for the navigation state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use crate::core::nav::NavState;

#[test]
fn toggle_flips_state() {
    assert_eq!(NavState::Closed.toggled(), NavState::Open);
    assert_eq!(NavState::Open.toggled(), NavState::Closed);
}

#[test]
fn double_toggle_returns_to_start() {
    for start in [NavState::Closed, NavState::Open] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn toggle_parity_over_many_activations() {
    let mut state = NavState::Closed;
    for n in 1..=20 {
        state = state.toggled();
        assert_eq!(state.is_open(), n % 2 == 1, "after {} activations", n);
    }
}

#[test]
fn link_activation_always_closes() {
    assert_eq!(NavState::Open.dismissed(), NavState::Closed);
    // Already closed: dismissing stays a no-op.
    assert_eq!(NavState::Closed.dismissed(), NavState::Closed);
}

#[test]
fn aria_expanded_mirrors_state() {
    assert_eq!(NavState::Open.aria_expanded(), "true");
    assert_eq!(NavState::Closed.aria_expanded(), "false");
}

#[test]
fn first_click_opens_second_click_closes() {
    let opened = NavState::Closed.toggled();
    assert!(opened.is_open());
    assert_eq!(opened.aria_expanded(), "true");

    let closed = opened.toggled();
    assert!(!closed.is_open());
    assert_eq!(closed.aria_expanded(), "false");
}
