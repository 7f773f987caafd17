use crate::core::constants::*;
use glam::Vec2;

/// Phase of the ambient background drift.
///
/// One instance lives inside the ambient loop; every animation frame
/// advances the phase by a fixed step and publishes the derived pixel
/// offset as CSS custom properties on the hero.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientPhase {
    t: f32,
}

impl AmbientPhase {
    /// Pixel offset for the current phase.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(
            self.t.sin() * AMBIENT_X_AMPLITUDE_PX,
            self.t.cos() * AMBIENT_Y_AMPLITUDE_PX,
        )
    }

    /// Advance one frame and return the new offset.
    pub fn advance(&mut self) -> Vec2 {
        self.t += AMBIENT_PHASE_STEP;
        self.offset()
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.t
    }
}
