use glam::Vec2;

/// Latest pointer position over the hero, shared between the move handlers
/// and the per-frame style pass.
///
/// Handlers overwrite the sample on every event; the frame callback drains
/// it once per animation frame, so only the freshest position gets painted.
#[derive(Default, Clone, Copy)]
pub struct PointerTracker {
    sample: Option<Vec2>,
    frame_armed: bool,
}

impl PointerTracker {
    /// Record a sample, overwriting any unread one. Returns true when the
    /// caller should schedule a frame callback; while one is armed, further
    /// samples only replace the stored position.
    pub fn record(&mut self, sample: Vec2) -> bool {
        self.sample = Some(sample);
        if self.frame_armed {
            false
        } else {
            self.frame_armed = true;
            true
        }
    }

    /// Drain the pending sample for painting and disarm the frame flag.
    pub fn take(&mut self) -> Option<Vec2> {
        self.frame_armed = false;
        self.sample.take()
    }

    /// Drop any pending sample so a stale frame cannot repaint after the
    /// pointer left.
    pub fn reset(&mut self) {
        self.sample = None;
        self.frame_armed = false;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.frame_armed
    }
}

/// Hero bounding box snapshot used to derive parallax offsets.
#[derive(Clone, Copy, Debug)]
pub struct HeroRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl HeroRect {
    /// Sample offset relative to the box center, normalized by the box size
    /// so each axis spans [-0.5, 0.5] inside the box. A degenerate box maps
    /// everything to the center instead of dividing by zero.
    pub fn relative_offset(&self, sample: Vec2) -> Vec2 {
        if self.width > 0.0 && self.height > 0.0 {
            Vec2::new(
                (sample.x - (self.left + self.width * 0.5)) / self.width,
                (sample.y - (self.top + self.height * 0.5)) / self.height,
            )
        } else {
            Vec2::ZERO
        }
    }
}
