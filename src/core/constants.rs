// Motion tuning for the hero pointer effect and the ambient drift.

// Ring presentation
pub const RING_LEAD_OPACITY: f32 = 0.98;
pub const RING_TRAIL_OPACITY: f32 = 0.85;
pub const RING_LEAD_SCALE: f32 = 1.0;
pub const RING_TRAIL_SCALE: f32 = 0.86;
pub const RING_REST_SCALE: f32 = 0.4; // rings shrink to this when the pointer leaves
pub const RING_TRAIL_OFFSET_X_PX: f32 = 30.0; // trail ring lag behind the lead ring
pub const RING_TRAIL_OFFSET_Y_PX: f32 = 20.0;

// Content parallax
pub const CONTENT_DEPTH_PX: f32 = 18.0; // translation span across the full hero width
pub const BG_CENTER_PCT: f32 = 50.0;
pub const BG_SHIFT_SPAN_PCT: f32 = 4.0; // background drift span around center

// Ambient drift
pub const AMBIENT_PHASE_STEP: f32 = 0.0018; // phase advance per frame
pub const AMBIENT_X_AMPLITUDE_PX: f32 = 3.0;
pub const AMBIENT_Y_AMPLITUDE_PX: f32 = 2.0;
