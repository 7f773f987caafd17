pub mod ambient;
pub mod constants;
pub mod nav;
pub mod parallax;
pub mod pointer;

pub use ambient::AmbientPhase;
pub use nav::NavState;
pub use parallax::{ring_frames, RingFrame};
pub use pointer::{HeroRect, PointerTracker};
