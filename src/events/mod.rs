pub mod nav;
pub mod pointer;

pub use nav::NavMenu;
pub use pointer::HeroEffect;
