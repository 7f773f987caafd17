/// DOM anchor keys, class names, and literal style strings for the site.
///
/// Every element lookup is optional at runtime; pages without a nav menu or
/// a hero simply skip the corresponding wiring.
// Navigation anchors
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_PANEL_ID: &str = "mainNav";
pub const NAV_LINK_SELECTOR: &str = "a";

// Navigation state projection
pub const NAV_OPEN_CLASS: &str = "open";
pub const NAV_TOGGLE_ACTIVE_CLASS: &str = "is-active";
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";

// Hero anchors
pub const HERO_ID: &str = "hero";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";

// Decorative rings (layered warm/cool glow)
pub const RING_CLASS: &str = "ring";
pub const RING_LEAD_SHADOW: &str = "0 0 90px 24px rgba(255,210,77,0.08)";
pub const RING_TRAIL_SHADOW: &str = "0 0 60px 18px rgba(30,167,255,0.08)";

// Ambient drift custom properties, consumed by the site stylesheet
pub const AMBIENT_X_PROP: &str = "--ambient-x";
pub const AMBIENT_Y_PROP: &str = "--ambient-y";

// Motion preference, sampled once at startup
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
