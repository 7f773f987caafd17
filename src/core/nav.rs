/// Whether the collapsible navigation panel is open.
///
/// The panel's CSS classes and the toggle's `aria-expanded` attribute are
/// one-way projections of this value and never the source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Closed,
    Open,
}

impl NavState {
    /// State after the toggle control is activated.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        }
    }

    /// State after a link inside the panel is activated. A link activation
    /// always leaves the panel closed; from `Closed` it is a no-op.
    #[inline]
    pub fn dismissed(self) -> Self {
        NavState::Closed
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, NavState::Open)
    }

    /// Value projected into the toggle's `aria-expanded` attribute.
    #[inline]
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
