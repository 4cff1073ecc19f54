/// Default toggle caption, without the state glyph.
pub const DETAILS_TITLE: &str = "Optional: Additional Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Value of the content's `hidden` attribute.
    #[must_use]
    pub const fn hidden(self) -> bool {
        !self.is_open()
    }

    /// Value of the button's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        if self.is_open() { "▲" } else { "▼" }
    }

    #[must_use]
    pub fn label(self, title: &str) -> String {
        format!("{title} {}", self.glyph())
    }
}

/// Click-driven expand/collapse panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collapsible {
    state: PanelState,
}

impl Collapsible {
    #[must_use]
    pub const fn new(state: PanelState) -> Self {
        Self { state }
    }

    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    pub fn toggle(&mut self) -> PanelState {
        self.state = self.state.toggled();
        self.state
    }
}
