//! Page chrome state: theme, navigation menu, header scroll marker.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Colour theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label shown on the theme toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI chrome state provided to the header and page shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub nav_open: bool,
    pub scrolled: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Close the menu after a link inside it is followed.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
