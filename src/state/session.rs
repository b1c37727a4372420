//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the app root as `RwSignal<SessionState>`. Route guards,
//! the navigation shell, and outgoing API calls all read it; mutation goes
//! through the small command surface below (`sign_in`, `set_theme_mode`,
//! `logout`).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// UI theme mode, toggled from the navigation shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to `localStorage`.
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; unknown strings are treated as no preference.
    pub fn from_storage_value(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Cross-component session state: API token, current user id, theme mode.
///
/// Lives for the whole client session; `logout` tears the credentials down
/// while the theme choice survives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub theme: ThemeMode,
}

impl SessionState {
    /// True when both a token and a user id are present.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }

    /// Install credentials for a fresh session.
    pub fn sign_in(&mut self, user_id: String, token: String) {
        self.user_id = Some(user_id);
        self.token = Some(token);
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme = mode;
    }

    /// Clear the credentials. Redirecting to an unauthenticated screen is
    /// the caller's concern.
    pub fn logout(&mut self) {
        self.token = None;
        self.user_id = None;
    }
}
