//! Theme preference: durable storage and the body class

use crate::config::AuthConfig;
use crate::platform::{BodyClassList, KeyValueStore};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Applies and persists the theme
#[derive(Clone)]
pub struct ThemeSwitch {
    storage: Rc<dyn KeyValueStore>,
    body: Rc<dyn BodyClassList>,
}

impl ThemeSwitch {
    pub fn new(storage: Rc<dyn KeyValueStore>, body: Rc<dyn BodyClassList>) -> Self {
        Self { storage, body }
    }

    /// Stored preference; anything but `"true"` means light
    pub fn stored(&self) -> Theme {
        Theme::from_dark(self.storage.get(AuthConfig::DARK_THEME_KEY).as_deref() == Some("true"))
    }

    /// Match the body class to `theme`
    pub fn apply(&self, theme: Theme) {
        self.body
            .toggle_class(AuthConfig::DARK_THEME_CLASS, theme.is_dark());
    }

    /// Apply `theme` and write it to durable storage
    ///
    /// A failed write only costs the preference on the next visit, so it is
    /// logged and otherwise ignored.
    pub fn set(&self, theme: Theme) {
        self.apply(theme);
        let value = if theme.is_dark() { "true" } else { "false" };
        if let Err(error) = self.storage.set(AuthConfig::DARK_THEME_KEY, value) {
            tracing::warn!(%error, "failed to persist theme preference");
        }
    }
}

/// Read the stored preference at startup and apply it to the body
///
/// The result is what the dashboard shell receives as its initial theme.
pub fn check_default_theme(switch: &ThemeSwitch) -> bool {
    let theme = switch.stored();
    switch.apply(theme);
    theme.is_dark()
}
