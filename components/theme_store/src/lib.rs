//! Theme preference: the enum, its file-backed persistence, and the store
//! that owns the current value.
//!
//! The preference survives restarts as the string `"dark"` or `"light"`
//! under the key `"theme"` in a small JSON string-map file. Applying a
//! preference keeps the body class list an exact singleton: the matching
//! class is added and the opposite removed in one step.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod storage;
pub mod theme;

pub use storage::{PreferenceStorage, StoreError};
pub use theme::{ParseThemeError, Theme};

use page_model::ClassList;

/// Storage key holding the persisted theme string.
pub const THEME_KEY: &str = "theme";

/// Owns the in-memory theme preference and its persistence.
///
/// The shell holds the store and queries it; every change goes through
/// [`set_preference`], which keeps the in-memory value, the body class and
/// the persisted string in step.
///
/// [`set_preference`]: ThemeStore::set_preference
#[derive(Debug)]
pub struct ThemeStore {
    storage: PreferenceStorage,
    current: Theme,
}

impl ThemeStore {
    /// Loads the persisted preference, defaulting to dark when the key is
    /// absent or not a theme.
    pub fn load(storage: PreferenceStorage) -> Self {
        let current = storage
            .get(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or(Theme::Dark);
        Self { storage, current }
    }

    /// Returns the current preference.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Applies `theme` to the body class list and persists it.
    pub fn set_preference(&mut self, theme: Theme, body: &mut ClassList) -> Result<(), StoreError> {
        body.toggle_pair(theme.as_str(), theme.opposite().as_str());
        self.current = theme;
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Applies the current preference, used once at startup.
    pub fn apply_current(&mut self, body: &mut ClassList) -> Result<(), StoreError> {
        self.set_preference(self.current, body)
    }

    /// Switches to the opposite preference and returns the new value.
    pub fn toggle(&mut self, body: &mut ClassList) -> Result<Theme, StoreError> {
        let next = self.current.opposite();
        self.set_preference(next, body)?;
        Ok(next)
    }
}
