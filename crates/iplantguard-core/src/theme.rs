//! Light/dark theme preference.
//!
//! The chosen theme is written to persistent storage on every explicit change
//! and read back once at load. Dark mode is signalled by a `dark-theme` class
//! on the page root; light mode is the page's unmarked default.

use std::fmt;
use std::str::FromStr;

use crate::error::{PageError, PageResult};

/// Class added to the page root in dark mode
pub const DARK_MARKER_CLASS: &str = "dark-theme";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class to put on the page root, if any
    pub fn marker_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some(DARK_MARKER_CLASS),
            Theme::Light => None,
        }
    }

    /// Lenient reading of a stored value: only `"dark"` is dark.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PageError::Storage(format!("unknown theme: {other}"))),
        }
    }
}

/// Key-value storage holding the theme string
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> PageResult<()>;
}

/// In-memory store, used off the browser and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> PageResult<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Current theme plus the store it persists to
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Start in the page default (light) without touching storage.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Theme::default(),
        }
    }

    /// Apply and persist `theme`.
    ///
    /// The displayed theme changes even if persisting fails.
    pub fn set_theme(&mut self, theme: Theme) -> PageResult<()> {
        self.current = theme;
        tracing::info!(theme = %theme, "theme set");
        self.store.save(theme.as_str())
    }

    /// Flip the stored theme (light when unset) and return the new one.
    pub fn toggle_theme(&mut self) -> PageResult<Theme> {
        let stored = self
            .store
            .load()
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default();
        let next = stored.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Re-apply the stored theme, if one was saved.
    ///
    /// Returns `None` and leaves the default styling alone when storage is empty.
    /// `current` takes the stored theme before it is re-saved, so it stays
    /// accurate even when the save fails.
    pub fn restore(&mut self) -> PageResult<Option<Theme>> {
        match self.store.load() {
            Some(value) => {
                let theme = Theme::from_stored(&value);
                self.set_theme(theme)?;
                Ok(Some(theme))
            }
            None => Ok(None),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_theme_persists() {
        let mut pref = ThemePreference::new(MemoryThemeStore::new());
        pref.set_theme(Theme::Dark).unwrap();
        assert_eq!(pref.store().load().as_deref(), Some("dark"));
        assert_eq!(pref.current().marker_class(), Some(DARK_MARKER_CLASS));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut pref = ThemePreference::new(MemoryThemeStore::with_value("dark"));
        pref.restore().unwrap();
        assert_eq!(pref.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(pref.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(pref.store().load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_from_empty_storage_goes_dark() {
        let mut pref = ThemePreference::new(MemoryThemeStore::new());
        assert_eq!(pref.toggle_theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_restore_without_stored_value() {
        let mut pref = ThemePreference::new(MemoryThemeStore::new());
        assert_eq!(pref.restore().unwrap(), None);
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(pref.store().load(), None);
    }

    #[test]
    fn test_restore_unknown_value_falls_back_to_light() {
        let mut pref = ThemePreference::new(MemoryThemeStore::with_value("sepia"));
        assert_eq!(pref.restore().unwrap(), Some(Theme::Light));
        assert_eq!(pref.store().load().as_deref(), Some("light"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
    }

    /// Storage that can be read but rejects every write, like a quota-exceeded
    /// or read-only localStorage.
    struct ReadOnlyStore(Option<String>);

    impl ThemeStore for ReadOnlyStore {
        fn load(&self) -> Option<String> {
            self.0.clone()
        }

        fn save(&mut self, _value: &str) -> PageResult<()> {
            Err(PageError::Storage("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_restore_failed_save_still_reports_stored_theme() {
        let mut pref = ThemePreference::new(ReadOnlyStore(Some("dark".to_string())));
        assert!(pref.restore().is_err());
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.current().marker_class(), Some(DARK_MARKER_CLASS));
    }

    #[test]
    fn test_unavailable_storage() {
        let mut pref = ThemePreference::new(ReadOnlyStore(None));
        assert_eq!(pref.restore().unwrap(), None);
        assert_eq!(pref.current(), Theme::Light);

        let err = pref.toggle_theme().unwrap_err();
        assert!(matches!(err, PageError::Storage(_)));
        // The page still switches even though nothing was persisted
        assert_eq!(pref.current(), Theme::Dark);
    }
}
