//! Context providers for the iPlantGuard page.
//!
//! The root [`App`](crate::app::App) provides the page configuration, the
//! theme preference and the toast stack; components reach them through the
//! hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let toasts = use_toasts();
//! toasts.success("Foto enviada");
//! ```

use dioxus::prelude::*;
use iplantguard_core::{
    drive_toast, PageConfig, ThemePreference, ToastId, ToastKind, ToastStack, ToastTimings,
};

use crate::browser::{GlooTimer, LocalThemeStore};

/// Configuration bundled with the page
const PAGE_CONFIG_JSON: &str = include_str!("../assets/page.json");

/// Theme preference shared through context
pub type SharedTheme = Signal<ThemePreference<LocalThemeStore>>;

/// Parse the bundled configuration, falling back to defaults.
pub fn load_page_config() -> PageConfig {
    match PageConfig::from_json(PAGE_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid bundled page config, using defaults: {}", e);
            PageConfig::default()
        }
    }
}

/// Hook to access the page configuration.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}

/// Hook to access the theme preference.
pub fn use_theme() -> SharedTheme {
    use_context::<SharedTheme>()
}

/// Hook to raise toast notifications.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Handle for raising toasts.
///
/// Each toast gets its own timer task. The task is not tied to the calling
/// component, so a toast raised right before navigation still expires.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    stack: Signal<ToastStack>,
    timings: ToastTimings,
}

impl Toasts {
    pub fn new(stack: Signal<ToastStack>, timings: ToastTimings) -> Self {
        Self { stack, timings }
    }

    /// Green notification
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Success, message.into())
    }

    /// Red notification
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(ToastKind::Error, message.into())
    }

    pub fn stack(&self) -> Signal<ToastStack> {
        self.stack
    }

    fn notify(&self, kind: ToastKind, message: String) -> ToastId {
        let mut stack = self.stack;
        let timings = self.timings;
        let id = stack.write().push(kind, message);

        spawn_forever(async move {
            drive_toast(&GlooTimer, timings, |step| stack.write().apply(id, step)).await;
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = PageConfig::from_json(PAGE_CONFIG_JSON).unwrap();
        assert_eq!(config.theme_storage_key, "iplantguard-theme");
        assert_eq!(config.forms.ip_action, "/foto_ip");
        assert_eq!(config.toast.lifetime().as_millis(), 3300);
    }
}
