//! Page configuration.
//!
//! Storage keys, delays and form targets used by the page controller. Every
//! field has a default, so a partial JSON document only overrides what it
//! names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PageResult;

/// Storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "iplantguard-theme";

/// Top-level page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Key under which the theme is persisted
    pub theme_storage_key: String,
    /// Delay before cards fade in, in milliseconds
    pub fade_delay_ms: u64,
    /// Toast lifecycle timings
    pub toast: ToastTimings,
    /// Form endpoints and field names
    pub forms: FormTargets,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
            fade_delay_ms: 150,
            toast: ToastTimings::default(),
            forms: FormTargets::default(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Delay before cards fade in
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }
}

/// How long a toast stays up and how long its exit animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub visible_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            visible_ms: 3000,
            exit_ms: 300,
        }
    }
}

impl ToastTimings {
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Total time from creation to removal
    pub fn lifetime(&self) -> Duration {
        self.visible() + self.exit()
    }
}

/// Server endpoints the page submits to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTargets {
    /// IP-camera form action
    pub ip_action: String,
    /// IP-camera address field
    pub ip_field: String,
    /// Photo upload form action
    pub upload_action: String,
    /// Photo upload file field
    pub upload_field: String,
    /// Webcam capture form action
    pub webcam_action: String,
    /// Hidden file field filled by the webcam capture
    pub webcam_field: String,
}

impl Default for FormTargets {
    fn default() -> Self {
        Self {
            ip_action: "/foto_ip".to_string(),
            ip_field: "ip".to_string(),
            upload_action: "/analizar_archivo".to_string(),
            upload_field: "archivo".to_string(),
            webcam_action: "/analizar_archivo".to_string(),
            webcam_field: "archivo".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = PageConfig::default();
        assert_eq!(config.theme_storage_key, "iplantguard-theme");
        assert_eq!(config.fade_delay(), Duration::from_millis(150));
        assert_eq!(config.toast.lifetime(), Duration::from_millis(3300));
        assert_eq!(config.forms.ip_action, "/foto_ip");
        assert_eq!(config.forms.ip_field, "ip");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"toast": {"visible_ms": 5000}}"#).unwrap();
        assert_eq!(config.toast.visible_ms, 5000);
        assert_eq!(config.toast.exit_ms, 300);
        assert_eq!(config.fade_delay_ms, 150);
        assert_eq!(config.forms, FormTargets::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = PageConfig::from_json("{ fade_delay_ms: ").unwrap_err();
        assert!(matches!(err, crate::PageError::Config(_)));
    }
}
