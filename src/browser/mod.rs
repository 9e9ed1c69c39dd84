//! Browser adapters.
//!
//! Everything that touches `window`, `document` or `localStorage` lives here;
//! `iplantguard-core` only sees the traits these types implement.

mod camera;

pub use camera::{BrowserCamera, WebcamForm};

use std::time::Duration;

use gloo::timers::future::TimeoutFuture;
use iplantguard_core::theme::DARK_MARKER_CLASS;
use iplantguard_core::{PageError, PageResult, Theme, ThemeStore, Timer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlFormElement;

/// `setTimeout`-backed timer
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Theme preference in `localStorage`, stored as a bare string
#[derive(Debug, Clone)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, value: &str) -> PageResult<()> {
        local_storage()
            .ok_or_else(|| PageError::Storage("localStorage unavailable".to_string()))?
            .set_item(&self.key, value)
            .map_err(|e| PageError::Storage(js_error_message(&e)))
    }
}

/// `window.localStorage`, or `None` where the browser blocks it (sandboxed
/// frames, disabled site data). Values are stored as bare strings.
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Put or take the dark marker class on `<body>`.
pub fn apply_theme_marker(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::debug!("No <body> to mark with the theme");
        return;
    };
    let classes = body.class_list();
    let result = match theme.marker_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(DARK_MARKER_CLASS),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to apply theme marker: {}", js_error_message(&e));
    }
}

/// Blocking alert dialog
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Look up an element by id and cast it.
pub fn element<T: JsCast>(id: &str) -> PageResult<T> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::Browser(format!("#{id} has an unexpected element type")))
}

/// Submit a form without dispatching its `submit` event.
pub fn submit_form(id: &str) -> PageResult<()> {
    element::<HtmlFormElement>(id)?.submit().map_err(browser_error)
}

pub fn browser_error(value: JsValue) -> PageError {
    PageError::Browser(js_error_message(&value))
}

/// Best-effort human message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
