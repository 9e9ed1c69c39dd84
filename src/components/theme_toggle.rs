//! Light/dark switch.

use dioxus::prelude::*;
use iplantguard_core::Theme;

use crate::browser::apply_theme_marker;
use crate::context::{use_theme, use_toasts};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let toasts = use_toasts();

    let current = theme.read().current();
    let (icon, title) = match current {
        Theme::Light => ("🌙", "Activar tema oscuro"),
        Theme::Dark => ("☀️", "Activar tema claro"),
    };

    let toggle = move |_| {
        let result = theme.write().toggle_theme();
        apply_theme_marker(theme.read().current());
        if let Err(e) = result {
            tracing::warn!("Theme not saved: {}", e);
            toasts.error("No se pudo guardar el tema");
        }
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{title}",
            "aria-label": "{title}",
            onclick: toggle,
            "{icon}"
        }
    }
}
