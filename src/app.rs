use dioxus::prelude::*;
use iplantguard_core::{ThemePreference, ToastStack};

use crate::browser::{apply_theme_marker, LocalThemeStore};
use crate::components::{NavHeader, ToastHost};
use crate::context::{load_page_config, Toasts};
use crate::pages::{Chatbot, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Capture page: upload, IP camera and webcam
/// - `/chatbot` - Plant-care FAQ
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageLayout)]
        #[route("/")]
        Home {},
        #[route("/chatbot")]
        Chatbot {},
}

/// Root application component.
///
/// Provides global styles, page configuration, theme and toast contexts, and routing.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_page_config);

    let mut theme =
        use_signal(|| ThemePreference::new(LocalThemeStore::new(&config.theme_storage_key)));
    use_context_provider(|| theme);

    let stack = use_signal(ToastStack::new);
    use_context_provider(|| Toasts::new(stack, config.toast));

    // Restore the theme saved by a previous visit. The marker follows the
    // displayed theme even when re-saving it fails.
    use_hook(move || {
        let result = theme.write().restore();
        apply_theme_marker(theme.read().current());
        match result {
            Ok(Some(saved)) => tracing::info!("Restored {} theme", saved),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to restore theme: {}", e),
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastHost {}
    }
}

/// Header plus the active page
#[component]
fn PageLayout() -> Element {
    rsx! {
        NavHeader {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
