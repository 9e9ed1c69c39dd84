//! Navigation Header Component

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::ThemeToggle;

/// Header with the app title, page links and the theme switch
#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "nav-header",
            span { class: "nav-title", "🌿 iPlantGuard" }
            nav { class: "nav-links",
                Link { to: Route::Home {}, "Inicio" }
                Link { to: Route::Chatbot {}, "Chatbot" }
                ThemeToggle {}
            }
        }
    }
}
