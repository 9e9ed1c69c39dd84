//! Plant-care FAQ page.

use dioxus::prelude::*;
use iplantguard_core::faq::{entries_from_json, FaqEntry};

use crate::components::{FadeCard, FaqList};

/// Questions bundled with the page
const FAQ_JSON: &str = include_str!("../../assets/faq.json");

fn bundled_entries() -> Vec<FaqEntry> {
    entries_from_json(FAQ_JSON).unwrap_or_else(|e| {
        tracing::warn!("Invalid bundled FAQ: {}", e);
        Vec::new()
    })
}

#[component]
pub fn Chatbot() -> Element {
    let entries = use_hook(bundled_entries);

    rsx! {
        h1 { class: "page-title", "🤖 Preguntas frecuentes" }
        FadeCard {
            p { "Respuestas rápidas a las dudas más comunes sobre el cuidado de tus plantas." }
        }
        FaqList { entries }
    }
}
