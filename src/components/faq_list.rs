//! FAQ accordion list.

use dioxus::prelude::*;
use iplantguard_core::{FaqAccordion, FaqEntry};
use iplantguard_ui::FaqPanel;

/// Questions with at most one answer open at a time
#[component]
pub fn FaqList(entries: Vec<FaqEntry>) -> Element {
    let mut accordion = use_signal(|| FaqAccordion::new(entries.len()));

    rsx! {
        div { class: "faq-list",
            for (index, entry) in entries.into_iter().enumerate() {
                FaqPanel {
                    key: "{entry.id}",
                    open: accordion.read().is_open(index),
                    icon: accordion.read().icon(index),
                    entry,
                    on_toggle: move |_| accordion.write().toggle(index),
                }
            }
        }
    }
}
