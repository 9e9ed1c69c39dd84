//! FAQ panel component

use dioxus::prelude::*;
use iplantguard_core::FaqEntry;

/// One question header plus its collapsible answer
#[component]
pub fn FaqPanel(
    entry: FaqEntry,
    /// Whether the answer is visible
    open: bool,
    /// ➕ or ➖
    icon: &'static str,
    /// Header clicked
    on_toggle: EventHandler<()>,
) -> Element {
    let display = if open { "block" } else { "none" };

    rsx! {
        div { class: "faq-item",
            div {
                class: "faq-question",
                "role": "button",
                "aria-expanded": "{open}",
                onclick: move |_| on_toggle.call(()),
                span { "{entry.question}" }
                span { class: "faq-icon", "{icon}" }
            }
            div {
                class: "faq-answer",
                style: "display: {display};",
                p { "{entry.answer}" }
            }
        }
    }
}
