//! Toast Components
//!
//! Floating notifications rendered from a [`ToastStack`].

use dioxus::prelude::*;
use iplantguard_core::{Toast, ToastStack};

/// One floating notification
#[component]
pub fn ToastCard(toast: Toast) -> Element {
    let style = toast.to_css();
    let id = toast.id.to_string();

    rsx! {
        div {
            id: "{id}",
            class: "toast",
            "role": "status",
            style: "{style}",
            "{toast.message}"
        }
    }
}

/// Every toast of the stack, oldest first
///
/// Toasts share the same fixed position, so simultaneous ones overlap.
#[component]
pub fn ToastList(stack: ReadOnlySignal<ToastStack>) -> Element {
    rsx! {
        for toast in stack.read().iter().cloned() {
            ToastCard { key: "{toast.id}", toast }
        }
    }
}
