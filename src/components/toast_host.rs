use dioxus::prelude::*;
use iplantguard_ui::ToastList;

use crate::context::use_toasts;

/// Renders every live toast. Mounted once, at the root.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        ToastList { stack: toasts.stack() }
    }
}
