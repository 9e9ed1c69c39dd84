//! Card that fades in shortly after it mounts.

use dioxus::prelude::*;
use iplantguard_core::{run_fade, CardStyle};

use crate::browser::GlooTimer;
use crate::context::use_page_config;

#[component]
pub fn FadeCard(children: Element) -> Element {
    let delay = use_page_config().fade_delay();
    let mut style = use_signal(CardStyle::hidden);

    use_hook(move || {
        spawn(async move {
            run_fade(&GlooTimer, delay, |next| style.set(next)).await;
        });
    });

    rsx! {
        div {
            class: "tarjeta",
            style: "{style.read().to_css()}",
            {children}
        }
    }
}
