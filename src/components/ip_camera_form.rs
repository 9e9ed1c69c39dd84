//! Phone IP-camera form.
//!
//! The address is checked before the form leaves the page. A bad address
//! cancels the submission and shows a blocking alert with an example.

use dioxus::prelude::*;
use iplantguard_core::CameraAddress;

use crate::browser::{alert, submit_form};
use crate::context::use_page_config;

const FORM_ID: &str = "form-ip";

#[component]
pub fn IpCameraForm() -> Element {
    let forms = use_page_config().forms;
    let mut address = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        match CameraAddress::parse(&address.read()) {
            Ok(addr) => {
                tracing::info!("Submitting IP camera {}", addr);
                if let Err(e) = submit_form(FORM_ID) {
                    tracing::warn!("IP camera form not submitted: {}", e);
                }
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    rsx! {
        form {
            id: FORM_ID,
            action: "{forms.ip_action}",
            method: "post",
            onsubmit: handle_submit,

            input {
                class: "text-input",
                r#type: "text",
                name: "{forms.ip_field}",
                value: "{address}",
                oninput: move |e| address.set(e.value()),
                placeholder: "192.168.0.23:8080",
            }

            button { class: "btn-primary", r#type: "submit", "📱 Tomar foto" }
        }
    }
}
