//! Photo file input with capture confirmation.

use dioxus::prelude::*;
use iplantguard_core::PhotoSelection;

use crate::context::use_page_config;

/// File input wrapped in its label.
///
/// Picking a file turns the label green and names the file. Clearing the
/// selection afterwards keeps the confirmation.
#[component]
pub fn PhotoInput(
    /// Form field name
    name: String,
    /// Label text before a file is picked
    #[props(default = "📁 Seleccionar foto".to_string())]
    label: String,
) -> Element {
    let mut selection = use_signal(PhotoSelection::new);

    let style = selection.read().label_style().map(|s| s.to_css()).unwrap_or_default();
    let text = selection.read().label_text(&label);

    rsx! {
        label { class: "file-label", style: "{style}",
            "{text}"
            input {
                r#type: "file",
                name: "{name}",
                accept: "image/*",
                onchange: move |evt: FormEvent| {
                    if let Some(files) = evt.files() {
                        selection.write().on_change(files.files());
                    }
                },
            }
        }
    }
}

/// Upload-from-disk form
#[component]
pub fn PhotoUploadForm() -> Element {
    let forms = use_page_config().forms;

    rsx! {
        form {
            action: "{forms.upload_action}",
            method: "post",
            enctype: "multipart/form-data",

            PhotoInput { name: forms.upload_field.clone() }
            button { class: "btn-primary", r#type: "submit", "🔍 Analizar" }
        }
    }
}
