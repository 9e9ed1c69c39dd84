//! Webcam capture card and modal.
//!
//! "Usar cámara web" asks for the camera and opens the preview modal.
//! "Capturar" grabs the current frame, puts it in the hidden upload form as
//! `captura_webcam.jpg` and submits it. Closing the modal stops the camera.

use std::rc::Rc;

use dioxus::prelude::*;
use iplantguard_core::webcam::modal_display;
use iplantguard_core::{CaptureOutcome, PageError, WebcamFlow, WebcamState};
use iplantguard_ui::{Button, ButtonVariant, CloseButton};

use crate::browser::{alert, BrowserCamera, WebcamForm};
use crate::context::{use_page_config, use_toasts};

const MODAL_ID: &str = "modal-camara";
const VIDEO_ID: &str = "video-webcam";
const CANVAS_ID: &str = "canvas-webcam";
const FORM_ID: &str = "form-webcam";
const INPUT_ID: &str = "input-webcam-file";

type BrowserWebcam = WebcamFlow<BrowserCamera, WebcamForm>;

#[component]
pub fn WebcamCapture() -> Element {
    let forms = use_page_config().forms;
    let toasts = use_toasts();
    let flow: Rc<BrowserWebcam> = use_hook(|| {
        Rc::new(WebcamFlow::new(
            BrowserCamera::new(VIDEO_ID, CANVAS_ID),
            WebcamForm::new(FORM_ID, INPUT_ID),
        ))
    });
    let mut state = use_signal(WebcamState::default);
    let mut capturing = use_signal(|| false);

    // Leaving the page must release the camera.
    use_drop({
        let flow = flow.clone();
        move || flow.close()
    });

    let start = {
        let flow = flow.clone();
        move |_| {
            let flow = flow.clone();
            spawn(async move {
                match flow.start().await {
                    Ok(()) => state.set(flow.state()),
                    Err(e) => {
                        state.set(flow.state());
                        alert(&e.to_string());
                    }
                }
            });
        }
    };

    let close = {
        let flow = flow.clone();
        move |_| {
            flow.close();
            state.set(flow.state());
        }
    };

    let capture = {
        let flow = flow.clone();
        move |_| {
            if capturing() {
                return;
            }
            capturing.set(true);
            let flow = flow.clone();
            spawn(async move {
                match flow.capture().await {
                    Ok(CaptureOutcome::Submitted) => {
                        toasts.success("Foto capturada, analizando...");
                    }
                    Ok(CaptureOutcome::NotStreaming) => {}
                    Err(e @ PageError::EncodeFailed(_)) => {
                        tracing::warn!("Webcam capture failed: {}", e);
                        toasts.error(e.to_string());
                    }
                    Err(e) => tracing::warn!("Webcam capture not submitted: {}", e),
                }
                state.set(flow.state());
                capturing.set(false);
            });
        }
    };

    let display = modal_display(state());

    rsx! {
        Button {
            variant: ButtonVariant::Camera,
            disabled: state() == WebcamState::Streaming,
            onclick: start,
            "📷 Usar cámara web"
        }

        div {
            id: MODAL_ID,
            class: "modal-camara",
            style: "display: {display};",

            div { class: "modal-camara-content",
                div { class: "modal-camara-header",
                    h3 { "Cámara web" }
                    CloseButton { onclick: close.clone() }
                }

                video {
                    id: VIDEO_ID,
                    autoplay: true,
                    "playsinline": "true",
                    muted: true,
                }
                canvas { id: CANVAS_ID }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: close,
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: capturing(),
                        onclick: capture,
                        "📸 Capturar"
                    }
                }
            }
        }

        form {
            id: FORM_ID,
            action: "{forms.webcam_action}",
            method: "post",
            enctype: "multipart/form-data",
            input {
                id: INPUT_ID,
                r#type: "file",
                name: "{forms.webcam_field}",
                accept: "image/jpeg",
            }
        }
    }
}
