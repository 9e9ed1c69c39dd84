//! Capture page: photo upload, phone IP camera and webcam.

use dioxus::prelude::*;

use crate::components::{FadeCard, IpCameraForm, PhotoUploadForm, WebcamCapture};

#[component]
pub fn Home() -> Element {
    rsx! {
        h1 { class: "page-title", "Diagnóstico de plantas" }

        div { class: "card-grid",
            FadeCard {
                h2 { "📁 Subir una foto" }
                p { "Elige una imagen de la hoja o planta desde tu dispositivo." }
                PhotoUploadForm {}
            }

            FadeCard {
                h2 { "📱 Cámara del celular" }
                p { "Ingresa la IP y el puerto que muestra la app de cámara IP." }
                IpCameraForm {}
            }

            FadeCard {
                h2 { "💻 Cámara web" }
                p { "Toma la foto directamente desde la cámara de tu computadora." }
                WebcamCapture {}
            }
        }
    }
}
