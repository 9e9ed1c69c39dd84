//! Camera and upload-form adapters for the webcam flow.

use futures::channel::oneshot;
use iplantguard_core::{
    CameraBackend, CaptureForm, CapturedPhoto, EncodeOutcome, MediaAccess, PageError,
    PageResult,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, DataTransfer, File, FilePropertyBag, HtmlCanvasElement,
    HtmlInputElement, HtmlVideoElement, MediaDevices, MediaStream, MediaStreamConstraints,
    MediaStreamTrack,
};

use super::{browser_error, element, js_error_message, submit_form};

/// `navigator.mediaDevices` plus the preview `<video>` and scratch `<canvas>`
#[derive(Debug, Clone)]
pub struct BrowserCamera {
    video_id: &'static str,
    canvas_id: &'static str,
}

impl BrowserCamera {
    pub fn new(video_id: &'static str, canvas_id: &'static str) -> Self {
        Self {
            video_id,
            canvas_id,
        }
    }

    /// `mediaDevices.getUserMedia`, if this browser has it
    fn media_devices() -> Option<MediaDevices> {
        let navigator = gloo::utils::window().navigator();
        let devices = js_sys::Reflect::get(&navigator, &JsValue::from_str("mediaDevices")).ok()?;
        if devices.is_undefined() || devices.is_null() {
            return None;
        }
        let get_user_media = js_sys::Reflect::get(&devices, &JsValue::from_str("getUserMedia")).ok()?;
        if !get_user_media.is_function() {
            return None;
        }
        devices.dyn_into::<MediaDevices>().ok()
    }

    async fn grab_frame(&self) -> PageResult<Blob> {
        let video: HtmlVideoElement = element(self.video_id)?;
        let canvas: HtmlCanvasElement = element(self.canvas_id)?;

        canvas.set_width(video.video_width());
        canvas.set_height(video.video_height());

        let context = canvas
            .get_context("2d")
            .map_err(browser_error)?
            .ok_or_else(|| PageError::Browser("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PageError::Browser("unexpected 2d context type".to_string()))?;
        context
            .draw_image_with_html_video_element_and_dw_and_dh(
                &video,
                0.0,
                0.0,
                f64::from(canvas.width()),
                f64::from(canvas.height()),
            )
            .map_err(browser_error)?;

        let (tx, rx) = oneshot::channel::<Option<Blob>>();
        let on_blob = Closure::once(move |value: JsValue| {
            let _ = tx.send(value.dyn_into::<Blob>().ok());
        });
        canvas
            .to_blob_with_type(on_blob.as_ref().unchecked_ref(), iplantguard_core::CAPTURE_MIME)
            .map_err(browser_error)?;

        // `on_blob` must outlive the encoder callback.
        let blob = rx.await;
        drop(on_blob);

        blob.map_err(|_| PageError::EncodeFailed("encoder callback dropped".to_string()))?
            .ok_or_else(|| PageError::EncodeFailed("empty frame".to_string()))
    }
}

impl CameraBackend for BrowserCamera {
    type Stream = MediaStream;
    type Frame = Blob;

    async fn request_video(&self) -> MediaAccess<MediaStream> {
        let Some(devices) = Self::media_devices() else {
            return MediaAccess::Unsupported;
        };

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);

        let promise = match devices.get_user_media_with_constraints(&constraints) {
            Ok(promise) => promise,
            Err(e) => return MediaAccess::Denied(js_error_message(&e)),
        };

        match JsFuture::from(promise).await {
            Ok(value) => match value.dyn_into::<MediaStream>() {
                Ok(stream) => MediaAccess::Granted(stream),
                Err(_) => MediaAccess::Denied("getUserMedia returned no stream".to_string()),
            },
            Err(e) => MediaAccess::Denied(js_error_message(&e)),
        }
    }

    fn attach_preview(&self, stream: &MediaStream) {
        match element::<HtmlVideoElement>(self.video_id) {
            Ok(video) => video.set_src_object(Some(stream)),
            Err(e) => tracing::debug!("No preview element: {}", e),
        }
    }

    fn stop_tracks(&self, stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }

    async fn encode_jpeg(&self, _stream: &MediaStream) -> EncodeOutcome<Blob> {
        match self.grab_frame().await {
            Ok(blob) => EncodeOutcome::Encoded(blob),
            Err(e) => EncodeOutcome::EncodeFailed(e.to_string()),
        }
    }
}

/// The hidden webcam upload form and its file input
#[derive(Debug, Clone)]
pub struct WebcamForm {
    form_id: &'static str,
    input_id: &'static str,
}

impl WebcamForm {
    pub fn new(form_id: &'static str, input_id: &'static str) -> Self {
        Self { form_id, input_id }
    }
}

impl CaptureForm<Blob> for WebcamForm {
    fn attach(&self, photo: CapturedPhoto<Blob>) -> PageResult<()> {
        let parts = js_sys::Array::of1(&photo.data);
        let options = FilePropertyBag::new();
        options.set_type(photo.mime);
        let file = File::new_with_blob_sequence_and_options(&parts, photo.file_name, &options)
            .map_err(browser_error)?;

        let transfer = DataTransfer::new().map_err(browser_error)?;
        transfer.items().add_with_file(&file).map_err(browser_error)?;

        let input: HtmlInputElement = element(self.input_id)?;
        input.set_files(transfer.files().as_ref());
        Ok(())
    }

    fn submit(&self) -> PageResult<()> {
        submit_form(self.form_id)
    }
}
