//! Webcam capture-and-submit flow.
//!
//! ```text
//! Idle ──start()──▶ Streaming ──capture()──▶ (frame submitted) ──▶ Idle
//!                       │
//!                       └──────close()─────▶ Idle
//! ```
//!
//! The flow owns the only live camera stream. Browser specifics sit behind
//! [`CameraBackend`] (permission prompt, preview, frame encoding) and
//! [`CaptureForm`] (the hidden upload form), so the flow runs unchanged
//! against test doubles.

use std::cell::RefCell;

use crate::error::{PageError, PageResult};

/// File name given to every captured frame
pub const CAPTURE_FILE_NAME: &str = "captura_webcam.jpg";
/// MIME type of every captured frame
pub const CAPTURE_MIME: &str = "image/jpeg";

/// Outcome of asking the browser for a video stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAccess<S> {
    Granted(S),
    Denied(String),
    Unsupported,
}

/// Outcome of encoding the current preview frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome<F> {
    Encoded(F),
    EncodeFailed(String),
}

/// An encoded frame ready to be placed in the upload form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto<F> {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub data: F,
}

impl<F> CapturedPhoto<F> {
    pub fn jpeg(data: F) -> Self {
        Self {
            file_name: CAPTURE_FILE_NAME,
            mime: CAPTURE_MIME,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// No stream was open; nothing happened
    NotStreaming,
    /// The frame was attached and the form submitted
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebcamState {
    #[default]
    Idle,
    Streaming,
}

/// Camera access and frame grabbing
#[allow(async_fn_in_trait)]
pub trait CameraBackend {
    type Stream: Clone;
    type Frame;

    /// Ask for a video-only stream. May wait indefinitely on the user.
    async fn request_video(&self) -> MediaAccess<Self::Stream>;

    /// Show `stream` in the live preview.
    fn attach_preview(&self, stream: &Self::Stream);

    /// Stop every track of `stream`.
    fn stop_tracks(&self, stream: &Self::Stream);

    /// Grab the current preview frame at its intrinsic size as JPEG.
    async fn encode_jpeg(&self, stream: &Self::Stream) -> EncodeOutcome<Self::Frame>;
}

/// The form that uploads a captured frame
pub trait CaptureForm<F> {
    /// Replace the form's file field with `photo`.
    fn attach(&self, photo: CapturedPhoto<F>) -> PageResult<()>;

    /// Submit the form.
    fn submit(&self) -> PageResult<()>;
}

/// Webcam controller owning the active stream
pub struct WebcamFlow<B: CameraBackend, F> {
    backend: B,
    form: F,
    stream: RefCell<Option<B::Stream>>,
}

impl<B, F> WebcamFlow<B, F>
where
    B: CameraBackend,
    F: CaptureForm<B::Frame>,
{
    pub fn new(backend: B, form: F) -> Self {
        Self {
            backend,
            form,
            stream: RefCell::new(None),
        }
    }

    pub fn state(&self) -> WebcamState {
        if self.stream.borrow().is_some() {
            WebcamState::Streaming
        } else {
            WebcamState::Idle
        }
    }

    /// Request the camera and start the preview.
    ///
    /// On denial or missing support the flow stays idle and the error
    /// describes why.
    pub async fn start(&self) -> PageResult<()> {
        match self.backend.request_video().await {
            MediaAccess::Granted(stream) => {
                self.backend.attach_preview(&stream);
                if let Some(previous) = self.stream.replace(Some(stream)) {
                    self.backend.stop_tracks(&previous);
                }
                tracing::debug!("webcam streaming");
                Ok(())
            }
            MediaAccess::Denied(reason) => {
                tracing::warn!(%reason, "camera access denied");
                Err(PageError::CameraDenied(reason))
            }
            MediaAccess::Unsupported => {
                tracing::warn!("camera API unavailable");
                Err(PageError::CameraUnsupported)
            }
        }
    }

    /// Stop the stream, if any, and return to idle. Safe to call when idle.
    pub fn close(&self) {
        if let Some(stream) = self.stream.take() {
            self.backend.stop_tracks(&stream);
            tracing::debug!("webcam closed");
        }
    }

    /// Encode the current frame, hand it to the form, close and submit.
    ///
    /// Does nothing while idle. If encoding fails the stream keeps running.
    pub async fn capture(&self) -> PageResult<CaptureOutcome> {
        let Some(stream) = self.stream.borrow().clone() else {
            return Ok(CaptureOutcome::NotStreaming);
        };
        match self.backend.encode_jpeg(&stream).await {
            EncodeOutcome::Encoded(frame) => {
                self.form.attach(CapturedPhoto::jpeg(frame))?;
                self.close();
                self.form.submit()?;
                tracing::info!(file = CAPTURE_FILE_NAME, "webcam capture submitted");
                Ok(CaptureOutcome::Submitted)
            }
            EncodeOutcome::EncodeFailed(reason) => Err(PageError::EncodeFailed(reason)),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn form(&self) -> &F {
        &self.form
    }
}

/// `display` value of the capture modal for a given state
pub fn modal_display(state: WebcamState) -> &'static str {
    match state {
        WebcamState::Streaming => "flex",
        WebcamState::Idle => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_photo_metadata() {
        let photo = CapturedPhoto::jpeg(vec![0xFFu8, 0xD8]);
        assert_eq!(photo.file_name, "captura_webcam.jpg");
        assert_eq!(photo.mime, "image/jpeg");
    }

    #[test]
    fn test_modal_display() {
        assert_eq!(modal_display(WebcamState::Streaming), "flex");
        assert_eq!(modal_display(WebcamState::Idle), "none");
    }
}
