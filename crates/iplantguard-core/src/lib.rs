//! iPlantGuard Page Behaviors
//!
//! Browser-independent state machines behind the iPlantGuard web page.
//!
//! ## Overview
//!
//! Every behavior of the page is a small, self-contained reaction to a user
//! or browser event. This crate models each one as plain Rust state so it can
//! be exercised without a browser; the web binary only renders that state and
//! forwards DOM events into it.
//!
//! - [`fade`]: load-time card fade-in
//! - [`camera_address`]: IP-camera `host:port` validation
//! - [`photo`]: file-input confirmation feedback
//! - [`webcam`]: webcam capture-and-submit flow
//! - [`faq`]: single-open FAQ accordion
//! - [`theme`]: persisted light/dark preference
//! - [`toast`]: transient notifications
//!
//! ## Quick Start
//!
//! ```
//! use iplantguard_core::camera_address;
//! use iplantguard_core::faq::FaqAccordion;
//!
//! assert!(camera_address::validate("192.168.0.23:8080"));
//!
//! let mut faq = FaqAccordion::new(3);
//! faq.toggle(1);
//! faq.toggle(2);
//! assert_eq!(faq.open_count(), 1);
//! ```

pub mod camera_address;
pub mod config;
pub mod error;
pub mod fade;
pub mod faq;
pub mod photo;
pub mod theme;
pub mod timer;
pub mod toast;
pub mod webcam;

// Re-exports
pub use camera_address::CameraAddress;
pub use config::{FormTargets, PageConfig, ToastTimings};
pub use error::{PageError, PageResult};
pub use fade::{run_fade, CardStyle};
pub use faq::{FaqAccordion, FaqEntry};
pub use photo::{shorten_file_name, LabelStyle, PhotoSelection};
pub use theme::{MemoryThemeStore, Theme, ThemePreference, ThemeStore};
pub use timer::Timer;
pub use toast::{drive_toast, Toast, ToastId, ToastKind, ToastPhase, ToastStack, ToastStep};
pub use webcam::{
    CameraBackend, CaptureForm, CaptureOutcome, CapturedPhoto, EncodeOutcome, MediaAccess,
    WebcamFlow, WebcamState, CAPTURE_FILE_NAME, CAPTURE_MIME,
};
