//! UI Components for the iPlantGuard page.

mod faq_list;
mod fade_card;
mod ip_camera_form;
mod nav_header;
mod photo_upload;
mod theme_toggle;
mod toast_host;
mod webcam_capture;

pub use faq_list::FaqList;
pub use fade_card::FadeCard;
pub use ip_camera_form::IpCameraForm;
pub use nav_header::NavHeader;
pub use photo_upload::{PhotoInput, PhotoUploadForm};
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use webcam_capture::WebcamCapture;
