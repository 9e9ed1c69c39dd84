//! Reusable UI components

mod accordion;
mod button;
mod toast;

pub use accordion::*;
pub use button::*;
pub use toast::*;
