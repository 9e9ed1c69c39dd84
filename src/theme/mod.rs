//! Theme module for iPlantGuard.
//!
//! Global stylesheet, including the `dark-theme` overrides and the toast
//! slide animations.

mod styles;

pub use styles::GLOBAL_STYLES;
