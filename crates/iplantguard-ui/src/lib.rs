//! iPlantGuard UI Components
//!
//! Presentational Dioxus components for the iPlantGuard page. They hold no
//! behavior of their own: each one renders a piece of `iplantguard-core`
//! state and reports clicks back through event handlers.
//!
//! ## Palette
//!
//! - **Leaf green (#2ecc71)**: success, confirmations
//! - **Forest (#27ae60)**: borders, hover states
//! - **Alert red (#e74c3c)**: errors

pub mod components;

pub use components::*;
