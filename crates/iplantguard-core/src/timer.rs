//! Suspension primitive for delayed page effects.

use std::time::Duration;

/// Something that can wait.
///
/// The browser build backs this with a `setTimeout` future; tests use a
/// paused tokio clock.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
