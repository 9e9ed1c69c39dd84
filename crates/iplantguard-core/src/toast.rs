//! Transient toast notifications.
//!
//! A toast slides in at the top-right corner, stays for `visible_ms`, slides
//! out for `exit_ms` and is then removed. Toasts stack independently: there is
//! no cap and no de-duplication, and a scheduled removal cannot be cancelled.

use std::fmt;

use crate::config::ToastTimings;
use crate::timer::Timer;

/// Identifier of a toast within its stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "#2ecc71",
            ToastKind::Error => "#e74c3c",
        }
    }
}

/// Lifecycle phase of a toast still in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

/// Step emitted by [`drive_toast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    BeginExit,
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn animation(&self) -> &'static str {
        match self.phase {
            ToastPhase::Showing => "slideIn 0.3s ease",
            ToastPhase::Leaving => "slideOut 0.3s ease",
        }
    }

    /// Inline style of the floating element
    pub fn to_css(&self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); \
             z-index: 9999; animation: {};",
            self.kind.background(),
            self.animation()
        )
    }
}

/// Toasts currently in the document, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast in the `Showing` phase.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Showing,
        });
        tracing::debug!(%id, ?kind, "toast shown");
        id
    }

    /// Start the exit animation. Returns false if the toast is gone.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            None => false,
        }
    }

    /// Detach the toast. Returns false if it was already removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    pub fn apply(&mut self, id: ToastId, step: ToastStep) {
        match step {
            ToastStep::BeginExit => {
                self.begin_exit(id);
            }
            ToastStep::Remove => {
                self.remove(id);
                tracing::debug!(%id, "toast removed");
            }
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Run one toast's timed lifecycle, reporting each step to `on_step`.
pub async fn drive_toast<T: Timer>(
    timer: &T,
    timings: ToastTimings,
    mut on_step: impl FnMut(ToastStep),
) {
    timer.sleep(timings.visible()).await;
    on_step(ToastStep::BeginExit);
    timer.sleep(timings.exit()).await;
    on_step(ToastStep::Remove);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut stack = ToastStack::new();
        let a = stack.push(ToastKind::Success, "Guardado");
        let b = stack.push(ToastKind::Success, "Guardado");
        assert_ne!(a, b);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Success.background(), "#2ecc71");
        assert_eq!(ToastKind::Error.background(), "#e74c3c");
    }

    #[test]
    fn test_exit_then_remove() {
        let mut stack = ToastStack::new();
        let id = stack.push(ToastKind::Error, "Falló");
        assert!(stack.get(id).unwrap().to_css().contains("slideIn"));

        stack.apply(id, ToastStep::BeginExit);
        let toast = stack.get(id).unwrap();
        assert_eq!(toast.phase, ToastPhase::Leaving);
        assert!(toast.to_css().contains("animation: slideOut 0.3s ease;"));
        assert!(toast.to_css().contains("background: #e74c3c;"));

        stack.apply(id, ToastStep::Remove);
        assert!(!stack.contains(id));
        assert!(!stack.remove(id));
        assert!(!stack.begin_exit(id));
    }

    #[test]
    fn test_removal_leaves_others() {
        let mut stack = ToastStack::new();
        let a = stack.push(ToastKind::Success, "uno");
        let b = stack.push(ToastKind::Error, "dos");
        stack.remove(a);
        let remaining: Vec<_> = stack.iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![b]);
    }
}
