//! Load-time card fade-in.

use std::time::Duration;

use crate::timer::Timer;

/// Transition applied when a card is revealed
pub const FADE_TRANSITION: &str = "0.8s ease";

/// Inline style of an animated card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub opacity: f32,
    pub transition: Option<&'static str>,
}

impl CardStyle {
    /// Invisible, no transition yet
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            transition: None,
        }
    }

    /// Fully opaque, easing in
    pub fn revealed() -> Self {
        Self {
            opacity: 1.0,
            transition: Some(FADE_TRANSITION),
        }
    }

    /// Render as an inline `style` attribute
    pub fn to_css(&self) -> String {
        match self.transition {
            Some(transition) => format!("opacity: {}; transition: {};", self.opacity, transition),
            None => format!("opacity: {};", self.opacity),
        }
    }
}

/// Hide a card, wait `delay`, then reveal it.
///
/// Running it again restarts the same sequence.
pub async fn run_fade<T: Timer>(timer: &T, delay: Duration, mut apply: impl FnMut(CardStyle)) {
    apply(CardStyle::hidden());
    timer.sleep(delay).await;
    apply(CardStyle::revealed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_css() {
        assert_eq!(CardStyle::hidden().to_css(), "opacity: 0;");
    }

    #[test]
    fn test_revealed_css() {
        assert_eq!(
            CardStyle::revealed().to_css(),
            "opacity: 1; transition: 0.8s ease;"
        );
    }
}
