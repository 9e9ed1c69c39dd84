//! Confirmation feedback for photo file inputs.
//!
//! Once a file is picked, the input's label turns green, pops slightly and
//! names the file. The feedback is one-way: clearing the selection later does
//! not restore the original label.

/// Names longer than this are shortened
const MAX_NAME_CHARS: usize = 15;
/// Characters kept from a shortened name
const KEPT_NAME_CHARS: usize = 12;

/// Shorten a file name for display.
///
/// Names up to 15 characters are returned whole; longer names keep their
/// first 12 characters followed by `...`.
pub fn shorten_file_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(KEPT_NAME_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Inline style applied to a label after a photo is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub background: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
    pub transition: &'static str,
    pub transform: &'static str,
}

impl LabelStyle {
    /// The green "captured" look
    pub const CAPTURED: LabelStyle = LabelStyle {
        background: "#2ecc71",
        color: "white",
        border_color: "#27ae60",
        transition: "0.3s ease",
        transform: "scale(1.02)",
    };

    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; color: {}; border-color: {}; transition: {}; transform: {};",
            self.background, self.color, self.border_color, self.transition, self.transform
        )
    }
}

/// Selection state of one file input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSelection {
    selected: Option<String>,
}

impl PhotoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change event carrying the currently selected file names.
    ///
    /// Only the first name is kept. An empty list leaves the state as is.
    pub fn on_change<I, S>(&mut self, file_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(first) = file_names.into_iter().next() {
            let name = first.into();
            tracing::debug!(file = %name, "photo selected");
            self.selected = Some(name);
        }
    }

    /// Original name of the picked file, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Label style, `None` while nothing has been picked
    pub fn label_style(&self) -> Option<LabelStyle> {
        self.selected.as_ref().map(|_| LabelStyle::CAPTURED)
    }

    /// Visible label text, falling back to `default` while nothing has been picked
    pub fn label_text(&self, default: &str) -> String {
        match &self.selected {
            Some(name) => format!("✅ ¡Foto Capturada! ({})", shorten_file_name(name)),
            None => default.to_string(),
        }
    }
}
