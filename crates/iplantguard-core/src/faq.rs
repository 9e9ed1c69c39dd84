//! FAQ accordion.
//!
//! At most one answer is visible at a time. Clicking an open question closes
//! it; clicking a closed one closes every other answer and opens it.

use serde::{Deserialize, Serialize};

use crate::error::PageResult;

/// Icon shown next to an open question
pub const ICON_OPEN: &str = "➖";
/// Icon shown next to a closed question
pub const ICON_CLOSED: &str = "➕";

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize)]
struct FaqDocument {
    questions: Vec<FaqEntry>,
}

/// Parse a `{"questions": [...]}` document.
pub fn entries_from_json(json: &str) -> PageResult<Vec<FaqEntry>> {
    let doc: FaqDocument = serde_json::from_str(json)?;
    Ok(doc.questions)
}

/// Open/closed state of a fixed set of panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// All `len` panels start closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Handle a click on the header of panel `index`.
    ///
    /// Indices outside the accordion are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring toggle outside accordion");
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Index of the open panel, if any
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Number of visible answers: always 0 or 1
    pub fn open_count(&self) -> usize {
        usize::from(self.open.is_some())
    }

    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            ICON_OPEN
        } else {
            ICON_CLOSED
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let faq = FaqAccordion::new(3);
        assert_eq!(faq.open_count(), 0);
        assert!((0..3).all(|i| faq.icon(i) == ICON_CLOSED));
    }

    #[test]
    fn test_open_then_close_same_panel() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(1);
        assert!(faq.is_open(1));
        assert_eq!(faq.icon(1), ICON_OPEN);

        faq.toggle(1);
        assert_eq!(faq.open_index(), None);
        assert_eq!(faq.icon(1), ICON_CLOSED);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert_eq!(faq.icon(0), ICON_CLOSED);
        assert_eq!(faq.open_count(), 1);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(0);
        faq.toggle(7);
        assert!(faq.is_open(0));
    }

    #[test]
    fn test_entries_from_json() {
        let json = r#"{"questions": [{"id": 1, "question": "¿Riego?", "answer": "Cada 2-3 días."}]}"#;
        let entries = entries_from_json(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "¿Riego?");
    }
}
