//! Cornell-style note artifact
//!
//! A Cornell document has three columns: cues (key questions or topics),
//! notes (the body, a mix of topic headings and indented details), and a
//! single-paragraph summary.

use serde::{Deserialize, Serialize};

/// How a line in the notes column should be rendered.
///
/// The generated format introduces main topics with a `- ` bullet at the
/// margin and details with a two-space-indented `- ` bullet. Anything else
/// is free-running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Main topic heading (`- ` at the margin)
    Topic,
    /// Indented sub-bullet (`  - `)
    Detail,
    /// Plain text line with no bullet marker
    Text,
}

/// A single entry in the notes column, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLine {
    /// Rendering kind derived from the line's bullet and indentation
    pub kind: NoteKind,

    /// Line content with the bullet marker stripped
    pub text: String,
}

impl NoteLine {
    /// Create a note line.
    pub fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Cornell-style notes recovered from generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornellDocument {
    /// Cue column entries, one per bullet under the `Cues:` marker
    pub cues: Vec<String>,

    /// Notes column entries, flattened in source order
    pub notes: Vec<NoteLine>,

    /// Summary section lines joined by single spaces
    pub summary: String,
}

impl CornellDocument {
    /// True when no section produced any content.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty() && self.notes.is_empty() && self.summary.is_empty()
    }

    /// The notes column flattened to plain text, one line per entry.
    ///
    /// This is the text the reduction statistics are computed against.
    pub fn notes_text(&self) -> String {
        let lines: Vec<&str> = self.notes.iter().map(|n| n.text.as_str()).collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = CornellDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.notes_text(), "");
    }

    #[test]
    fn test_notes_text_flattens_in_order() {
        let doc = CornellDocument {
            cues: vec!["What is photosynthesis?".to_string()],
            notes: vec![
                NoteLine::new(NoteKind::Topic, "Photosynthesis"),
                NoteLine::new(NoteKind::Detail, "Converts light to energy"),
            ],
            summary: "Plants make food from light.".to_string(),
        };

        assert!(!doc.is_empty());
        assert_eq!(doc.notes_text(), "Photosynthesis\nConverts light to energy");
    }

    #[test]
    fn test_serializes_note_kind_lowercase() {
        let line = NoteLine::new(NoteKind::Detail, "x");
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"detail\""));
    }
}
