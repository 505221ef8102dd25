//! Parse generated text into a Cornell document
//!
//! The format contract asks for three sections introduced by literal
//! marker lines (`Cues:`, `Notes:`, `Summary:`). The parser is a single
//! forward scan with explicit section state: a marker line switches state
//! and is not stored, every other non-blank line belongs to the current
//! section, and lines before the first marker are discarded.

use studyforge_domain::{CornellDocument, NoteKind, NoteLine};

/// Parser state: which section the scan is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Cues,
    Notes,
    Summary,
}

/// Parse generated text into a [`CornellDocument`].
///
/// Never fails: a missing section simply yields an empty cue list, note
/// list, or summary string. Blank lines are skipped and never terminate a
/// section.
pub fn extract(text: &str) -> CornellDocument {
    let mut section = Section::None;
    let mut document = CornellDocument::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("Cues:") {
            section = Section::Cues;
            continue;
        }
        if trimmed.starts_with("Notes:") {
            section = Section::Notes;
            continue;
        }
        if trimmed.starts_with("Summary:") {
            section = Section::Summary;
            continue;
        }

        match section {
            // Preamble before the first marker is discarded
            Section::None => {}
            Section::Cues => {
                // Only bulleted lines contribute to the cue column
                if let Some(rest) = line.strip_prefix("- ") {
                    document.cues.push(rest.to_string());
                }
            }
            Section::Notes => document.notes.push(classify_note(line)),
            Section::Summary => {
                if !document.summary.is_empty() {
                    document.summary.push(' ');
                }
                document.summary.push_str(trimmed);
            }
        }
    }

    document
}

/// Classify a notes-column line by its bullet and indentation.
///
/// A `- ` bullet at the margin is a topic heading, a two-space-indented
/// `- ` bullet is a detail, and anything else is free text.
fn classify_note(line: &str) -> NoteLine {
    if let Some(rest) = line.strip_prefix("- ") {
        NoteLine::new(NoteKind::Topic, rest)
    } else if let Some(rest) = line.strip_prefix("  - ") {
        NoteLine::new(NoteKind::Detail, rest)
    } else {
        NoteLine::new(NoteKind::Text, line.trim())
    }
}
