//! Reduction statistics for Cornell notes

use serde::{Deserialize, Serialize};

/// Word-reduction and read-time metrics comparing the source context with
/// the extracted notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStats {
    /// Words removed going from context to notes, floored at zero
    pub reduced_words: usize,

    /// Sentence count of the notes text
    pub sentence_count: usize,

    /// Estimated read time as `MM:00` at 200 words per minute
    pub read_time: String,
}
