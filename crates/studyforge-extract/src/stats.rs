//! Reduction statistics for the Cornell flow

use studyforge_domain::NoteStats;

/// Average reading pace in words per minute
const READING_PACE_WPM: usize = 200;

/// Compute reduction statistics from the original context and the
/// flattened notes text.
///
/// `reduced_words` is floored at zero: notes longer than their source are
/// reported as zero reduction, not a negative count.
pub fn compute(original: &str, notes: &str) -> NoteStats {
    let original_words = word_count(original);
    let note_words = word_count(notes);

    let minutes = note_words.div_ceil(READING_PACE_WPM);

    NoteStats {
        reduced_words: original_words.saturating_sub(note_words),
        sentence_count: sentence_count(notes),
        read_time: format!("{:02}:00", minutes),
    }
}

/// Count whitespace-separated tokens; the empty string has zero words.
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences: split the trimmed text on runs of `.`, `!`, or `?`,
/// count segments that carry any non-whitespace content, and subtract one,
/// floored at zero.
fn sentence_count(text: &str) -> usize {
    text.trim()
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_words() {
        let stats = compute("one two three four", "one two");
        assert_eq!(stats.reduced_words, 2);
    }

    #[test]
    fn test_reduced_words_clamped_at_zero() {
        let stats = compute("short", "much longer note text here");
        assert_eq!(stats.reduced_words, 0);
    }

    #[test]
    fn test_word_count_empty_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  spaced   out  "), 2);
    }

    #[test]
    fn test_sentence_count_no_terminators() {
        assert_eq!(sentence_count("no terminators here"), 0);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_sentence_count_terminator_runs_collapse() {
        assert_eq!(sentence_count("Really?! Yes. Fine"), 2);
    }

    #[test]
    fn test_sentence_count_two_sentences() {
        assert_eq!(sentence_count("First. Second. Third"), 2);
    }

    #[test]
    fn test_read_time_formatting() {
        let one_word = "word";
        let stats = compute(one_word, one_word);
        assert_eq!(stats.read_time, "01:00");

        let stats = compute("", "");
        assert_eq!(stats.read_time, "00:00");
    }

    #[test]
    fn test_read_time_rounds_up() {
        // 201 words read at 200 wpm take two minutes
        let notes = "w ".repeat(201);
        let stats = compute(&notes, &notes);
        assert_eq!(stats.read_time, "02:00");
    }
}
