//! Parse generated text into a flashcard deck
//!
//! Cards are blank-line-separated blocks of exactly two lines: a `Front:`
//! line and a `Back:` line. Blocks with any other line count are dropped
//! silently.

use studyforge_domain::{Flashcard, FlashcardDeck};
use tracing::warn;

/// Parse generated text into a [`FlashcardDeck`].
///
/// Never fails; malformed blocks are dropped and parsing continues.
pub fn extract(text: &str) -> FlashcardDeck {
    let mut cards = Vec::new();

    for block in text.split("\n\n") {
        let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            continue;
        }
        if lines.len() != 2 {
            warn!("Dropping flashcard block with {} lines", lines.len());
            continue;
        }

        cards.push(Flashcard {
            front: strip_label(lines[0], "Front:"),
            back: strip_label(lines[1], "Back:"),
        });
    }

    FlashcardDeck { cards }
}

/// Strip a literal label prefix case-insensitively, plus any whitespace
/// after the colon. A line without the label is kept as-is (trimmed).
fn strip_label(line: &str, label: &str) -> String {
    let trimmed = line.trim();
    // `get` avoids slicing mid-character when the line carries multibyte
    // text where the label would be
    match trimmed.get(..label.len()) {
        Some(head) if head.eq_ignore_ascii_case(label) => {
            trimmed[label.len()..].trim_start().to_string()
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cards() {
        let deck = extract("Front: Q1\nBack: A1\n\nFront: Q2\nBack: A2");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards[0].front, "Q1");
        assert_eq!(deck.cards[0].back, "A1");
        assert_eq!(deck.cards[1].front, "Q2");
        assert_eq!(deck.cards[1].back, "A2");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("\n\n\n").is_empty());
    }

    #[test]
    fn test_single_line_block_dropped() {
        let deck = extract("Front: lonely question\n\nFront: Q\nBack: A");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards[0].front, "Q");
    }

    #[test]
    fn test_three_line_block_dropped() {
        let deck = extract("Front: Q\nMiddle: ?\nBack: A");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_labels_stripped_case_insensitively() {
        let deck = extract("front: lower\nBACK:   shouty");
        assert_eq!(deck.cards[0].front, "lower");
        assert_eq!(deck.cards[0].back, "shouty");
    }

    #[test]
    fn test_indented_labels() {
        // The prompt contract indents the card lines by two spaces
        let deck = extract("  Front: Q\n  Back: A");
        assert_eq!(deck.cards[0].front, "Q");
        assert_eq!(deck.cards[0].back, "A");
    }

    #[test]
    fn test_missing_label_keeps_line() {
        let deck = extract("Just a question\nJust an answer");
        assert_eq!(deck.cards[0].front, "Just a question");
        assert_eq!(deck.cards[0].back, "Just an answer");
    }

    #[test]
    fn test_multibyte_line_without_label() {
        // Byte 6 falls inside the second '€' here
        let deck = extract("a€€zzz\nBack: x");
        assert_eq!(deck.cards[0].front, "a€€zzz");
        assert_eq!(deck.cards[0].back, "x");
    }

    #[test]
    fn test_multibyte_card_text_preserved() {
        let deck = extract("Front: Qu'est-ce que c'est ?\nBack: C'est une carte — œuf");
        assert_eq!(deck.cards[0].front, "Qu'est-ce que c'est ?");
        assert_eq!(deck.cards[0].back, "C'est une carte — œuf");
    }

    #[test]
    fn test_idempotent() {
        let text = "Front: Q\nBack: A";
        assert_eq!(extract(text), extract(text));
    }
}
