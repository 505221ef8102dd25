//! Flashcard artifact

use serde::{Deserialize, Serialize};

/// A single front/back flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Question side
    pub front: String,

    /// Answer side
    pub back: String,
}

/// An ordered deck of flashcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDeck {
    /// Cards in source order
    pub cards: Vec<Flashcard>,
}

impl FlashcardDeck {
    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no valid card block was recovered.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck() {
        let deck = FlashcardDeck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_deck_round_trips_as_json() {
        let deck = FlashcardDeck {
            cards: vec![Flashcard {
                front: "What is Rust?".to_string(),
                back: "A systems programming language".to_string(),
            }],
        };

        let json = serde_json::to_string(&deck).unwrap();
        let parsed: FlashcardDeck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, parsed);
    }
}
