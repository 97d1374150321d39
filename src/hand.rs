use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("both hole cards are {0}")]
    DuplicateHoleCards(Card),
    #[error("a hole hand is exactly two cards, got {0}")]
    HoleCount(usize),
    #[error("a board holds at most five cards, got {0}")]
    TooManyBoardCards(usize),
    #[error("the board repeats {0}")]
    DuplicateBoardCards(Card),
    #[error("hole card {0} is already on the board")]
    Overlap(Card),
    #[error("unparseable cards: {0}")]
    CardParse(String),
}

/// A seat's two private hole cards, stored high card first.
///
/// ```
/// use holdem_engine::hand::HoleCards;
///
/// let hole: HoleCards = "Ks As".parse().unwrap();
/// assert_eq!(hole.to_string(), "As Ks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards {
    cards: [Card; 2],
}

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards(a));
        }
        Ok(Self { cards: if a >= b { [a, b] } else { [b, a] } })
    }

    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cards[0], self.cards[1])
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        match *cards.as_slice() {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(cards.len())),
        }
    }
}

/// Community cards, growing 0 -> 3 -> 4 -> 5 across the streets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let mut seen = HashSet::with_capacity(cards.len());
        for &card in &cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateBoardCards(card));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 5);
        self.cards.push(card);
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_from_cards(cards)
    }
}

/// Check that hole cards and board together hold no duplicate card.
/// Boards shorter than five cards are allowed; hands are validated
/// mid-street too.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let mut seen = HashSet::with_capacity(board.len() + 2);
    for &card in board.cards() {
        if !seen.insert(card) {
            return Err(HandError::DuplicateBoardCards(card));
        }
    }
    for card in hole.cards() {
        if !seen.insert(card) {
            return Err(HandError::Overlap(card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn hole_cards_must_be_distinct() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(
            HoleCards::try_new(ace, ace),
            Err(HandError::DuplicateHoleCards(_))
        ));
        assert!(matches!("As".parse::<HoleCards>(), Err(HandError::HoleCount(1))));
    }

    #[test]
    fn hole_cards_normalize_to_high_card_first() {
        let hole: HoleCards = "2c Ah".parse().unwrap();
        assert_eq!(hole.to_string(), "Ah 2c");
        assert_eq!(hole, "Ah 2c".parse().unwrap());
    }

    #[test]
    fn board_limits_and_dupes() {
        assert!(matches!("2c 2c".parse::<Board>(), Err(HandError::DuplicateBoardCards(_))));
        assert!(matches!(
            "2c 3c 4c 5c 6c 7c".parse::<Board>(),
            Err(HandError::TooManyBoardCards(6))
        ));
        let flop: Board = "2c, 3c 4c".parse().unwrap();
        assert_eq!(flop.len(), 3);
        assert!(!flop.is_empty());
    }

    #[test]
    fn validate_catches_overlap() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let clean: Board = "2c 3c 4c".parse().unwrap();
        assert_eq!(validate_holdem(&hole, &clean), Ok(()));
        let dirty: Board = "As 2c 3c".parse().unwrap();
        let overlap = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(validate_holdem(&hole, &dirty), Err(HandError::Overlap(overlap)));
    }
}
