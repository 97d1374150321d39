use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// A standard 52-card deck that depletes as cards are drawn. A card drawn
/// once can never be drawn again from the same deck; ten seats plus a full
/// board (10 x 2 + 5) never exhausts it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 distinct cards, unshuffled.
    ///
    /// ```
    /// use holdem_engine::deck::Deck;
    ///
    /// assert_eq!(Deck::standard().len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A fresh deck shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// A fresh deck shuffled from a u64 seed, for reproducible hands.
    pub fn shuffled_from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Remove and return the top `n` cards; fails without drawing anything if
    /// fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < n {
            return Err(DeckError::Empty);
        }
        Ok((0..n).filter_map(|_| self.cards.pop()).collect())
    }
}
