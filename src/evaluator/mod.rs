//! Hand evaluation: best 5-card ranking out of 5..=7 cards, with a total
//! order over evaluated hands.

mod analysis;
mod combinations;

use crate::cards::Card;
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use analysis::Analysis;
use combinations::FiveFrom;
use core::cmp::Ordering;
use std::collections::HashSet;

/// Poker hand category from weakest to strongest. A royal flush is the
/// ace-high straight flush; same category, top tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Comparable hand strength: category first, then the tie-break sequence
/// lexicographically (higher rank wins at each position). Equal means an
/// exact tie and a split pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    category: Category,
    tiebreak: [u8; 5],
}

impl HandRank {
    pub const fn category(self) -> Category {
        self.category
    }

    /// Tie-break rank values, zero-padded past the positions the category
    /// uses (e.g. a full house uses only the first two).
    pub const fn tiebreak(self) -> [u8; 5] {
        self.tiebreak
    }
}

/// Evaluation of the best five cards found in the input.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    rank: HandRank,
}

impl Evaluation {
    pub const fn rank(&self) -> HandRank {
        self.rank
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    TooFewCards(usize),
    #[error("at most 7 cards can be evaluated, got {0}")]
    TooManyCards(usize),
    #[error("duplicate card in input: {0}")]
    DuplicateCard(Card),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Evaluate any 5..=7 distinct cards: every 5-card combination (1, 6 or 21)
/// is classified and the maximum kept.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("Ah As Kc Qd Jh 3s 2c").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::TooFewCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(EvalError::TooManyCards(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(EvalError::DuplicateCard(c));
        }
    }

    let mut best: Option<Evaluation> = None;
    for idx in FiveFrom::new(cards.len()) {
        let five = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let eval = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    // FiveFrom always yields at least one combination for len >= 5.
    match best {
        Some(e) => Ok(e),
        None => Err(EvalError::TooFewCards(cards.len())),
    }
}

/// Evaluate exactly five cards. Pure and total; duplicate detection is the
/// caller's concern here (use [`evaluate`] for checked input).
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = Analysis::new(cards);
    let (category, tiebreak) = analysis.classify();
    Evaluation { category, best_five: analysis.sorted, rank: HandRank { category, tiebreak } }
}

/// Evaluate exactly seven distinct cards without the input checks of
/// [`evaluate`]. This is the showdown hot path: hole cards plus a full
/// board.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    let mut best: Option<Evaluation> = None;
    for idx in FiveFrom::new(7) {
        let five = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let eval = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    best.expect("seven cards always yield a combination")
}

/// Evaluate a hold'em hand: two hole cards against a complete 5-card board.
///
/// ```
/// use holdem_engine::evaluator::{evaluate_holdem, Category};
/// use holdem_engine::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    if board.len() < 5 {
        return Err(EvalError::TooFewCards(2 + board.len()));
    }
    let mut seven = Vec::with_capacity(7);
    seven.extend_from_slice(&hole.cards());
    seven.extend_from_slice(board.cards());
    evaluate(&seven)
}

/// Compare two hold'em hands on a shared board.
///
/// ```
/// use holdem_engine::evaluator::compare_holdem;
/// use holdem_engine::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}
