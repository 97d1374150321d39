use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). The numeric value (2..=14) is the
/// one used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid rank: '{0}'")]
    Rank(String),
    #[error("invalid suit: '{0}'")]
    Suit(String),
    #[error("invalid card: '{0}'")]
    Card(String),
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match s.trim().to_ascii_uppercase().as_str() {
            "A" => 14,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            "T" | "10" => 10,
            digit => digit.parse().ok().filter(|v| (2..=9).contains(v)).unwrap_or(0),
        };
        Rank::from_value(value).ok_or_else(|| CardParseError::Rank(s.to_string()))
    }
}

/// Four suits; no bearing on hand strength, but a fixed order (C < D < H < S)
/// keeps card sorting deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(CardParseError::Suit(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Identity is the (rank, suit) pair; a deck
/// never holds two equal cards.
///
/// ```
/// use holdem_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() < 2 {
            return Err(CardParseError::Card(s.to_string()));
        }
        let mut chars = t.chars();
        let suit_ch = chars.next_back().ok_or_else(|| CardParseError::Card(s.to_string()))?;
        let rank_str: String = chars.collect();
        let rank = Rank::from_str(&rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use holdem_engine::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As Kd, 10c").unwrap();
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    let mut cards = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        if !token.is_empty() {
            cards.push(token.parse()?);
        }
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_value_round_trip() {
        for r in Rank::ALL {
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert!(Rank::from_str("1").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace.to_string(), "As");
        assert_eq!("As".parse::<Card>().unwrap(), ace);
        assert_eq!("10d".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("ah".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert!("Ax".parse::<Card>().is_err());
        assert!("s".parse::<Card>().is_err());
        assert!("14c".parse::<Card>().is_err());
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        let mut cards = parse_cards("Kd Ah As").unwrap();
        cards.sort();
        let shown: Vec<String> = cards.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["Kd", "Ah", "As"]);
    }

    #[test]
    fn parse_many_cards() {
        let cards = parse_cards("As, Kd 10c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
        assert!(parse_cards("As Zz").is_err());
    }
}
