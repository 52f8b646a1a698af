// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is an immutable pair of rank and suit, cards are cheap to copy and
/// can be used as hash keys.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank followed by a suit.
    #[error("invalid card {0:?}, expected a rank followed by a suit (e.g. AS, TH, 10D)")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid rank {0:?}")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit {0:?}")]
    Suit(char),
}

/// Parses a card as a rank followed by a suit, for example `AS`, `th`, `10D`
/// or `Q♥`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let chars = s.chars().collect::<Vec<_>>();

        let (rank, suit) = match chars.as_slice() {
            ['1', '0', suit] => (Rank::Ten, *suit),
            [rank, suit] => (Rank::from_char(*rank)?, *suit),
            _ => return Err(ParseCardError::Length(s.to_string())),
        };

        Ok(Card::new(rank, Suit::from_char(suit)?))
    }
}

/// Card rank.
///
/// The discriminant is the rank strength used by the evaluator, from 2 for a
/// deuce up to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank strength, 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    fn from_char(c: char) -> Result<Rank, ParseCardError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::Rank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
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
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no strength, the ordering is only used to sort cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    fn from_char(c: char) -> Result<Suit, ParseCardError> {
        let suit = match c.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            _ => return Err(ParseCardError::Suit(c)),
        };

        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("th".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("10C".parse(), Ok(Card::new(Rank::Ten, Suit::Clubs)));
        assert_eq!(" 2s ".parse(), Ok(Card::new(Rank::Deuce, Suit::Spades)));
        assert_eq!("A♠".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("Q♦".parse(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));

        assert_eq!("1S".parse::<Card>(), Err(ParseCardError::Rank('1')));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::Suit('X')));
        assert_eq!(
            "ASK".parse::<Card>(),
            Err(ParseCardError::Length("ASK".to_string()))
        );
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn rank_strength() {
        let strengths = Rank::ranks().map(|r| r.strength()).collect::<Vec<_>>();
        assert_eq!(strengths, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
    }
}
