// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker hand category, from the weakest to the strongest.
///
/// The discriminant is the category rank, from 1 for a high card to 10 for a
/// royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no straight, no flush.
    HighCard = 1,
    /// Two cards with the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, including the A-2-3-4-5 wheel.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category rank, 1 for a high card to 10 for a royal flush.
    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}
