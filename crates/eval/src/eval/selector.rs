// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection out of 7 cards.
use log::trace;
use riverhand_cards::{Card, combos::Combinations};

use super::{EvalError, HAND_SIZE, HandCategory, classify};

/// The number of cards the best hand is selected from, two player cards and
/// five board cards.
pub const SEVEN_CARDS: usize = 7;

/// The best 5 cards hand out of 7 cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    /// The hand category.
    pub category: HandCategory,
    /// The five cards with this category, if more than one hand has the same
    /// category these are the first found.
    pub cards: Vec<Card>,
}

/// Returns the best category of all 5 cards hands out of 7 cards.
///
/// Returns an error if `cards` doesn't have exactly 7 cards.
pub fn best_hand(cards: &[Card]) -> Result<HandCategory, EvalError> {
    best_hand_with_cards(cards).map(|best| best.category)
}

/// Returns the best category of all 5 cards hands out of 7 cards and the
/// cards that make the hand.
///
/// Returns an error if `cards` doesn't have exactly 7 cards.
pub fn best_hand_with_cards(cards: &[Card]) -> Result<BestHand, EvalError> {
    if cards.len() != SEVEN_CARDS {
        return Err(EvalError::InvalidInputSize {
            expected: SEVEN_CARDS,
            actual: cards.len(),
        });
    }

    let mut best = BestHand {
        category: HandCategory::HighCard,
        cards: Vec::new(),
    };

    for hand in Combinations::new(cards, HAND_SIZE) {
        let category = classify(&hand)?;
        if best.cards.is_empty() || category > best.category {
            best = BestHand {
                category,
                cards: hand,
            };
        }
    }

    trace!("Best hand {} {:?}", best.category, best.cards);
    Ok(best)
}
