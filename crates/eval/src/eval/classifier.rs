// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use riverhand_cards::Card;

use super::{EvalError, HandCategory};

/// The number of cards in a classified hand.
pub const HAND_SIZE: usize = 5;

/// Sorted strengths of the A-2-3-4-5 straight, the ace strength breaks the
/// consecutive ranks check.
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Sorted strengths of a ten to ace straight.
const ROYAL: [u8; HAND_SIZE] = [10, 11, 12, 13, 14];

/// Returns the category of a 5 cards hand.
///
/// Returns an error if the hand doesn't have exactly 5 cards, duplicate cards
/// are not checked.
pub fn classify(hand: &[Card]) -> Result<HandCategory, EvalError> {
    let hand = <&[Card; HAND_SIZE]>::try_from(hand).map_err(|_| EvalError::InvalidInputSize {
        expected: HAND_SIZE,
        actual: hand.len(),
    })?;

    Ok(classify_hand(hand))
}

fn classify_hand(hand: &[Card; HAND_SIZE]) -> HandCategory {
    let mut strengths = hand.map(|c| c.rank().strength());
    strengths.sort_unstable();

    let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
    let is_straight = strengths.windows(2).all(|w| w[1] == w[0] + 1) || strengths == WHEEL;
    let is_royal = strengths == ROYAL;

    match count_pattern(&strengths) {
        _ if is_flush && is_royal => HandCategory::RoyalFlush,
        _ if is_flush && is_straight => HandCategory::StraightFlush,
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2, ..] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if is_straight => HandCategory::Straight,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    }
}

/// Returns the number of cards for each distinct rank sorted in descending
/// order and padded with zeros, e.g. [3, 2, 0, 0, 0] for a full house.
fn count_pattern(strengths: &[u8; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut counts = [0u8; 15];
    for &s in strengths {
        counts[s as usize] += 1;
    }

    let mut pattern = [0u8; HAND_SIZE];
    for (slot, &count) in pattern.iter_mut().zip(counts.iter().filter(|&&c| c > 0)) {
        *slot = count;
    }

    pattern.sort_unstable_by(|a, b| b.cmp(a));
    pattern
}
