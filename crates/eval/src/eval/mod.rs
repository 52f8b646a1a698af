// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [classify] function that computes the category of a 5 cards
//! hand, and a [best_hand] function that computes the best category out of
//! the 21 five cards hands of a 7 cards hand. The [best_hand_with_cards]
//! variant also returns the five cards that make the best hand, useful for
//! UIs to show a winning hand.
//!
//! Hands are only ranked by category, there is no ordering between hands with
//! the same category.
use thiserror::Error;

mod category;
pub use category::HandCategory;

mod classifier;
pub use classifier::{HAND_SIZE, classify};

mod selector;
pub use selector::{BestHand, SEVEN_CARDS, best_hand, best_hand_with_cards};

/// Hand evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have the expected number of cards.
    #[error("invalid input size: expected {expected} cards, got {actual}")]
    InvalidInputSize {
        /// The number of cards required.
        expected: usize,
        /// The number of cards passed in.
        actual: usize,
    },
}
