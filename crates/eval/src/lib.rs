// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverhand Poker hand evaluator.
//!
//! Classifies 5 cards Poker hands into one of ten categories, and finds the
//! best category that can be made from 7 cards, the two player cards and the
//! five board cards, by classifying all the 21 five cards hands.
//!
//! ```
//! # use riverhand_eval::*;
//! let cards = ["AS", "KS", "QS", "JS", "TS", "2H", "3D"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(classify(&cards[2..])?, HandCategory::HighCard);
//! assert_eq!(best_hand(&cards)?, HandCategory::RoyalFlush);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, EvalError, HandCategory, best_hand, best_hand_with_cards, classify};

// Reexport cards types.
pub use riverhand_cards::{Card, Deck, Rank, Suit, combos};
