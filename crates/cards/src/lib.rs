// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverhand Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use riverhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type for shuffling, dealing, and iterating cards in the deck, and
//! the [combos] module to enumerate the k-subsets of any slice, for example to
//! iterate through the 21 five cards hands of a seven cards hand:
//!
//! ```
//! # use riverhand_cards::{combos::Combinations, Deck};
//! let cards = Deck::default().into_iter().take(7).collect::<Vec<_>>();
//! assert_eq!(Combinations::new(&cards, 5).count(), 21);
//! ```
//!
//! To iterate through all 5 cards hands in a deck without allocating:
//!
//! ```
//! # use riverhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

pub mod combos;

mod deck;
pub use deck::Deck;
