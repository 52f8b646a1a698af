// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal session.
use anyhow::{Context, Result};
use rand::Rng;

use riverhand_eval::{Card, Deck, HandCategory, best_hand};

/// Number of player cards.
pub const HOLE_CARDS: usize = 2;

/// Number of board cards.
pub const BOARD_CARDS: usize = 5;

/// A single deal, the player cards and the board cards revealed one at a time.
#[derive(Debug)]
pub struct Session {
    hole: [Card; HOLE_CARDS],
    board: [Card; BOARD_CARDS],
    revealed: usize,
}

/// A board card that has been turned face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// The revealed card.
    pub card: Card,
    /// The best hand, set when the last board card is revealed.
    pub best: Option<HandCategory>,
}

impl Session {
    /// Shuffles a new deck and deals the player and the board cards, all board
    /// cards start face down.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new_and_shuffled(rng);
        let mut deal = || deck.deal().context("Not enough cards in the deck");

        let hole = [deal()?, deal()?];
        let board = [deal()?, deal()?, deal()?, deal()?, deal()?];

        Ok(Self {
            hole,
            board,
            revealed: 0,
        })
    }

    /// The player cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// The board cards revealed so far.
    pub fn revealed(&self) -> &[Card] {
        &self.board[..self.revealed]
    }

    /// The number of board cards still face down.
    pub fn hidden(&self) -> usize {
        BOARD_CARDS - self.revealed
    }

    /// Checks if all board cards have been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed == BOARD_CARDS
    }

    /// Reveals the next board card, after the last card is revealed the reveal
    /// contains the best hand for the player and board cards.
    ///
    /// Returns None if all board cards have been revealed.
    pub fn reveal(&mut self) -> Result<Option<Reveal>> {
        if self.is_complete() {
            return Ok(None);
        }

        let card = self.board[self.revealed];
        self.revealed += 1;

        let best = if self.is_complete() {
            let cards = [self.hole.as_slice(), self.board.as_slice()].concat();
            Some(best_hand(&cards)?)
        } else {
            None
        };

        Ok(Some(Reveal { card, best }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn reveal_board() {
        let mut session = Session::deal(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(session.hole_cards().len(), 2);
        assert!(session.revealed().is_empty());
        assert_eq!(session.hidden(), 5);

        for n in 1..=4 {
            let reveal = session.reveal().unwrap().unwrap();
            assert_eq!(reveal.best, None);
            assert_eq!(session.revealed().len(), n);
            assert_eq!(session.revealed()[n - 1], reveal.card);
            assert_eq!(session.hidden(), 5 - n);
            assert!(!session.is_complete());
        }

        let reveal = session.reveal().unwrap().unwrap();
        assert!(session.is_complete());

        let cards = [session.hole_cards(), session.revealed()].concat();
        assert_eq!(reveal.best, Some(best_hand(&cards).unwrap()));

        // Nothing left to reveal.
        assert_eq!(session.reveal().unwrap(), None);
        assert_eq!(session.revealed().len(), 5);
    }

    #[test]
    fn deal_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let mut session = Session::deal(&mut rng).unwrap();
            while session.reveal().unwrap().is_some() {}

            let cards = session
                .hole_cards()
                .iter()
                .chain(session.revealed())
                .collect::<HashSet<_>>();
            assert_eq!(cards.len(), 7);
        }
    }

    #[test]
    fn seeded_deal() {
        let s1 = Session::deal(&mut StdRng::seed_from_u64(3)).unwrap();
        let s2 = Session::deal(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(s1.hole_cards(), s2.hole_cards());
        assert_eq!(s1.board, s2.board);
    }
}
