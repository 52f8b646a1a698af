// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io;

use riverhand_eval::{Card, HandCategory, best_hand_with_cards, classify};

use crate::{
    labels::{Lang, label},
    session::Session,
};

/// Deal command configuration.
#[derive(Debug, Clone)]
pub struct DealConfig {
    /// Number of hands to deal.
    pub hands: usize,
    /// The seed for the deck shuffling, a random seed is used if None.
    pub seed: Option<u64>,
    /// Labels language.
    pub lang: Lang,
}

/// Deals the configured number of hands, revealing the board one card at a
/// time, and prints the best hand after the last board card.
pub fn run_deals(w: &mut impl io::Write, config: &DealConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("Dealing {} hands with seed {seed}", config.hands);

    let mut rng = StdRng::seed_from_u64(seed);
    for n in 1..=config.hands {
        let mut session = Session::deal(&mut rng)?;

        writeln!(w, "Hand {n}")?;
        writeln!(w, "Player: {}", format_cards(session.hole_cards()))?;
        print_board(w, &session)?;

        while let Some(reveal) = session.reveal()? {
            debug!("Hand {n} revealed {}", reveal.card);
            print_board(w, &session)?;

            if let Some(category) = reveal.best {
                print_category(w, category, config.lang)?;
            }
        }

        writeln!(w)?;
    }

    Ok(())
}

/// Evaluates the given cards, a 5 cards hand is classified and for 7 cards the
/// best hand is selected.
pub fn run_eval(w: &mut impl io::Write, cards: &[Card], lang: Lang) -> Result<()> {
    if cards.len() == 5 {
        print_category(w, classify(cards)?, lang)?;
    } else {
        let best = best_hand_with_cards(cards)?;
        print_category(w, best.category, lang)?;
        writeln!(w, "Best cards: {}", format_cards(&best.cards))?;
    }

    Ok(())
}

fn print_board(w: &mut impl io::Write, session: &Session) -> Result<()> {
    let mut board = format_cards(session.revealed());
    for _ in 0..session.hidden() {
        if !board.is_empty() {
            board.push(' ');
        }

        board.push_str("[]");
    }

    writeln!(w, "Board:  {board}")?;
    Ok(())
}

fn print_category(w: &mut impl io::Write, category: HandCategory, lang: Lang) -> Result<()> {
    writeln!(w, "{}{}", lang.result_prefix(), label(category, lang))?;
    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank(), c.suit().symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}
