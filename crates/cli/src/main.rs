// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Riverhand Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::io;

use riverhand_eval::Card;

pub mod labels;
pub mod session;
pub mod terminal;

use labels::Lang;
use terminal::DealConfig;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The hand labels language.
    #[arg(long, short, value_enum, default_value_t = Lang::En, global = true)]
    lang: Lang,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal the player and board cards and reveal the board one card at a time.
    Deal {
        /// Number of hands to deal.
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
        hands: u16,
        /// The seed used to shuffle the deck.
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Evaluate a 5 cards hand or the best hand out of 7 cards (e.g. AS KS QS JS TS 2H 3D).
    Eval {
        /// The cards to evaluate.
        #[arg(required = true)]
        cards: Vec<Card>,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Deal { hands, seed } => {
            let config = DealConfig {
                hands: hands as usize,
                seed,
                lang: cli.lang,
            };

            terminal::run_deals(&mut stdout, &config)
        }
        Command::Eval { cards } => terminal::run_eval(&mut stdout, &cards, cli.lang),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_eval_cards() {
        let cli = Cli::try_parse_from(["riverhand", "eval", "AS", "10h", "2♣"]).unwrap();
        assert_eq!(cli.lang, Lang::En);

        let Command::Eval { cards } = cli.command else {
            panic!("expected eval command");
        };

        let expected = ["AS", "TH", "2C"].map(|c| c.parse::<Card>().unwrap());
        assert_eq!(cards, expected);

        assert!(Cli::try_parse_from(["riverhand", "eval", "XX"]).is_err());
        assert!(Cli::try_parse_from(["riverhand", "eval"]).is_err());
    }

    #[test]
    fn parse_deal() {
        let args = ["riverhand", "deal", "-n", "3", "--seed", "9", "--lang", "ja"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.lang, Lang::Ja);

        let Command::Deal { hands, seed } = cli.command else {
            panic!("expected deal command");
        };

        assert_eq!(hands, 3);
        assert_eq!(seed, Some(9));

        assert!(Cli::try_parse_from(["riverhand", "deal", "-n", "0"]).is_err());
    }
}
