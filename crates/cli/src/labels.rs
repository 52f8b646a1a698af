// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories display labels.
use clap::ValueEnum;
use std::borrow::Cow;

use riverhand_eval::HandCategory;

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Japanese
    Ja,
}

impl Lang {
    /// The prefix for the player's hand result.
    pub fn result_prefix(&self) -> &'static str {
        match self {
            Lang::En => "Your hand: ",
            Lang::Ja => "あなたの役: ",
        }
    }
}

/// Returns the category label for the given language.
pub fn label(category: HandCategory, lang: Lang) -> Cow<'static, str> {
    match lang {
        Lang::En => Cow::Owned(category.to_string()),
        Lang::Ja => Cow::Borrowed(japanese(category)),
    }
}

fn japanese(category: HandCategory) -> &'static str {
    match category {
        HandCategory::RoyalFlush => "ロイヤルフラッシュ",
        HandCategory::StraightFlush => "ストレートフラッシュ",
        HandCategory::FourOfAKind => "フォーカード",
        HandCategory::FullHouse => "フルハウス",
        HandCategory::Flush => "フラッシュ",
        HandCategory::Straight => "ストレート",
        HandCategory::ThreeOfAKind => "スリーカード",
        HandCategory::TwoPair => "ツーペア",
        HandCategory::OnePair => "ワンペア",
        HandCategory::HighCard => "ハイカード",
    }
}
