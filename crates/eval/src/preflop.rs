// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop starting hands evaluation.
//!
//! Starting hands are identified by their canonical [HandNotation], two ranks
//! from high to low followed by `s` for suited or `o` for offsuit hands, pairs
//! have no suffix:
//!
//! ```
//! # use sharkeye_eval::{Card, preflop::HandNotation};
//! let hole = ["As".parse::<Card>().unwrap(), "Kh".parse().unwrap()];
//! assert_eq!(HandNotation::new(hole[0], hole[1]).to_string(), "AKo");
//! ```
//!
//! The notation is used to look up three static tables: a strength ranking of
//! 50 traditionally strong hands, a chart with the suggested action, and the
//! heads-up win percentage used by the equity estimate.
use ahash::AHashMap;
use serde::Serialize;
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::{Card, Rank, Suit, error::EvalError, hand::HandCategory, snapshot::Position};

/// A canonical starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct HandNotation {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl HandNotation {
    /// The notation for two hole cards, in any order.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self::from_ranks(c1.rank(), c2.rank(), c1.suit() == c2.suit())
    }

    /// The notation for two ranks, a pair is never suited.
    pub fn from_ranks(r1: Rank, r2: Rank, suited: bool) -> Self {
        Self {
            high: r1.max(r2),
            low: r1.min(r2),
            suited: suited && r1 != r2,
        }
    }

    /// The highest rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lowest rank.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Checks if the two cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// Checks if the two cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Checks if the two ranks are adjacent.
    pub fn is_connected(&self) -> bool {
        self.high.value() - self.low.value() == 1
    }

    /// Two hole cards for this hand, the highest first.
    pub fn cards(&self) -> (Card, Card) {
        let low_suit = if self.suited { Suit::Spades } else { Suit::Hearts };
        (
            Card::new(self.high, Suit::Spades),
            Card::new(self.low, low_suit),
        )
    }
}

impl fmt::Display for HandNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match (self.is_pair(), self.suited) {
            (true, _) => "",
            (false, true) => "s",
            (false, false) => "o",
        };

        write!(f, "{}{}{suffix}", self.high, self.low)
    }
}

impl From<HandNotation> for String {
    fn from(notation: HandNotation) -> Self {
        notation.to_string()
    }
}

impl FromStr for HandNotation {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvalError::InvalidNotation(s.to_string());

        let mut chars = s.trim().chars();
        let r1 = chars.next().ok_or_else(invalid)?;
        let r2 = chars.next().ok_or_else(invalid)?;
        let r1 = Rank::from_char(r1).map_err(|_| invalid())?;
        let r2 = Rank::from_char(r2).map_err(|_| invalid())?;

        let suited = match (chars.next(), chars.next()) {
            (None, _) if r1 == r2 => false,
            (Some('s' | 'S'), None) if r1 != r2 => true,
            (Some('o' | 'O'), None) if r1 != r2 => false,
            _ => return Err(invalid()),
        };

        Ok(Self::from_ranks(r1, r2, suited))
    }
}

/// Hands strength ranking, lower is stronger.
#[rustfmt::skip]
const RANKINGS_TABLE: [(&str, u8); 50] = [
    ("AA", 1), ("KK", 2), ("QQ", 3), ("JJ", 4), ("TT", 5), ("99", 6), ("88", 7), ("77", 8),
    ("AKs", 9), ("AQs", 10), ("AJs", 11), ("ATs", 12), ("A9s", 13), ("A8s", 14), ("A7s", 15),
    ("AKo", 16), ("AQo", 17), ("AJo", 18), ("ATo", 19), ("A9o", 20), ("A8o", 21), ("A7o", 22),
    ("KQs", 23), ("KJs", 24), ("KTs", 25), ("KQo", 26), ("KJo", 27), ("KTo", 28),
    ("QJs", 29), ("QTs", 30), ("QJo", 31), ("QTo", 32),
    ("JTs", 33), ("JTo", 34), ("T9s", 35), ("T9o", 36),
    ("98s", 37), ("98o", 38), ("87s", 39), ("87o", 40),
    ("76s", 41), ("76o", 42), ("65s", 43), ("65o", 44),
    ("54s", 45), ("54o", 46), ("43s", 47), ("43o", 48),
    ("32s", 49), ("32o", 50),
];

/// The ranking for hands that are not in the rankings table.
pub const DEFAULT_RANKING: u8 = 100;

/// The highest ranking in the rankings table.
const MAX_RANKING: u8 = 50;

/// Heads-up win percentages.
#[rustfmt::skip]
const WIN_PERCENTAGES_TABLE: [(&str, f64); 67] = [
    // Pairs
    ("AA", 85.3), ("KK", 82.4), ("QQ", 79.9), ("JJ", 77.2), ("TT", 74.6),
    ("99", 71.7), ("88", 68.8), ("77", 65.9), ("66", 62.9), ("55", 59.9),
    ("44", 56.9), ("33", 53.9), ("22", 50.9),
    // Suited broadway
    ("AKs", 67.0), ("AQs", 66.4), ("AJs", 65.4), ("ATs", 64.4), ("A9s", 63.4),
    ("KQs", 63.4), ("KJs", 62.4), ("KTs", 61.4), ("QJs", 61.4), ("QTs", 60.4),
    ("JTs", 59.4),
    // Offsuit broadway
    ("AKo", 65.4), ("AQo", 64.9), ("AJo", 63.9), ("ATo", 62.9), ("A9o", 61.9),
    ("KQo", 61.9), ("KJo", 60.9), ("KTo", 59.9), ("QJo", 59.9), ("QTo", 58.9),
    ("JTo", 57.9),
    // Suited connectors
    ("T9s", 58.4), ("98s", 57.4), ("87s", 56.4), ("76s", 55.4), ("65s", 54.4),
    ("54s", 53.4), ("43s", 52.4), ("32s", 51.4),
    // Offsuit connectors
    ("T9o", 56.9), ("98o", 55.9), ("87o", 54.9), ("76o", 53.9), ("65o", 52.9),
    ("54o", 51.9), ("43o", 50.9), ("32o", 49.9),
    // Suited one-gappers
    ("J9s", 57.4), ("T8s", 56.4), ("97s", 55.4), ("86s", 54.4), ("75s", 53.4),
    ("64s", 52.4), ("53s", 51.4), ("42s", 50.4),
    // Offsuit one-gappers
    ("J9o", 55.9), ("T8o", 54.9), ("97o", 53.9), ("86o", 52.9), ("75o", 51.9),
    ("64o", 50.9), ("53o", 49.9), ("42o", 48.9),
];

/// The win percentage for hands that are not in the win percentages table.
pub const DEFAULT_WIN_PERCENTAGE: f64 = 50.0;

/// Chart hands that are not a fold.
#[rustfmt::skip]
const CHART_TABLE: [(&str, ChartTier); 77] = {
    use ChartTier::*;
    [
        // Raise from any position.
        ("AA", StrongRaise), ("KK", StrongRaise), ("QQ", StrongRaise), ("JJ", StrongRaise),
        ("TT", StrongRaise), ("99", StrongRaise), ("88", StrongRaise), ("77", StrongRaise),
        ("AKs", StrongRaise), ("AQs", StrongRaise), ("AJs", StrongRaise), ("ATs", StrongRaise),
        ("KQs", StrongRaise), ("KJs", StrongRaise), ("KTs", StrongRaise),
        ("QJs", StrongRaise), ("QTs", StrongRaise), ("JTs", StrongRaise), ("J9s", StrongRaise),
        ("T9s", StrongRaise),
        ("AKo", StrongRaise), ("AQo", StrongRaise), ("AJo", StrongRaise), ("ATo", StrongRaise),
        ("KQo", StrongRaise), ("KJo", StrongRaise),
        // Raise or call from middle and late position.
        ("66", RaiseOrCall), ("55", RaiseOrCall),
        ("A9s", RaiseOrCall), ("A8s", RaiseOrCall), ("A7s", RaiseOrCall), ("A6s", RaiseOrCall),
        ("K9s", RaiseOrCall), ("Q9s", RaiseOrCall), ("Q8s", RaiseOrCall), ("J8s", RaiseOrCall),
        ("T8s", RaiseOrCall), ("98s", RaiseOrCall),
        ("KTo", RaiseOrCall), ("QJo", RaiseOrCall), ("QTo", RaiseOrCall), ("JTo", RaiseOrCall),
        // Call from late position.
        ("44", SpeculativeCall), ("33", SpeculativeCall), ("22", SpeculativeCall),
        ("A5s", SpeculativeCall), ("A4s", SpeculativeCall), ("A3s", SpeculativeCall),
        ("A2s", SpeculativeCall), ("K8s", SpeculativeCall), ("K7s", SpeculativeCall),
        ("K6s", SpeculativeCall), ("K5s", SpeculativeCall), ("K4s", SpeculativeCall),
        ("K3s", SpeculativeCall), ("K2s", SpeculativeCall), ("J7s", SpeculativeCall),
        ("T7s", SpeculativeCall), ("97s", SpeculativeCall), ("96s", SpeculativeCall),
        ("87s", SpeculativeCall), ("86s", SpeculativeCall), ("76s", SpeculativeCall),
        ("75s", SpeculativeCall), ("65s", SpeculativeCall), ("54s", SpeculativeCall),
        ("A9o", SpeculativeCall), ("A8o", SpeculativeCall), ("A7o", SpeculativeCall),
        ("Q9o", SpeculativeCall), ("J9o", SpeculativeCall), ("J8o", SpeculativeCall),
        ("T9o", SpeculativeCall), ("T8o", SpeculativeCall), ("98o", SpeculativeCall),
        ("97o", SpeculativeCall), ("87o", SpeculativeCall),
    ]
};

static RANKINGS: LazyLock<AHashMap<HandNotation, u8>> =
    LazyLock::new(|| notation_map(&RANKINGS_TABLE));

static WIN_PERCENTAGES: LazyLock<AHashMap<HandNotation, f64>> =
    LazyLock::new(|| notation_map(&WIN_PERCENTAGES_TABLE));

static CHART: LazyLock<AHashMap<HandNotation, ChartTier>> =
    LazyLock::new(|| notation_map(&CHART_TABLE));

/// Builds a lookup map from a static table, the keys must be canonical.
fn notation_map<V: Copy>(table: &[(&str, V)]) -> AHashMap<HandNotation, V> {
    table
        .iter()
        .filter_map(|(key, value)| key.parse().ok().map(|n| (n, *value)))
        .collect()
}

/// The strength ranking for a hand, [DEFAULT_RANKING] for unranked hands.
pub fn ranking(notation: HandNotation) -> u8 {
    RANKINGS.get(&notation).copied().unwrap_or(DEFAULT_RANKING)
}

/// The heads-up win percentage for a hand, [DEFAULT_WIN_PERCENTAGE] for hands
/// not in the table.
pub fn win_percentage(notation: HandNotation) -> f64 {
    WIN_PERCENTAGES.get(&notation).copied().unwrap_or(DEFAULT_WIN_PERCENTAGE)
}

/// The chart suggestion for a hand.
pub fn chart_suggestion(notation: HandNotation) -> ChartSuggestion {
    let tier = CHART.get(&notation).copied().unwrap_or(ChartTier::Fold);

    ChartSuggestion { notation, tier }
}

/// A preflop chart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartTier {
    /// Raise from any position.
    StrongRaise,
    /// Raise or call from middle or late position.
    RaiseOrCall,
    /// Call from late position.
    SpeculativeCall,
    /// Fold.
    Fold,
}

impl ChartTier {
    /// The action to display.
    pub fn action(&self) -> &'static str {
        match self {
            ChartTier::StrongRaise => "Raise (Any Position)",
            ChartTier::RaiseOrCall => "Raise/Call (Mid/Late)",
            ChartTier::SpeculativeCall => "Call (Late)",
            ChartTier::Fold => "Fold",
        }
    }

    /// The chart color for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            ChartTier::StrongRaise => "red",
            ChartTier::RaiseOrCall => "yellow",
            ChartTier::SpeculativeCall => "blue",
            ChartTier::Fold => "green",
        }
    }
}

impl fmt::Display for ChartTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// The chart action for a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSuggestion {
    /// The hand looked up in the chart.
    pub notation: HandNotation,
    /// The suggested action.
    pub tier: ChartTier,
}

/// A starting hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreflopCategory {
    /// Two cards with the same rank.
    Pair,
    /// Two cards with adjacent ranks.
    Connectors,
    /// Two cards ten or higher.
    Broadway,
    /// Two cards of the same suit.
    Suited,
    /// Anything else.
    HighCard,
}

impl PreflopCategory {
    /// The category of a starting hand.
    pub fn new(notation: HandNotation) -> Self {
        if notation.is_pair() {
            PreflopCategory::Pair
        } else if notation.is_connected() {
            PreflopCategory::Connectors
        } else if notation.low() >= Rank::Ten {
            PreflopCategory::Broadway
        } else if notation.is_suited() {
            PreflopCategory::Suited
        } else {
            PreflopCategory::HighCard
        }
    }
}

/// The evaluation of a starting hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreflopEvaluation {
    /// The hand notation.
    pub notation: HandNotation,
    /// The hand category.
    pub category: PreflopCategory,
    /// The table ranking, lower is stronger.
    pub ranking: u8,
    /// The ranking normalized and adjusted for position and players.
    pub score: f64,
    /// The chart suggestion.
    pub chart: ChartSuggestion,
    /// The number of players used for the adjustment.
    pub player_count: u8,
    /// The position used for the adjustment.
    pub position: Position,
    /// A description for display.
    pub description: String,
}

/// Evaluates two hole cards for the given table size and position.
pub fn evaluate(hole: [Card; 2], player_count: u8, position: Position) -> PreflopEvaluation {
    let notation = HandNotation::new(hole[0], hole[1]);
    let category = PreflopCategory::new(notation);
    let ranking = ranking(notation);

    let normalized = f64::from(ranking) / f64::from(MAX_RANKING);
    let penalty = HandCategory::Pair.strength_adjustment(player_count);
    let mut score = normalized * position.multiplier() + penalty;
    if category == PreflopCategory::Connectors && notation.is_suited() {
        score *= 1.2;
    }

    let label = match category {
        PreflopCategory::Pair => format!("Pair of {}s", notation.high()),
        PreflopCategory::Connectors if notation.is_suited() => {
            format!("Suited Connectors {notation}")
        }
        PreflopCategory::Connectors => format!("Connectors {notation}"),
        PreflopCategory::Broadway => format!("Broadway {notation}"),
        PreflopCategory::Suited => format!("Suited {notation}"),
        PreflopCategory::HighCard => notation.to_string(),
    };

    PreflopEvaluation {
        notation,
        category,
        ranking,
        score,
        chart: chart_suggestion(notation),
        player_count,
        position,
        description: format!("{label} ({:.0}% strength)", (score * 100.0).round()),
    }
}
