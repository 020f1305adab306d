// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand classification.
//!
//! The classifier takes 5, 6, or 7 cards and returns the best five cards hand
//! as an [EvaluatedHand] with its [HandCategory], the cards that make the
//! category, the kickers, and a description for display:
//!
//! ```
//! # use sharkeye_eval::{Card, hand::{classify, HandCategory}};
//! let cards = ["5d", "5c", "5h", "2s", "2c", "9d", "Kh"]
//!     .iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let hand = classify(&cards).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! assert_eq!(hand.description(), "Full House, 5s over 2s");
//! ```
//!
//! Categories are checked from the strongest to the weakest and the first
//! match wins, so that a weaker category is never considered once a stronger
//! one has been found. The result depends only on the set of cards and not on
//! their order.
use serde::Serialize;
use std::fmt;

use crate::{
    Card, Rank,
    error::{EvalError, check_unique},
};

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandCategory {
    /// No pair.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

/// Strength adjustment by category for 2..=9 players, each row is indexed by
/// `player_count - 2`.
///
/// The reference table only covers 2..=8 players. The 9 players column is
/// extrapolated by continuing each row with -0.1, the high card row stays at
/// its -1.0 floor.
const STRENGTH_ADJUSTMENTS: [[f64; 8]; HandCategory::COUNT] = [
    [-0.3, -0.5, -0.7, -0.8, -0.9, -1.0, -1.0, -1.0],
    [-0.2, -0.3, -0.4, -0.5, -0.6, -0.7, -0.8, -0.9],
    [-0.1, -0.2, -0.3, -0.4, -0.5, -0.6, -0.7, -0.8],
    [0.0, -0.1, -0.2, -0.3, -0.4, -0.5, -0.6, -0.7],
    [0.1, 0.0, -0.1, -0.2, -0.3, -0.4, -0.5, -0.6],
    [0.2, 0.1, 0.0, -0.1, -0.2, -0.3, -0.4, -0.5],
    [0.3, 0.2, 0.1, 0.0, -0.1, -0.2, -0.3, -0.4],
    [0.4, 0.3, 0.2, 0.1, 0.0, -0.1, -0.2, -0.3],
    [0.5, 0.4, 0.3, 0.2, 0.1, 0.0, -0.1, -0.2],
    [0.6, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0, -0.1],
];

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category ordinal, 1 for high card up to 10 for a royal flush.
    pub fn ordinal(&self) -> u8 {
        *self as u8 + 1
    }

    /// The category name, i.e. "three-of-a-kind".
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high-card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two-pair",
            HandCategory::ThreeOfAKind => "three-of-a-kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full-house",
            HandCategory::FourOfAKind => "four-of-a-kind",
            HandCategory::StraightFlush => "straight-flush",
            HandCategory::RoyalFlush => "royal-flush",
        }
    }

    /// The strength adjustment for the number of players at the table.
    ///
    /// Player counts outside 2..=9 use the nearest column.
    pub fn strength_adjustment(&self, player_count: u8) -> f64 {
        let col = player_count.clamp(2, 9) as usize - 2;
        STRENGTH_ADJUSTMENTS[*self as usize][col]
    }

    /// The category ordinal adjusted for the number of players.
    pub fn strength(&self, player_count: u8) -> f64 {
        f64::from(self.ordinal()) + self.strength_adjustment(player_count)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five cards hand found in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: Vec<Card>,
    kickers: Vec<Card>,
    description: String,
}

impl EvaluatedHand {
    fn new(
        category: HandCategory,
        cards: Vec<Card>,
        kickers: Vec<Card>,
        description: String,
    ) -> Self {
        Self {
            category,
            cards,
            kickers,
            description,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards that make the category, the strongest first.
    ///
    /// These are all five cards for straights, flushes, and full houses, the
    /// grouped cards for pairs, trips, and quads, and the top card for a high
    /// card hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The kickers, the strongest first.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// A description for display, i.e. "Two Pair, Ks and 9s".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The best five cards, the category cards followed by the kickers.
    pub fn best_five(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().chain(self.kickers.iter()).copied()
    }

    /// The rank of the main group for pair, two pair, trips, full house, and
    /// quads hands.
    pub fn paired_rank(&self) -> Option<Rank> {
        match self.category {
            HandCategory::Pair
            | HandCategory::TwoPair
            | HandCategory::ThreeOfAKind
            | HandCategory::FullHouse
            | HandCategory::FourOfAKind => self.cards.first().map(|c| c.rank()),
            _ => None,
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Classifies the best five cards hand out of 5, 6, or 7 distinct cards.
pub fn classify(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidCardCount {
            expected: "5 to 7",
            found: cards.len(),
        });
    }

    check_unique(cards)?;

    let groups = Groups::new(cards);
    let hand = RULES
        .iter()
        .find_map(|rule| rule(&groups))
        .unwrap_or_else(|| high_card(&groups));

    Ok(hand)
}

/// A classifier rule, returns a hand if the cards make the rule category.
type Rule = fn(&Groups) -> Option<EvaluatedHand>;

/// Rules from the strongest to the weakest category, high card is the fallback.
const RULES: [Rule; 8] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
];

/// Cards partitioned by rank and by suit.
struct Groups {
    /// All the cards, highest rank first and ties broken by suit.
    sorted: Vec<Card>,
    /// Cards with the same rank, highest rank first.
    ranks: Vec<Vec<Card>>,
    /// Cards with the same suit indexed by suit, each highest first.
    suits: [Vec<Card>; 4],
}

impl Groups {
    fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut ranks: Vec<Vec<Card>> = Vec::with_capacity(sorted.len());
        let mut suits: [Vec<Card>; 4] = Default::default();
        for &card in &sorted {
            match ranks.last_mut() {
                Some(group) if group[0].rank() == card.rank() => group.push(card),
                _ => ranks.push(vec![card]),
            }

            suits[card.suit() as usize].push(card);
        }

        Self {
            sorted,
            ranks,
            suits,
        }
    }

    /// Rank groups with at least `size` cards, highest rank first.
    fn ranks_with(&self, size: usize) -> impl Iterator<Item = &[Card]> {
        self.ranks
            .iter()
            .filter(move |g| g.len() >= size)
            .map(Vec::as_slice)
    }

    /// The cards of a suit with at least five cards.
    fn flush_suit(&self) -> Option<&[Card]> {
        self.suits
            .iter()
            .find(|s| s.len() >= 5)
            .map(Vec::as_slice)
    }

    /// The `count` highest cards with a rank not in `exclude`.
    fn kickers(&self, exclude: &[Rank], count: usize) -> Vec<Card> {
        self.sorted
            .iter()
            .filter(|c| !exclude.contains(&c.rank()))
            .take(count)
            .copied()
            .collect()
    }
}

/// Finds the highest straight in cards sorted highest first.
///
/// Returns the five cards from the top of the straight down, the wheel is
/// returned as 5, 4, 3, 2, A.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut unique: Vec<Card> = Vec::with_capacity(sorted.len());
    for &card in sorted {
        if unique.last().is_none_or(|u| u.rank() != card.rank()) {
            unique.push(card);
        }
    }

    if let Some(window) = unique
        .windows(5)
        .find(|w| w[0].rank().value() - w[4].rank().value() == 4)
    {
        return Some(window.to_vec());
    }

    // The wheel, with the ace playing low.
    let n = unique.len();
    if n >= 5 && unique[0].rank() == Rank::Ace {
        let low = &unique[n - 4..];
        let wheel = [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];
        if low.iter().map(|c| c.rank()).eq(wheel) {
            let mut cards = low.to_vec();
            cards.push(unique[0]);
            return Some(cards);
        }
    }

    None
}

fn straight_flush(groups: &Groups) -> Option<EvaluatedHand> {
    let cards = groups.flush_suit().and_then(find_straight)?;
    let (top, bottom) = (cards[0].rank(), cards[4].rank());

    let hand = if top == Rank::Ace && bottom == Rank::Ten {
        EvaluatedHand::new(
            HandCategory::RoyalFlush,
            cards,
            vec![],
            "Royal Flush".to_string(),
        )
    } else {
        EvaluatedHand::new(
            HandCategory::StraightFlush,
            cards,
            vec![],
            format!("Straight Flush, {top} high"),
        )
    };

    Some(hand)
}

fn four_of_a_kind(groups: &Groups) -> Option<EvaluatedHand> {
    let quads = groups.ranks_with(4).next()?;
    let rank = quads[0].rank();

    Some(EvaluatedHand::new(
        HandCategory::FourOfAKind,
        quads[..4].to_vec(),
        groups.kickers(&[rank], 1),
        format!("Four of a Kind, {rank}s"),
    ))
}

fn full_house(groups: &Groups) -> Option<EvaluatedHand> {
    let trips = groups.ranks_with(3).next()?;
    let pair = groups
        .ranks_with(2)
        .find(|g| g[0].rank() != trips[0].rank())?;

    let mut cards = trips[..3].to_vec();
    cards.extend_from_slice(&pair[..2]);

    Some(EvaluatedHand::new(
        HandCategory::FullHouse,
        cards,
        vec![],
        format!("Full House, {}s over {}s", trips[0].rank(), pair[0].rank()),
    ))
}

fn flush(groups: &Groups) -> Option<EvaluatedHand> {
    let suited = groups.flush_suit()?;
    let suit = suited[0].suit();

    Some(EvaluatedHand::new(
        HandCategory::Flush,
        suited[..5].to_vec(),
        vec![],
        format!("Flush, {}", suit.name()),
    ))
}

fn straight(groups: &Groups) -> Option<EvaluatedHand> {
    let cards = find_straight(&groups.sorted)?;
    let top = cards[0].rank();

    Some(EvaluatedHand::new(
        HandCategory::Straight,
        cards,
        vec![],
        format!("Straight, {top} high"),
    ))
}

fn three_of_a_kind(groups: &Groups) -> Option<EvaluatedHand> {
    let trips = groups.ranks_with(3).next()?;
    let rank = trips[0].rank();

    Some(EvaluatedHand::new(
        HandCategory::ThreeOfAKind,
        trips[..3].to_vec(),
        groups.kickers(&[rank], 2),
        format!("Three of a Kind, {rank}s"),
    ))
}

fn two_pair(groups: &Groups) -> Option<EvaluatedHand> {
    let mut pairs = groups.ranks_with(2);
    let (high, low) = (pairs.next()?, pairs.next()?);
    let ranks = [high[0].rank(), low[0].rank()];

    let mut cards = high[..2].to_vec();
    cards.extend_from_slice(&low[..2]);

    Some(EvaluatedHand::new(
        HandCategory::TwoPair,
        cards,
        groups.kickers(&ranks, 1),
        format!("Two Pair, {}s and {}s", ranks[0], ranks[1]),
    ))
}

fn pair(groups: &Groups) -> Option<EvaluatedHand> {
    let pair = groups.ranks_with(2).next()?;
    let rank = pair[0].rank();

    Some(EvaluatedHand::new(
        HandCategory::Pair,
        pair[..2].to_vec(),
        groups.kickers(&[rank], 3),
        format!("Pair of {rank}s"),
    ))
}

fn high_card(groups: &Groups) -> EvaluatedHand {
    let top = groups.sorted[0];

    EvaluatedHand::new(
        HandCategory::HighCard,
        vec![top],
        groups.sorted[1..].iter().take(4).copied().collect(),
        format!("High Card, {}", top.rank()),
    )
}
