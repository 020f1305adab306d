// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a card, rank, or suit from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The card text was empty.
    #[error("empty card text")]
    Empty,
    /// The rank text is not one of 2-9, T (or 10), J, Q, K, A.
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
    /// The suit text is not one of s, h, d, c or a suit symbol.
    #[error("invalid suit {0:?}")]
    InvalidSuit(String),
}

/// A Poker card.
///
/// Cards are ordered by rank first and suit second, a sorted list of cards is
/// therefore independent of the order the cards were collected in.
///
/// A card serializes to its two characters text form, i.e. `"AS"`, and can be
/// parsed from the forms used by most tables and hand histories:
///
/// ```
/// # use sharkeye_cards::{Card, Rank, Suit};
/// let ts: Card = "10s".parse().unwrap();
/// assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
/// assert_eq!("T♠".parse::<Card>().unwrap(), ts);
/// assert_eq!(ts.to_string(), "TS");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        let (rank, suit) = match s.strip_prefix("10") {
            Some(suit) => (Rank::Ten, suit),
            None => {
                let mut chars = s.chars();
                let rank = chars.next().ok_or(ParseCardError::Empty)?;
                (Rank::from_char(rank)?, chars.as_str())
            }
        };

        Ok(Card::new(rank, suit.parse()?))
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Parses a rank from its single character form.
    pub fn from_char(c: char) -> Result<Rank, ParseCardError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(c.to_string())),
        };

        Ok(rank)
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "10" {
            return Ok(Rank::Ten);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            (None, _) => Err(ParseCardError::Empty),
            _ => Err(ParseCardError::InvalidRank(s.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit name, i.e. "Spades".
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Parses a suit from a letter or a suit symbol.
    pub fn from_char(c: char) -> Result<Suit, ParseCardError> {
        let suit = match c.to_ascii_lowercase() {
            'c' | '♣' | '♧' => Suit::Clubs,
            'd' | '♦' | '♢' => Suit::Diamonds,
            'h' | '♥' | '♡' => Suit::Hearts,
            's' | '♠' | '♤' => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(c.to_string())),
        };

        Ok(suit)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_char(c),
            _ => Err(ParseCardError::InvalidSuit(s.to_string())),
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with all the cards that are not in `known`.
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !known.contains(c));
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure `count` times with k distinct cards sampled
    /// uniformly without replacement.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, count: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        for _ in 0..count {
            for (pos, c) in self.cards.choose_multiple(rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h[0..k]);
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Positions of the current k-subset, advanced in lexicographic order.
        let n = self.cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut h = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&h);

            let Some(pos) = (0..k).rev().find(|&p| idx[p] != p + n - k) else {
                break;
            };

            idx[pos] += 1;
            for p in (pos + 1)..k {
                idx[p] = idx[p - 1] + 1;
            }

            for p in pos..k {
                h[p] = self.cards[idx[p]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_has_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!("KD".parse::<Card>(), Ok(kd));
        assert_eq!("kd".parse::<Card>(), Ok(kd));
        assert_eq!(" K♦ ".parse::<Card>(), Ok(kd));

        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("Th".parse::<Card>(), Ok(th));
        assert_eq!("10h".parse::<Card>(), Ok(th));
        assert_eq!("10♥".parse::<Card>(), Ok(th));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1h".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("".to_string()))
        );
        assert_eq!(
            "Ahh".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("hh".to_string()))
        );
    }

    #[test]
    fn rank_and_suit_from_string() {
        assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
        assert_eq!("q".parse::<Rank>(), Ok(Rank::Queen));
        assert_eq!("".parse::<Rank>(), Err(ParseCardError::Empty));
        assert!("11".parse::<Rank>().is_err());

        assert_eq!("♣".parse::<Suit>(), Ok(Suit::Clubs));
        assert_eq!("S".parse::<Suit>(), Ok(Suit::Spades));
        assert!("spades".parse::<Suit>().is_err());
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"QC\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Card>("\"ZC\"").is_err());
    }

    #[test]
    fn card_ordering() {
        let mut cards = vec![
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        cards.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Spades),
            ]
        );
    }

    #[test]
    fn deck_without() {
        let known = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Hearts),
        ];
        let deck = Deck::without(&known);
        assert_eq!(deck.count(), Deck::SIZE - 3);
        assert!(known.iter().all(|c| !deck.cards().contains(c)));
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::without(&[Card::new(Rank::Ace, Suit::Spades)]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut count = 0;
        deck.sample(&mut rng, 500, 2, |cards| {
            assert_eq!(cards.len(), 2);
            assert_ne!(cards[0], cards[1]);
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Spades)));
            count += 1;
        });
        assert_eq!(count, 500);
    }

    #[test]
    fn deck_sample_is_reproducible() {
        let deck = Deck::default();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut hands = Vec::new();
            deck.sample(&mut rng, 20, 5, |cards| hands.push(cards.to_vec()));
            hands
        };

        assert_eq!(draw(7), draw(7));
        assert_ne!(draw(7), draw(8));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);
    }
}
