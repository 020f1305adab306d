// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sharkeye Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use sharkeye_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use sharkeye_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 5-cards hands from a deck without the known cards,
//! the random generator is passed by the caller so that a seeded generator
//! reproduces the same hands:
//!
//! ```
//! # use sharkeye_cards::{Card, Deck};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let known = ["As".parse::<Card>().unwrap(), "Ks".parse().unwrap()];
//! let deck = Deck::without(&known);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut counter = 0;
//! deck.sample(&mut rng, 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     assert!(!hand.contains(&known[0]));
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
