// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sharkeye Poker hand analysis engine.
//!
//! Given a table snapshot with the hero hole cards, the community cards, the
//! pot, the bet to call, and the number of players, the engine classifies the
//! best hand, evaluates starting hands with static preflop tables, counts the
//! drawing outs, computes pot and implied odds, and estimates the win
//! probability with a Monte Carlo simulation.
//!
//! The [Analyzer] runs all the components on a [GameSnapshot]:
//!
//! ```
//! # use sharkeye_eval::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//! };
//!
//! let snapshot = GameSnapshot::new(cards("9s 8s")?, cards("7s 6d 2c")?, 100, 25, 2)?;
//! let mut rng = StdRng::seed_from_u64(101);
//! let analysis = Analyzer::new(AnalyzerConfig::default()).analyze(&snapshot, &mut rng)?;
//!
//! assert_eq!(analysis.phase, Phase::Flop);
//! assert_eq!(analysis.pot_odds, 4.0);
//! assert_eq!(analysis.outs.total(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The simulation takes the random generator as a parameter, the same seed
//! gives the same analysis.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod analysis;
pub mod equity;
pub mod hand;
pub mod odds;
pub mod outs;
pub mod preflop;
pub mod snapshot;

mod error;
pub use error::EvalError;

pub use analysis::{Analysis, Analyzer, AnalyzerConfig, HandAnalysis};
pub use equity::{EquityMethod, EquityResult, EquitySimulator};
pub use hand::{EvaluatedHand, HandCategory, classify};
pub use snapshot::{GameSnapshot, Phase, Position, RawCard, RawSnapshot};

// Reexport cards types.
pub use sharkeye_cards::{Card, Deck, ParseCardError, Rank, Suit};
