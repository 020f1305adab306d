// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::{Card, ParseCardError};

/// Error returned when a snapshot or a set of cards is structurally invalid.
///
/// An error fails a single evaluation call, the next call is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card without a rank.
    #[error("card is missing its rank")]
    MissingRank,
    /// A card without a suit.
    #[error("card is missing its suit")]
    MissingSuit,
    /// A card whose rank or suit could not be parsed.
    #[error("invalid card: {0}")]
    InvalidCard(#[from] ParseCardError),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A hand with the wrong number of cards.
    #[error("expected {expected} cards, found {found}")]
    InvalidCardCount {
        /// The accepted number of cards.
        expected: &'static str,
        /// The number of cards given.
        found: usize,
    },
    /// More than two hole cards.
    #[error("too many hole cards: {0}")]
    TooManyHoleCards(usize),
    /// More than five community cards.
    #[error("too many community cards: {0}")]
    TooManyBoardCards(usize),
    /// A player count outside 2..=9.
    #[error("invalid player count {0}, must be between 2 and 9")]
    InvalidPlayerCount(u8),
    /// A starting hand notation that is not canonical, i.e. "AKx".
    #[error("invalid hand notation {0:?}")]
    InvalidNotation(String),
    /// A position tag that is not one of the known positions.
    #[error("unknown position {0:?}")]
    UnknownPosition(String),
}

/// Checks that all cards are distinct.
pub(crate) fn check_unique(cards: &[Card]) -> Result<(), EvalError> {
    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}
