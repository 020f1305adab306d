// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game snapshot types.
//!
//! A [GameSnapshot] is the table state the engine evaluates: the hero hole
//! cards, the community cards, the pot, the bet to call, the number of players
//! and the hero position. Snapshots coming from a table reader are usually
//! deserialized as a [RawSnapshot] and converted with [TryFrom] so that cards
//! with a missing rank or suit fail the conversion with an [EvalError].
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    Card,
    error::{EvalError, check_unique},
};

/// The hand phase, derived from the number of community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
    /// Any other number of community cards.
    Unknown,
}

impl Phase {
    /// The phase for the given number of community cards.
    pub fn from_board_len(len: usize) -> Phase {
        match len {
            0 => Phase::Preflop,
            3 => Phase::Flop,
            4 => Phase::Turn,
            5 => Phase::River,
            _ => Phase::Unknown,
        }
    }

    /// The number of community cards still to come after the flop or turn.
    pub fn streets_to_come(&self) -> u8 {
        match self {
            Phase::Flop => 2,
            Phase::Turn => 1,
            _ => 0,
        }
    }

    /// The phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The hero position at the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Early position.
    Early,
    /// Middle position.
    #[default]
    Middle,
    /// Late position.
    Late,
    /// The dealer button.
    Button,
    /// Small blind.
    SmallBlind,
    /// Big blind.
    BigBlind,
}

impl Position {
    /// The preflop score multiplier for this position.
    pub fn multiplier(&self) -> f64 {
        match self {
            Position::Early => 0.8,
            Position::Middle => 1.0,
            Position::Late => 1.2,
            Position::Button => 1.3,
            Position::SmallBlind => 1.1,
            Position::BigBlind => 0.9,
        }
    }

    /// The position name.
    pub fn name(&self) -> &'static str {
        match self {
            Position::Early => "early",
            Position::Middle => "middle",
            Position::Late => "late",
            Position::Button => "button",
            Position::SmallBlind => "small-blind",
            Position::BigBlind => "big-blind",
        }
    }
}

impl FromStr for Position {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position = match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "early" => Position::Early,
            "middle" => Position::Middle,
            "late" => Position::Late,
            "button" => Position::Button,
            "small-blind" => Position::SmallBlind,
            "big-blind" => Position::BigBlind,
            _ => return Err(EvalError::UnknownPosition(s.to_string())),
        };

        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A card as read from a table, either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    /// The rank text, i.e. "A", "T", or "10".
    pub rank: Option<String>,
    /// The suit text, i.e. "s" or "♠".
    pub suit: Option<String>,
}

impl RawCard {
    /// Creates a raw card from rank and suit text.
    pub fn new(rank: &str, suit: &str) -> Self {
        Self {
            rank: Some(rank.to_string()),
            suit: Some(suit.to_string()),
        }
    }
}

impl TryFrom<&RawCard> for Card {
    type Error = EvalError;

    fn try_from(raw: &RawCard) -> Result<Self, Self::Error> {
        let rank = raw
            .rank
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(EvalError::MissingRank)?;
        let suit = raw
            .suit
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(EvalError::MissingSuit)?;

        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// A table snapshot as produced by a table reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnapshot {
    /// The hero hole cards.
    pub hole_cards: Vec<RawCard>,
    /// The community cards.
    pub community_cards: Vec<RawCard>,
    /// The pot.
    pub pot: u32,
    /// The bet the hero has to call.
    pub current_bet: u32,
    /// The number of players in the hand.
    pub player_count: u8,
    /// The hero position tag.
    pub position: Option<String>,
}

impl Default for RawSnapshot {
    fn default() -> Self {
        Self {
            hole_cards: Vec::new(),
            community_cards: Vec::new(),
            pot: 0,
            current_bet: 0,
            player_count: 2,
            position: None,
        }
    }
}

/// A validated table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    hole_cards: Vec<Card>,
    board: Vec<Card>,
    pot: u32,
    current_bet: u32,
    player_count: u8,
    position: Position,
}

impl GameSnapshot {
    /// The minimum number of players.
    pub const MIN_PLAYERS: u8 = 2;

    /// The maximum number of players.
    pub const MAX_PLAYERS: u8 = 9;

    /// Creates a new snapshot in middle position.
    ///
    /// Fails if there are more than 2 hole cards or more than 5 community
    /// cards, if a card appears twice, or if the player count is not in 2..=9.
    /// Less than 2 hole cards is accepted and evaluates as incomplete.
    pub fn new(
        hole_cards: Vec<Card>,
        board: Vec<Card>,
        pot: u32,
        current_bet: u32,
        player_count: u8,
    ) -> Result<Self, EvalError> {
        if hole_cards.len() > 2 {
            return Err(EvalError::TooManyHoleCards(hole_cards.len()));
        }

        if board.len() > 5 {
            return Err(EvalError::TooManyBoardCards(board.len()));
        }

        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&player_count) {
            return Err(EvalError::InvalidPlayerCount(player_count));
        }

        let snapshot = Self {
            hole_cards,
            board,
            pot,
            current_bet,
            player_count,
            position: Position::default(),
        };

        check_unique(&snapshot.known_cards())?;
        Ok(snapshot)
    }

    /// Sets the hero position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// The hero hole cards.
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole_cards
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The pot.
    pub fn pot(&self) -> u32 {
        self.pot
    }

    /// The bet to call.
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// The number of players.
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    /// The hero position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The hand phase.
    pub fn phase(&self) -> Phase {
        Phase::from_board_len(self.board.len())
    }

    /// The hole cards followed by the community cards.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hole_cards
            .iter()
            .chain(self.board.iter())
            .copied()
            .collect()
    }
}

impl TryFrom<RawSnapshot> for GameSnapshot {
    type Error = EvalError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        let hole_cards = raw
            .hole_cards
            .iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let board = raw
            .community_cards
            .iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let position = raw
            .position
            .as_deref()
            .map(str::parse::<Position>)
            .transpose()?
            .unwrap_or_default();

        let snapshot = GameSnapshot::new(
            hole_cards,
            board,
            raw.pot,
            raw.current_bet,
            raw.player_count,
        )?;
        Ok(snapshot.with_position(position))
    }
}
