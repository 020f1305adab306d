// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Win probability estimate against one random opponent.
//!
//! Before the flop the estimate comes from the heads-up win percentages table,
//! after the flop it is a Monte Carlo simulation: each trial samples two cards
//! for the opponent from the unseen cards and compares the hero and opponent
//! hand categories. Kickers are not compared, a hand of the same category is a
//! tie and counts half a win.
//!
//! Both estimates are heads-up values that are pulled toward 50% by half for
//! each extra player at the table.
use log::trace;
use rand::Rng;
use serde::Serialize;

use crate::{
    Card, Deck,
    error::{EvalError, check_unique},
    hand::{HandCategory, classify},
    preflop::{HandNotation, win_percentage},
    snapshot::{GameSnapshot, Phase},
};

/// The highest win probability on the river without a pair.
const RIVER_HIGH_CARD_CAP: f64 = 0.15;

/// How the win probability was estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquityMethod {
    /// The preflop win percentages table.
    TableLookup,
    /// Monte Carlo simulation.
    Simulation,
}

/// An estimated win probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquityResult {
    /// The win probability in 0..=1.
    pub win_probability: f64,
    /// The estimate method.
    pub method: EquityMethod,
    /// The phase the estimate is for.
    pub phase: Phase,
    /// The number of simulated hands, 0 for a table lookup.
    pub trials: usize,
    /// Simulated hands won.
    pub wins: usize,
    /// Simulated hands with the same category as the opponent.
    pub ties: usize,
}

/// A win probability estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquitySimulator {
    trials: usize,
}

impl Default for EquitySimulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TRIALS)
    }
}

impl EquitySimulator {
    /// The default number of simulated hands.
    pub const DEFAULT_TRIALS: usize = 1000;

    /// Creates a simulator that samples `trials` opponent hands, at least one.
    pub fn new(trials: usize) -> Self {
        Self {
            trials: trials.max(1),
        }
    }

    /// The number of simulated hands.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Estimates the hero win probability for the given hole cards and
    /// community cards.
    ///
    /// A board with 1 or 2 cards cannot be evaluated and returns a neutral 50%
    /// estimate without sampling.
    pub fn estimate<R>(
        &self,
        hole: [Card; 2],
        board: &[Card],
        player_count: u8,
        rng: &mut R,
    ) -> Result<EquityResult, EvalError>
    where
        R: Rng + ?Sized,
    {
        if !(GameSnapshot::MIN_PLAYERS..=GameSnapshot::MAX_PLAYERS).contains(&player_count) {
            return Err(EvalError::InvalidPlayerCount(player_count));
        }

        let known = hole.iter().chain(board).copied().collect::<Vec<_>>();
        check_unique(&known)?;

        let phase = Phase::from_board_len(board.len());
        if phase == Phase::Preflop {
            let notation = HandNotation::new(hole[0], hole[1]);
            let percentage = multiway(win_percentage(notation), player_count);
            trace!("Table lookup {notation} players {player_count} {percentage:.1}%");

            return Ok(EquityResult {
                win_probability: percentage / 100.0,
                method: EquityMethod::TableLookup,
                phase,
                trials: 0,
                wins: 0,
                ties: 0,
            });
        }

        if phase == Phase::Unknown {
            trace!("No estimate with {} community cards", board.len());

            return Ok(EquityResult {
                win_probability: 0.5,
                method: EquityMethod::Simulation,
                phase,
                trials: 0,
                wins: 0,
                ties: 0,
            });
        }

        let hero = classify(&known)?;

        let mut wins = 0;
        let mut ties = 0;
        let mut error = None;
        let mut opponent = Vec::with_capacity(7);

        Deck::without(&known).sample(rng, self.trials, 2, |sampled| {
            opponent.clear();
            opponent.extend_from_slice(sampled);
            opponent.extend_from_slice(board);

            match classify(&opponent) {
                Ok(hand) if hero.category() > hand.category() => wins += 1,
                Ok(hand) if hero.category() == hand.category() => ties += 1,
                Ok(_) => {}
                Err(e) => {
                    error.get_or_insert(e);
                }
            }
        });

        if let Some(e) = error {
            return Err(e);
        }

        let credits = wins as f64 + ties as f64 * 0.5;
        let percentage = multiway(credits * 100.0 / self.trials as f64, player_count);

        let mut win_probability = percentage / 100.0;
        if phase == Phase::River && hero.category() == HandCategory::HighCard {
            win_probability = win_probability.min(RIVER_HIGH_CARD_CAP);
        }

        trace!(
            "Simulated {} hands {phase} {} wins {wins} ties {ties} players {player_count} {:.3}",
            self.trials,
            hero.category(),
            win_probability
        );

        Ok(EquityResult {
            win_probability,
            method: EquityMethod::Simulation,
            phase,
            trials: self.trials,
            wins,
            ties,
        })
    }
}

/// Pulls a heads-up win percentage toward 50% by half for each extra player.
fn multiway(percentage: f64, player_count: u8) -> f64 {
    if player_count <= 2 {
        return percentage;
    }

    let decay = 0.5f64.powi(i32::from(player_count) - 2);
    50.0 + (percentage - 50.0) * decay
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn hole(s: &str) -> [Card; 2] {
        cards(s).try_into().unwrap()
    }

    #[test]
    fn preflop_table_lookup() {
        let mut rng = StdRng::seed_from_u64(1);
        let sim = EquitySimulator::default();

        let res = sim.estimate(hole("As Ah"), &[], 2, &mut rng).unwrap();
        assert_eq!(res.method, EquityMethod::TableLookup);
        assert_eq!(res.phase, Phase::Preflop);
        assert_eq!(res.trials, 0);
        assert!((res.win_probability - 0.853).abs() < 1e-9);

        // Unknown hands default to 50%.
        let res = sim.estimate(hole("7s 2h"), &[], 2, &mut rng).unwrap();
        assert!((res.win_probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn multiway_correction() {
        let mut rng = StdRng::seed_from_u64(1);
        let sim = EquitySimulator::default();

        // 50 + (85.3 - 50) * 0.5^4
        let res = sim.estimate(hole("As Ah"), &[], 6, &mut rng).unwrap();
        assert!((res.win_probability - 0.5220625).abs() < 1e-9);

        assert_eq!(multiway(80.0, 2), 80.0);
        assert_eq!(multiway(80.0, 3), 65.0);
        assert_eq!(multiway(20.0, 4), 42.5);
        assert_eq!(multiway(50.0, 9), 50.0);
    }

    #[test]
    fn simulation_is_reproducible() {
        let sim = EquitySimulator::default();
        let board = cards("7s 6d 2c");

        let mut rng = StdRng::seed_from_u64(42);
        let r1 = sim.estimate(hole("9s 8s"), &board, 2, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let r2 = sim.estimate(hole("9s 8s"), &board, 2, &mut rng).unwrap();

        assert_eq!(r1, r2);
        assert_eq!(r1.method, EquityMethod::Simulation);
        assert_eq!(r1.phase, Phase::Flop);
        assert_eq!(r1.trials, 1000);
        assert!(r1.wins + r1.ties <= r1.trials);
        assert!((0.0..=1.0).contains(&r1.win_probability));
    }

    #[test]
    fn unbeatable_hand() {
        let mut rng = StdRng::seed_from_u64(7);
        let sim = EquitySimulator::new(200);

        let board = cards("Qs Js Ts 2h 3d");
        let res = sim.estimate(hole("As Ks"), &board, 2, &mut rng).unwrap();
        assert_eq!(res.wins, 200);
        assert_eq!(res.ties, 0);
        assert_eq!(res.win_probability, 1.0);
    }

    #[test]
    fn river_high_card_cap() {
        let sim = EquitySimulator::default();
        let board = cards("9s Jh Kc 4d 3s");

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let res = sim.estimate(hole("2c 7d"), &board, 2, &mut rng).unwrap();
            assert_eq!(res.phase, Phase::River);
            assert!(res.win_probability <= 0.15);
        }

        // Ace high still loses to any pair.
        let mut rng = StdRng::seed_from_u64(0);
        let res = sim.estimate(hole("Ac Qd"), &board, 2, &mut rng).unwrap();
        assert!(res.win_probability <= 0.15);
    }

    #[test]
    fn invalid_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let sim = EquitySimulator::default();

        let res = sim.estimate(hole("As Ah"), &[], 10, &mut rng);
        assert_eq!(res, Err(EvalError::InvalidPlayerCount(10)));

        let board = cards("As 6d 2c");
        let res = sim.estimate(hole("As Ah"), &board, 2, &mut rng);
        assert_eq!(res, Err(EvalError::DuplicateCard("As".parse().unwrap())));
    }

    #[test]
    fn partial_board_is_neutral() {
        let mut rng = StdRng::seed_from_u64(0);
        let sim = EquitySimulator::default();

        for board in ["7s", "7s 6d"] {
            let res = sim.estimate(hole("As Ah"), &cards(board), 4, &mut rng).unwrap();
            assert_eq!(res.phase, Phase::Unknown);
            assert_eq!(res.win_probability, 0.5);
            assert_eq!(res.trials, 0);
        }
    }

    #[test]
    fn at_least_one_trial() {
        assert_eq!(EquitySimulator::new(0).trials(), 1);
        assert_eq!(EquitySimulator::default().trials(), 1000);
    }
}
