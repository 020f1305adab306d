// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table snapshot analysis.
//!
//! The [Analyzer] runs the preflop evaluation when there are no community
//! cards, otherwise it classifies the hero hand, counts the outs, and runs the
//! equity simulation. The results are merged with the snapshot pot, bet,
//! and players into a single [Analysis].
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    equity::{EquityResult, EquitySimulator},
    error::EvalError,
    hand::{EvaluatedHand, classify},
    odds::{implied_odds, pot_odds},
    outs::{Outs, count_outs, drawing_odds},
    preflop::{self, PreflopEvaluation},
    snapshot::{GameSnapshot, Phase, Position},
};

/// Streets used to quote the drawing odds.
const DRAWING_STREETS: u8 = 2;

/// Analyzer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// The number of equity simulation trials.
    pub trials: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            trials: EquitySimulator::DEFAULT_TRIALS,
        }
    }
}

/// The hero hand analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HandAnalysis {
    /// Not enough cards to evaluate the hand yet.
    Incomplete {
        /// Why the hand cannot be evaluated.
        description: String,
    },
    /// A starting hand evaluation.
    Preflop(PreflopEvaluation),
    /// A made hand after the flop.
    Postflop {
        /// The best five cards hand.
        hand: EvaluatedHand,
        /// The category strength adjusted for the number of players.
        strength: f64,
    },
}

impl HandAnalysis {
    /// A description for display.
    pub fn description(&self) -> &str {
        match self {
            HandAnalysis::Incomplete { description } => description,
            HandAnalysis::Preflop(eval) => &eval.description,
            HandAnalysis::Postflop { hand, .. } => hand.description(),
        }
    }

    /// Returns true if the hand could not be evaluated.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, HandAnalysis::Incomplete { .. })
    }
}

/// The analysis of a table snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The hand phase.
    pub phase: Phase,
    /// The pot.
    pub pot: u32,
    /// The bet to call.
    pub current_bet: u32,
    /// The number of players.
    pub player_count: u8,
    /// The hero position.
    pub position: Position,
    /// The hero hand.
    pub hand: HandAnalysis,
    /// The pot odds.
    pub pot_odds: f64,
    /// The implied odds.
    pub implied_odds: f64,
    /// The outs by draw type.
    pub outs: Outs,
    /// The probability of hitting an out by the river.
    pub drawing_odds: f64,
    /// The win probability, none if the hand is incomplete.
    pub equity: Option<EquityResult>,
}

/// Analyzes table snapshots.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    simulator: EquitySimulator,
}

impl Analyzer {
    /// Creates a new analyzer.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            simulator: EquitySimulator::new(config.trials),
        }
    }

    /// Analyzes a snapshot using `rng` for the equity simulation.
    pub fn analyze<R>(&self, snapshot: &GameSnapshot, rng: &mut R) -> Result<Analysis, EvalError>
    where
        R: Rng + ?Sized,
    {
        let phase = snapshot.phase();
        let players = snapshot.player_count();

        debug!(
            "Analyze {phase} hole {} board {} players {players} pot {} bet {}",
            snapshot.hole_cards().len(),
            snapshot.board().len(),
            snapshot.pot(),
            snapshot.current_bet(),
        );

        let mut analysis = Analysis {
            phase,
            pot: snapshot.pot(),
            current_bet: snapshot.current_bet(),
            player_count: players,
            position: snapshot.position(),
            hand: HandAnalysis::Incomplete {
                description: String::new(),
            },
            pot_odds: pot_odds(snapshot.pot(), snapshot.current_bet()),
            implied_odds: 0.0,
            outs: Outs::default(),
            drawing_odds: 0.0,
            equity: None,
        };

        let Ok(hole) = <[_; 2]>::try_from(snapshot.hole_cards()) else {
            debug!("Incomplete hand, missing hole cards");
            analysis.hand = HandAnalysis::Incomplete {
                description: "Waiting for hole cards".to_string(),
            };
            return Ok(analysis);
        };

        match phase {
            Phase::Preflop => {
                let eval = preflop::evaluate(hole, players, snapshot.position());
                debug!("Preflop {} {:.3}", eval.notation, eval.score);
                analysis.hand = HandAnalysis::Preflop(eval);
            }
            Phase::Unknown => {
                debug!("Incomplete hand, {} community cards", snapshot.board().len());
                analysis.hand = HandAnalysis::Incomplete {
                    description: "Waiting for the flop".to_string(),
                };
                return Ok(analysis);
            }
            Phase::Flop | Phase::Turn | Phase::River => {
                let hand = classify(&snapshot.known_cards())?;
                let outs = count_outs(snapshot.hole_cards(), snapshot.board())?;
                debug!("Postflop {} outs {}", hand.description(), outs.total());

                analysis.implied_odds = implied_odds(
                    snapshot.pot(),
                    snapshot.current_bet(),
                    outs.total(),
                    players,
                );
                analysis.drawing_odds = drawing_odds(outs.total(), DRAWING_STREETS);
                analysis.outs = outs;
                analysis.hand = HandAnalysis::Postflop {
                    strength: hand.category().strength(players),
                    hand,
                };
            }
        }

        let equity = self.simulator.estimate(hole, snapshot.board(), players, rng)?;
        analysis.equity = Some(equity);

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, equity::EquityMethod, hand::HandCategory, preflop::ChartTier};
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn new_snapshot(hole: &str, board: &str, pot: u32, bet: u32, players: u8) -> GameSnapshot {
        GameSnapshot::new(cards(hole), cards(board), pot, bet, players).unwrap()
    }

    #[test]
    fn preflop_analysis() {
        let mut rng = StdRng::seed_from_u64(1);
        let analyzer = Analyzer::default();

        let snapshot = new_snapshot("As Ks", "", 30, 10, 6).with_position(Position::Button);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();

        assert_eq!(analysis.phase, Phase::Preflop);
        assert_eq!(analysis.pot, 30);
        assert_eq!(analysis.current_bet, 10);
        assert_eq!(analysis.player_count, 6);
        assert_eq!(analysis.position, Position::Button);
        assert_eq!(analysis.pot_odds, 3.0);
        assert_eq!(analysis.implied_odds, 0.0);
        assert_eq!(analysis.outs.total(), 0);
        assert_eq!(analysis.drawing_odds, 0.0);

        let HandAnalysis::Preflop(eval) = &analysis.hand else {
            panic!("expected a preflop evaluation: {:?}", analysis.hand);
        };
        assert_eq!(eval.notation.to_string(), "AKs");
        assert_eq!(eval.chart.tier, ChartTier::StrongRaise);
        assert_eq!(eval.position, Position::Button);

        let equity = analysis.equity.unwrap();
        assert_eq!(equity.method, EquityMethod::TableLookup);
        assert_eq!(equity.phase, Phase::Preflop);
    }

    #[test]
    fn flop_analysis() {
        let mut rng = StdRng::seed_from_u64(1);
        let analyzer = Analyzer::new(AnalyzerConfig { trials: 500 });

        let snapshot = new_snapshot("9s 8s", "7s 6d 2c", 100, 25, 2);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();

        assert_eq!(analysis.phase, Phase::Flop);
        assert_eq!(analysis.pot_odds, 4.0);
        assert_eq!(analysis.outs.total(), 8);
        // (100 + 8 * 2 * 0.1) / 25
        assert_eq!(analysis.implied_odds, 4.064);
        assert_eq!(analysis.drawing_odds, drawing_odds(8, 2));

        let HandAnalysis::Postflop { hand, strength } = &analysis.hand else {
            panic!("expected a postflop hand: {:?}", analysis.hand);
        };
        assert_eq!(hand.category(), HandCategory::HighCard);
        assert!((strength - 0.7).abs() < 1e-9);

        let equity = analysis.equity.unwrap();
        assert_eq!(equity.method, EquityMethod::Simulation);
        assert_eq!(equity.trials, 500);
    }

    #[test]
    fn river_high_card_is_capped() {
        let mut rng = StdRng::seed_from_u64(3);
        let analyzer = Analyzer::default();

        let snapshot = new_snapshot("2c 7d", "9s Jh Kc 4d 3s", 100, 50, 3);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();

        assert_eq!(analysis.phase, Phase::River);
        assert!(analysis.equity.unwrap().win_probability <= 0.15);
    }

    #[test]
    fn incomplete_hands() {
        let mut rng = StdRng::seed_from_u64(1);
        let analyzer = Analyzer::default();

        let snapshot = new_snapshot("As", "", 100, 20, 4);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();
        assert!(analysis.hand.is_incomplete());
        assert_eq!(analysis.hand.description(), "Waiting for hole cards");
        assert_eq!(analysis.pot_odds, 5.0);
        assert_eq!(analysis.equity, None);

        let snapshot = new_snapshot("As Kd", "7s 6d", 100, 20, 4);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();
        assert_eq!(analysis.phase, Phase::Unknown);
        assert!(analysis.hand.is_incomplete());
        assert_eq!(analysis.equity, None);
    }

    #[test]
    fn same_seed_same_analysis() {
        let analyzer = Analyzer::default();
        let snapshot = new_snapshot("Ah Kh", "7h 2h 9c Qd", 80, 20, 5);

        let a1 = analyzer
            .analyze(&snapshot, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let a2 = analyzer
            .analyze(&snapshot, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(a1, a2);
        assert_eq!(a1.phase, Phase::Turn);
        assert_eq!(a1.outs.flush, 9);
    }

    #[test]
    fn serialize_analysis() {
        let mut rng = StdRng::seed_from_u64(1);
        let analyzer = Analyzer::new(AnalyzerConfig { trials: 10 });

        let snapshot = new_snapshot("Qs Qd", "Qh 4c 4s", 60, 0, 2);
        let analysis = analyzer.analyze(&snapshot, &mut rng).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["phase"], "flop");
        assert_eq!(value["position"], "middle");
        assert_eq!(value["hand"]["kind"], "postflop");
        assert_eq!(value["hand"]["hand"]["category"], "full-house");
        assert_eq!(value["pot_odds"], 0.0);
        assert_eq!(value["equity"]["method"], "simulation");
    }
}
