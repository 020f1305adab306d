// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text report for an analysis.
use std::fmt;

use sharkeye_eval::{Analysis, HandAnalysis};

/// Renders the analysis as aligned text lines.
pub fn render(analysis: &Analysis) -> String {
    Report(analysis).to_string()
}

/// Displays an analysis as a text report.
pub struct Report<'a>(pub &'a Analysis);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        writeln!(f, "Phase:         {}", analysis.phase)?;
        writeln!(
            f,
            "Players:       {} ({})",
            analysis.player_count, analysis.position
        )?;
        writeln!(
            f,
            "Pot:           {} to call {}",
            analysis.pot, analysis.current_bet
        )?;
        writeln!(f, "Hand:          {}", analysis.hand.description())?;

        match &analysis.hand {
            HandAnalysis::Incomplete { .. } => {}
            HandAnalysis::Preflop(eval) => {
                writeln!(
                    f,
                    "Chart:         {} ({})",
                    eval.chart.tier,
                    eval.chart.tier.color()
                )?;
            }
            HandAnalysis::Postflop { strength, .. } => {
                writeln!(f, "Strength:      {strength:.2}")?;
                writeln!(
                    f,
                    "Outs:          {} (flush {}, straight {}, overcards {})",
                    analysis.outs.total(),
                    analysis.outs.flush,
                    analysis.outs.straight,
                    analysis.outs.overcards
                )?;
                writeln!(f, "Drawing odds:  {:.1}%", analysis.drawing_odds * 100.0)?;
                writeln!(f, "Implied odds:  {:.2}:1", analysis.implied_odds)?;
            }
        }

        writeln!(f, "Pot odds:      {:.2}:1", analysis.pot_odds)?;

        if let Some(equity) = &analysis.equity {
            write!(f, "Win:           {:.1}%", equity.win_probability * 100.0)?;
            if equity.trials > 0 {
                writeln!(
                    f,
                    " ({} hands, {} wins, {} ties)",
                    equity.trials, equity.wins, equity.ties
                )?;
            } else {
                writeln!(f, " (preflop table)")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use sharkeye_eval::{Analyzer, AnalyzerConfig, Card, GameSnapshot};

    fn analyze(hole: &str, board: &str) -> Analysis {
        let cards = |s: &str| {
            s.split_whitespace()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        };

        let snapshot = GameSnapshot::new(cards(hole), cards(board), 100, 25, 2).unwrap();
        Analyzer::new(AnalyzerConfig { trials: 100 })
            .analyze(&snapshot, &mut StdRng::seed_from_u64(1))
            .unwrap()
    }

    #[test]
    fn postflop_report() {
        let text = render(&analyze("9s 8s", "7s 6d 2c"));
        assert!(text.contains("Phase:         flop"));
        assert!(text.contains("Outs:          8 (flush 0, straight 8, overcards 0)"));
        assert!(text.contains("Pot odds:      4.00:1"));
        assert!(text.contains("(100 hands,"));
    }

    #[test]
    fn preflop_report() {
        let text = render(&analyze("As Ks", ""));
        assert!(text.contains("Phase:         preflop"));
        assert!(text.contains("Chart:         Raise (Any Position) (red)"));
        assert!(text.contains("(preflop table)"));
        assert!(!text.contains("Outs:"));
    }

    #[test]
    fn report_display() {
        let analysis = analyze("Ah Kh", "Qh 7h 2c 9d");
        let text = Report(&analysis).to_string();
        assert_eq!(text, render(&analysis));
        assert!(text.lines().all(|l| l.contains(':')));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn incomplete_report() {
        let text = render(&analyze("As", ""));
        assert!(text.contains("Hand:          Waiting for hole cards"));
        assert!(!text.contains("Win:"));
    }
}
