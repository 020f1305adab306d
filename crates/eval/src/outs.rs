// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawing outs and odds.
//!
//! Outs are counted with the usual table rules of thumb: 9 outs for a four
//! cards flush draw, 8 for an open ended straight draw, 4 for a gutshot, and 3
//! for each overcard to a made pair that is not already on the table.
use serde::Serialize;

use crate::{Card, Rank, Suit, error::EvalError, hand::classify};

/// Outs for a four cards flush draw.
const FLUSH_DRAW_OUTS: u32 = 9;

/// Outs for an open ended straight draw.
const OPEN_ENDED_OUTS: u32 = 8;

/// Outs for a gutshot straight draw.
const GUTSHOT_OUTS: u32 = 4;

/// Outs for each overcard rank.
const OVERCARD_OUTS: u32 = 3;

/// Unseen cards after the hole cards and a full board.
const UNSEEN_POOL: u32 = 52 - 2 - 5;

/// The outs for a hand by draw type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Outs {
    /// Flush draw outs.
    pub flush: u32,
    /// Straight draw outs.
    pub straight: u32,
    /// Overcard outs.
    pub overcards: u32,
}

impl Outs {
    /// The total number of outs.
    pub fn total(&self) -> u32 {
        self.flush + self.straight + self.overcards
    }
}

/// Counts the outs for the hole cards and at least three community cards.
///
/// Returns no outs before the flop.
pub fn count_outs(hole: &[Card], board: &[Card]) -> Result<Outs, EvalError> {
    if board.len() < 3 {
        return Ok(Outs::default());
    }

    let cards = hole.iter().chain(board).copied().collect::<Vec<_>>();

    let flush = if Suit::suits().any(|s| cards.iter().filter(|c| c.suit() == s).count() == 4) {
        FLUSH_DRAW_OUTS
    } else {
        0
    };

    let mut values = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
    values.sort_unstable();
    values.dedup();

    let straight = if values.windows(4).any(|w| w[3] - w[0] == 3) {
        OPEN_ENDED_OUTS
    } else if values.windows(3).any(|w| w[2] - w[0] == 2) {
        GUTSHOT_OUTS
    } else {
        0
    };

    // Overcards are counted above the highest rank with two or more cards,
    // which for a full house or quads may be a pair above the main group.
    let paired = classify(&cards)?.paired_rank().and_then(|_| {
        Rank::ranks()
            .rev()
            .find(|&r| cards.iter().filter(|c| c.rank() == r).count() >= 2)
    });

    let overcards = match paired {
        Some(paired) => {
            let count = Rank::ranks()
                .filter(|&r| r > paired && cards.iter().all(|c| c.rank() != r))
                .count();
            count as u32 * OVERCARD_OUTS
        }
        None => 0,
    };

    Ok(Outs {
        flush,
        straight,
        overcards,
    })
}

/// The probability of hitting one of `outs` cards with one or two streets to
/// come, other numbers of streets have no probability.
///
/// The unseen cards are always the deck without the hole cards and a full
/// board, no matter how many community cards are known.
pub fn drawing_odds(outs: u32, streets: u8) -> f64 {
    if outs == 0 {
        return 0.0;
    }

    let pool = f64::from(UNSEEN_POOL);
    let outs = f64::from(outs.min(UNSEEN_POOL));

    match streets {
        1 => outs / pool,
        2 => {
            let miss_first = (pool - outs) / pool;
            let miss_second = (pool - outs - 1.0) / (pool - 1.0);
            1.0 - miss_first * miss_second
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn outs_for(hole: &str, board: &str) -> Outs {
        count_outs(&cards(hole), &cards(board)).unwrap()
    }

    #[test]
    fn open_ended_straight_draw() {
        let outs = outs_for("9s 8s", "7s 6d 2c");
        assert_eq!(outs.straight, 8);
        assert_eq!(outs.flush, 0);
        assert_eq!(outs.total(), 8);
    }

    #[test]
    fn gutshot_straight_draw() {
        let outs = outs_for("9s 8d", "7c 2h Kd");
        assert_eq!(outs.straight, 4);
        assert_eq!(outs.total(), 4);
    }

    #[test]
    fn flush_draw() {
        let outs = outs_for("Ah Kh", "7h 2h 9c");
        assert_eq!(outs.flush, 9);
        assert_eq!(outs.total(), 9);

        // A made flush is not a draw.
        let outs = outs_for("Ah Kh", "7h 2h 9h");
        assert_eq!(outs.flush, 0);
    }

    #[test]
    fn combo_draw() {
        let outs = outs_for("9h 8h", "7h 6d 2h");
        assert_eq!(outs.flush, 9);
        assert_eq!(outs.straight, 8);
        assert_eq!(outs.total(), 17);
    }

    #[test]
    fn overcards_to_a_pair() {
        // Kings and aces are overcards to the queens.
        let outs = outs_for("Qs Qd", "7h 4c 2s");
        assert_eq!(outs.overcards, 6);
        assert_eq!(outs.total(), 6);

        // The king is on the board.
        let outs = outs_for("Qs Qd", "7h 4c Ks");
        assert_eq!(outs.overcards, 3);

        // No overcards to aces.
        let outs = outs_for("As Ad", "7h 4c Ks");
        assert_eq!(outs.overcards, 0);

        // Two pair counts above the top pair.
        let outs = outs_for("Qs Qd", "7h 7c 2s");
        assert_eq!(outs.overcards, 6);
    }

    #[test]
    fn overcards_above_the_highest_group() {
        // Only the ace is above the kings paired on the board.
        let outs = outs_for("5s 5d", "5h Kc Ks");
        assert_eq!(outs.overcards, 3);

        let outs = outs_for("4s 4d", "4h 4c Ks Kd");
        assert_eq!(outs.overcards, 3);

        // Trips above the board pair.
        let outs = outs_for("Qs Qd", "Qh 4c 4s");
        assert_eq!(outs.overcards, 6);
    }

    #[test]
    fn turn_and_river() {
        let outs = outs_for("9s 8s", "7s 6d 2c Kh");
        assert_eq!(outs.total(), 8);

        let outs = outs_for("9s 8s", "7s 6d 2c Kh 3d");
        assert_eq!(outs.flush, 0);
        assert_eq!(outs.straight, 8);
    }

    #[test]
    fn no_outs_before_the_flop() {
        assert_eq!(outs_for("9s 8s", "").total(), 0);
        assert_eq!(outs_for("9s 8s", "7s 6s").total(), 0);
    }

    #[test]
    fn drawing_probabilities() {
        assert_eq!(drawing_odds(0, 2), 0.0);
        assert!((drawing_odds(9, 1) - 9.0 / 45.0).abs() < 1e-12);

        let expected = 1.0 - (36.0 / 45.0) * (35.0 / 44.0);
        assert!((drawing_odds(9, 2) - expected).abs() < 1e-12);
        assert!((drawing_odds(9, 2) - 0.3636).abs() < 1e-4);

        assert!((drawing_odds(8, 2) - (1.0 - (37.0 / 45.0) * (36.0 / 44.0))).abs() < 1e-12);

        // Outs are capped to the unseen cards.
        assert_eq!(drawing_odds(60, 1), 1.0);
        assert_eq!(drawing_odds(45, 2), 1.0);

        assert_eq!(drawing_odds(9, 0), 0.0);
        assert_eq!(drawing_odds(9, 3), 0.0);
    }
}
