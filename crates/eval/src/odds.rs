// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pot and implied odds.

/// Scaling of the outs and players estimate of future bets.
const IMPLIED_FACTOR: f64 = 0.1;

/// The ratio of the pot to the amount to call, 0 if either is 0.
pub fn pot_odds(pot: u32, call: u32) -> f64 {
    if pot == 0 || call == 0 {
        return 0.0;
    }

    round4(f64::from(pot) / f64::from(call))
}

/// The pot odds with an estimate of the bets won on later streets, 0 if there
/// is nothing to call or no outs.
pub fn implied_odds(pot: u32, call: u32, outs: u32, player_count: u8) -> f64 {
    if call == 0 || outs == 0 {
        return 0.0;
    }

    let future = f64::from(outs) * f64::from(player_count) * IMPLIED_FACTOR;
    round4((f64::from(pot) + future) / f64::from(call))
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pot_odds_ratio() {
        assert_eq!(pot_odds(100, 25), 4.0);
        assert_eq!(pot_odds(100, 30), 3.3333);
        assert_eq!(pot_odds(50, 100), 0.5);
    }

    #[test]
    fn pot_odds_degenerate() {
        assert_eq!(pot_odds(100, 0), 0.0);
        assert_eq!(pot_odds(0, 25), 0.0);
        assert_eq!(pot_odds(0, 0), 0.0);
    }

    #[test]
    fn implied_odds_ratio() {
        // (100 + 8 * 6 * 0.1) / 25
        assert_eq!(implied_odds(100, 25, 8, 6), 4.192);

        // (100 + 9 * 2 * 0.1) / 30
        assert_eq!(implied_odds(100, 30, 9, 2), 3.3933);

        // Implied odds can be positive with an empty pot.
        assert_eq!(implied_odds(0, 10, 10, 2), 0.2);
    }

    #[test]
    fn implied_odds_degenerate() {
        assert_eq!(implied_odds(100, 0, 8, 6), 0.0);
        assert_eq!(implied_odds(100, 25, 0, 6), 0.0);
    }
}
