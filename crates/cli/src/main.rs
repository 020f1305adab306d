// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sharkeye CLI.
//!
//! Analyzes a table snapshot given with command line flags or read from a JSON
//! file and prints the analysis as text or JSON.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, error};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sharkeye_eval::{Analyzer, AnalyzerConfig, Card, GameSnapshot, Position, RawSnapshot};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hole cards, i.e. "As Kd".
    #[clap(long, conflicts_with = "snapshot")]
    hole: Option<String>,
    /// The community cards, i.e. "7s 6d 2c".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The pot.
    #[clap(long, default_value_t = 0)]
    pot: u32,
    /// The bet to call.
    #[clap(long, default_value_t = 0)]
    bet: u32,
    /// The number of players in the hand.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// The hero position.
    #[clap(long, default_value = "middle")]
    position: Position,
    /// The number of equity simulation trials.
    #[clap(long, short, default_value_t = 1000)]
    trials: usize,
    /// Seed for a reproducible equity simulation.
    #[clap(long)]
    seed: Option<u64>,
    /// Read the snapshot from a JSON file.
    #[clap(long)]
    snapshot: Option<PathBuf>,
    /// Print the analysis as JSON.
    #[clap(long)]
    json: bool,
    /// Verbose logging, repeat for more.
    #[clap(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let snapshot = match &cli.snapshot {
        Some(path) => read_snapshot(path)?,
        None => {
            let Some(hole) = &cli.hole else {
                bail!("either --hole or --snapshot is required");
            };

            GameSnapshot::new(
                parse_cards(hole)?,
                parse_cards(&cli.board)?,
                cli.pot,
                cli.bet,
                cli.players,
            )?
            .with_position(cli.position)
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let analyzer = Analyzer::new(AnalyzerConfig { trials: cli.trials });
    let analysis = analyzer.analyze(&snapshot, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report::render(&analysis));
    }

    Ok(())
}

fn read_snapshot(path: &Path) -> Result<GameSnapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read snapshot {}", path.display()))?;
    let raw = serde_json::from_str::<RawSnapshot>(&text)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    debug!("Loaded snapshot {raw:?}");

    Ok(GameSnapshot::try_from(raw)?)
}

/// Parses cards separated by spaces or commas.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Card>().with_context(|| format!("invalid card {c:?}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_card_lists() {
        let cards = parse_cards("As Kd").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].to_string(), "AS");

        let cards = parse_cards("7s,6d, 2c").unwrap();
        assert_eq!(cards.len(), 3);

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("As Kx").is_err());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::parse_from([
            "sharkeye",
            "--hole",
            "9s 8s",
            "--board",
            "7s 6d 2c",
            "--pot",
            "100",
            "--bet",
            "25",
            "--players",
            "2",
            "--position",
            "button",
            "--seed",
            "7",
        ]);

        assert_eq!(cli.players, 2);
        assert_eq!(cli.position, Position::Button);
        assert_eq!(cli.trials, 1000);
        assert_eq!(cli.seed, Some(7));

        assert!(Cli::try_parse_from(["sharkeye", "--hole", "As Ah", "--players", "10"]).is_err());
    }
}
