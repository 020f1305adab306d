// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the 13x13 starting hands grid, suited hands above the diagonal and
// offsuit hands below.
//
// ```bash
// $ cargo r --example chart -- --table tier
// $ cargo r --example chart -- --table score --players 9 --position early
// ```
use clap::{Parser, ValueEnum, value_parser};

use sharkeye_eval::{
    Position, Rank,
    preflop::{self, ChartTier, HandNotation},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Table {
    /// The chart action tiers.
    Tier,
    /// The heads-up win percentages.
    Win,
    /// The strength ranking.
    Ranking,
    /// The adjusted preflop score.
    Score,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The table to print.
    #[clap(long, short, value_enum, default_value_t = Table::Tier)]
    table: Table,
    /// The number of players for the score table.
    #[clap(long, short, default_value_t = 6, value_parser = value_parser!(u8).range(2..=9))]
    players: u8,
    /// The hero position for the score table.
    #[clap(long, default_value = "middle")]
    position: Position,
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("------|");
    }
    println!();
}

fn tier_label(tier: ChartTier) -> &'static str {
    match tier {
        ChartTier::StrongRaise => "R",
        ChartTier::RaiseOrCall => "R/C",
        ChartTier::SpeculativeCall => "C",
        ChartTier::Fold => "",
    }
}

fn cell(cli: &Cli, notation: HandNotation) -> String {
    match cli.table {
        Table::Tier => tier_label(preflop::chart_suggestion(notation).tier).to_string(),
        Table::Win => format!("{:.1}", preflop::win_percentage(notation)),
        Table::Ranking => preflop::ranking(notation).to_string(),
        Table::Score => {
            let (c1, c2) = notation.cards();
            let eval = preflop::evaluate([c1, c2], cli.players, cli.position);
            format!("{:.2}", eval.score)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut cells = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            // Suited above the diagonal.
            let notation = HandNotation::from_ranks(r1, r2, r1 > r2);
            labels.push(notation.to_string());
            cells.push(cell(&cli, notation));
        }

        print!("|");
        for label in labels {
            print!(" {label:<4} |");
        }
        println!();

        print!("|");
        for cell in cells {
            print!(" {cell:>4} |");
        }
        println!();

        separator();
    }

    for tier in [
        ChartTier::StrongRaise,
        ChartTier::RaiseOrCall,
        ChartTier::SpeculativeCall,
    ] {
        println!("{:<4} {} ({})", tier_label(tier), tier, tier.color());
    }
}
