// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// high-card        1302540
// pair             1098240
// two-pair         123552
// three-of-a-kind  54912
// straight         10200
// flush            5108
// full-house       3744
// four-of-a-kind   624
// straight-flush   36
// royal-flush      4
// ```

use std::time::Instant;

use sharkeye_eval::{Deck, HandCategory, classify};

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];
    let mut errors = 0;

    Deck::default().for_each(5, |hand| match classify(hand) {
        Ok(hand) => counts[hand.category() as usize] += 1,
        Err(_) => errors += 1,
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Errors:          {errors}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        println!("{:<16} {}", category.name(), counts[category as usize]);
    }
}
