//! Monte Carlo equity of all 169 starting hand classes against random
//! opponents, plus the hand category survey.
//!
//! Usage:
//!   cargo run --release --example starting_hands -- [opponents] [iterations]

use holdem_equity::{EngineConfig, EquityEngine, HandCategory};

fn main() {
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");

    let mut args = std::env::args().skip(1);
    let opponents: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let iterations: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(100_000);

    let engine = EquityEngine::new(EngineConfig::from_env().with_categories(false));

    let mut table = engine
        .significant_hands(opponents, iterations)
        .expect("starting hand table");
    table.sort_by(|a, b| b.1.equity().total_cmp(&a.1.equity()));

    println!("{:>5}  {:>8}  {:>8}  {:>8}", "hand", "win", "split", "equity");
    for (hand, outcome) in &table {
        println!(
            "{:>5}  {:>8.4}  {:>8.4}  {:>8.4}",
            hand.class_name(),
            outcome.win_rate(),
            outcome.split_rate(),
            outcome.equity()
        );
    }

    let survey = engine.category_frequencies(iterations).expect("category survey");
    println!("\nbest hand of seven cards ({} samples)", survey.total());
    for category in HandCategory::ALL {
        println!("{:>16}  {:.5}", category.name(), survey.category_rate(category));
    }
}
