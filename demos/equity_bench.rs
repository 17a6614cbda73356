//! Benchmark equity calculations to measure performance across different scenarios.
//!
//! Usage:
//!   cargo run --release --example equity_bench
//!
//! This measures:
//! - Heads-up equity (known and random opponents)
//! - Multi-way equity (3-9 players)
//! - Exact vs Monte Carlo comparison
//! - Different board states (preflop, flop, turn, river)
//!
//! The worker count comes from `HOLDEM_WORKERS` (default 8).

use std::time::Instant;

use holdem_equity::{parse_cards, Card, EngineConfig, EquityEngine, Situation};

fn format_duration(nanos: u128) -> String {
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.1} μs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.3} s", nanos as f64 / 1_000_000_000.0)
    }
}

fn bench<F>(name: &str, iterations: u64, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let duration = start.elapsed();

    let total_ns = duration.as_nanos();
    let per_iter_ns = total_ns / iterations as u128;
    let per_sec = (iterations as f64) / duration.as_secs_f64();

    println!("{:50} {:>12}  ({:>10.0} /s)", name, format_duration(per_iter_ns), per_sec);
}

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card list")
}

fn known(pockets: &[&str], board: &str) -> Situation {
    let mut s = Situation::new();
    for p in pockets {
        let c = cards(p);
        s = s.with_known_player(c[0], c[1]);
    }
    s.with_board(&cards(board))
}

fn main() {
    let engine = EquityEngine::new(EngineConfig::from_env().with_seed(42).with_categories(false));

    println!("=== Equity Calculator Benchmarks ({} workers) ===\n", engine.config().workers);
    println!("{:50} {:>12}  {:>13}", "Scenario", "Time/Iter", "Throughput");
    println!("{:-<78}", "");

    let flop = "Kc Qd 2h";
    let turn = "Kc Qd 2h 3s";
    let river = "Kc Qd 2h 3s 4c";

    println!("\n--- Heads-Up Exact Equity ---");

    bench("HU Exact: River (complete board)", 1000, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh"], river)).unwrap();
    });

    bench("HU Exact: Turn (4 board cards)", 1000, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh"], turn)).unwrap();
    });

    bench("HU Exact: Flop (3 board cards)", 100, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh"], flop)).unwrap();
    });

    bench("HU Exact: Preflop (0 board cards)", 3, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh"], "")).unwrap();
    });

    println!("\n--- Heads-Up Monte Carlo (10k iterations) ---");

    bench("HU MC 10k: Preflop", 100, || {
        let _ = engine.run_monte_carlo(&known(&["As Ah", "Ks Kh"], ""), 10_000).unwrap();
    });

    bench("HU MC 10k: Flop", 100, || {
        let _ = engine.run_monte_carlo(&known(&["As Ah", "Ks Kh"], flop), 10_000).unwrap();
    });

    bench("HU MC 10k: Turn", 100, || {
        let _ = engine.run_monte_carlo(&known(&["As Ah", "Ks Kh"], turn), 10_000).unwrap();
    });

    println!("\n--- Multi-Way Exact Equity ---");

    bench("3-way Exact: Turn", 100, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh", "Qs Qh"], turn)).unwrap();
    });

    bench("3-way Exact: Flop", 10, || {
        let _ = engine.run_exact(&known(&["As Ah", "Ks Kh", "Qs Qh"], flop)).unwrap();
    });

    bench("6-way Exact: Turn", 10, || {
        let hands = ["As Ah", "Ks Kh", "Qs Qh", "Js Jh", "Tc Td", "9c 9d"];
        let _ = engine.run_exact(&known(&hands, turn)).unwrap();
    });

    println!("\n--- Hero vs N Random Opponents (10k iterations) ---");

    let aces = cards("As Ah");
    for opponents in [1, 2, 5, 8] {
        let situation = Situation::heads_up([aces[0], aces[1]], opponents);
        bench(&format!("Hero vs {} random: Preflop", opponents), 50, || {
            let _ = engine.run_monte_carlo(&situation, 10_000).unwrap();
        });
    }

    println!("\n--- MC Iteration Scaling (Preflop HU vs random) ---");

    let situation = Situation::heads_up([aces[0], aces[1]], 1);
    for iterations in [1_000u64, 10_000, 100_000, 1_000_000] {
        let runs = (1_000_000 / iterations).clamp(3, 300);
        bench(&format!("MC {} iterations", iterations), runs, || {
            let _ = engine.run_monte_carlo(&situation, iterations).unwrap();
        });
    }

    println!("\n--- Exact vs Monte Carlo (AsAh vs KsKh, flop {}) ---", flop);

    let situation = known(&["As Ah", "Ks Kh"], flop);
    let exact = engine.run_exact(&situation).unwrap();
    let sampled = engine.run_monte_carlo(&situation, 200_000).unwrap();
    println!("exact: {:.4}   monte carlo (200k): {:.4}", exact[0].equity(), sampled[0].equity());
}
