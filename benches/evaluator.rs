use holdem_equity::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_five_cards,
        selecting_best_of_seven,
        scoring_best_of_seven,
        sampling_heads_up_equity,
        enumerating_turn_equity,
}

fn random_cards(seed: u64, n: usize) -> Vec<Card> {
    let mut ids: Vec<u8> = (0..52).collect();
    ids.shuffle(&mut StdRng::seed_from_u64(seed));
    ids[..n].iter().map(|&i| Card::from_id(i)).collect()
}

fn classifying_five_cards(c: &mut criterion::Criterion) {
    let cards = random_cards(1, 5);
    let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("classify a 5-card Hand", |b| b.iter(|| classify_five(five)));
}

fn selecting_best_of_seven(c: &mut criterion::Criterion) {
    let cards = random_cards(2, 7);
    let board = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("select the best Hand of 7 cards", |b| {
        b.iter(|| best_of_seven(&board, [cards[5], cards[6]]))
    });
}

fn scoring_best_of_seven(c: &mut criterion::Criterion) {
    let cards = random_cards(3, 7);
    let board = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    c.bench_function("score the best Hand of 7 cards", |b| {
        b.iter(|| Score::of(&best_of_seven(&board, [cards[5], cards[6]])))
    });
}

fn sampling_heads_up_equity(c: &mut criterion::Criterion) {
    let engine = EquityEngine::new(EngineConfig::default().with_seed(7).with_categories(false));
    let aces = parse_cards("Ac Ad").unwrap();
    let situation = Situation::heads_up([aces[0], aces[1]], 1);
    c.bench_function("sample 10k preflop showdowns vs a random hand", |b| {
        b.iter(|| engine.run_monte_carlo(&situation, 10_000))
    });
}

fn enumerating_turn_equity(c: &mut criterion::Criterion) {
    let engine = EquityEngine::new(EngineConfig::default().with_categories(false));
    let cards = parse_cards("As Ah Ks Kh Kc Qd 2h 3s").unwrap();
    let situation = Situation::new()
        .with_known_player(cards[0], cards[1])
        .with_known_player(cards[2], cards[3])
        .with_board(&cards[4..]);
    c.bench_function("enumerate every river on a known turn", |b| {
        b.iter(|| engine.run_exact(&situation))
    });
}
