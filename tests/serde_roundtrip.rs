#![cfg(feature = "serde")]

use holdem_equity::*;

#[test]
fn outcome_counts_survive_json() {
    let mut outcome = Outcome::with_categories();
    outcome.add_win(HandCategory::Flush);
    outcome.add_split(HandCategory::Straight);
    outcome.add_loss(HandCategory::Pair);
    outcome.add_loss(HandCategory::Pair);
    let json = serde_json::to_string(&outcome).unwrap();
    let back: Outcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
    assert_eq!((back.win(), back.split(), back.loss()), (1, 1, 2));

    let plain = Outcome::from_counts(u64::MAX - 1, 7, 0);
    let back: Outcome = serde_json::from_str(&serde_json::to_string(&plain).unwrap()).unwrap();
    assert_eq!(back, plain);
}

#[test]
fn matrix_and_situation_survive_json() {
    let mut matrix = OutcomeMatrix::new(3);
    matrix.record_pair(0, 2, Showdown::Win, HandCategory::Pair, HandCategory::HighCard);
    let back: OutcomeMatrix = serde_json::from_str(&serde_json::to_string(&matrix).unwrap()).unwrap();
    assert_eq!(back, matrix);

    let c = parse_cards("As Kd 7h").unwrap();
    let situation = Situation::heads_up([c[0], c[1]], 2).with_board(&c[2..]);
    let back: Situation = serde_json::from_str(&serde_json::to_string(&situation).unwrap()).unwrap();
    assert_eq!(back, situation);
}
