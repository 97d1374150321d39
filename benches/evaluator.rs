use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::deck::Deck;
use holdem_engine::evaluator::{evaluate_five, evaluate_seven};

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let hi = five("Ah Kd 7s 5c 2d");
    let sf = five("As Ks Qs Js 10s");

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let seven: [Card; 7] =
        parse_cards("As Ah Ks Qs Js 10s 9s").unwrap().try_into().unwrap();
    c.bench_function("evaluate_seven", |b| b.iter(|| evaluate_seven(black_box(&seven))));
}

fn bench_shuffled_showdowns(c: &mut Criterion) {
    // 100 random 7-card boards from seeded decks, evaluated back to back.
    let hands: Vec<[Card; 7]> = (0..100u64)
        .map(|seed| {
            let mut deck = Deck::shuffled_from_seed(seed);
            deck.draw_n(7).unwrap().try_into().unwrap()
        })
        .collect();
    c.bench_function("evaluate_seven/shuffled_x100", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(evaluate_seven(black_box(hand)));
            }
        })
    });
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_shuffled_showdowns);
criterion_main!(benches);
