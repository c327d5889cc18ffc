//! Benchmarks for hand classification and scoring.
//!
//! Run with: cargo bench --bench scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_ante::{classify, score_hand, Card, Deck, GameRng, HandLevels, HandTable, JokerCatalog, Rank, Suit};

fn sample_hands(count: usize) -> Vec<Vec<Card>> {
    let mut rng = GameRng::new(42);
    (0..count)
        .map(|_| {
            let mut deck = Deck::shuffled(&mut rng);
            deck.deal(5)
        })
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let hands = sample_hands(1_000);

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(hands.len() as u64));
    group.bench_function("random_five_card_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(classify(hand));
            }
        });
    });
    group.finish();
}

fn benchmark_score_with_jokers(c: &mut Criterion) {
    let table = HandTable::default();
    let levels = HandLevels::new();
    let catalog = JokerCatalog::default();
    let jokers: Vec<_> = catalog.iter().cloned().collect();
    let royal = [
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Hearts),
    ];

    c.bench_function("score_royal_flush_full_catalog", |b| {
        b.iter(|| black_box(score_hand(black_box(&royal), &jokers, &table, &levels)));
    });

    let hands = sample_hands(1_000);
    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Elements(hands.len() as u64));
    group.bench_function("random_hands_full_catalog", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(score_hand(hand, &jokers, &table, &levels));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_score_with_jokers);
criterion_main!(benches);
