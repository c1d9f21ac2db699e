use concord_core::tokenizer::{tokenize, tokenize_with_positions};
use concord_core::{Concordance, Corpus};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../../README.md");
    c.bench_function("tokenize_readme", |b| b.iter(|| tokenize(text)));
    c.bench_function("tokenize_readme_positions", |b| b.iter(|| tokenize_with_positions(text)));
}

fn bench_concordance(c: &mut Criterion) {
    let text = include_str!("../../README.md");
    let mut corpus = Corpus::new();
    for i in 0..10 {
        corpus.add(format!("readme{i}.txt"), text).expect("capacity");
    }
    c.bench_function("concordance_ten_readmes", |b| b.iter(|| Concordance::for_corpus(&corpus)));
}

criterion_group!(benches, bench_tokenize, bench_concordance);
criterion_main!(benches);
