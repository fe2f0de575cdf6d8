//! Quote Resolution Benchmarks
//!
//! Performance benchmarks for resolving quote selectors against a
//! repetitive document, where disambiguation has real work to do.
//!
//! Run with: `cargo bench --bench resolve_performance`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use anclaje::TextQuoteSelector;

/// Build a document of `copies` near-identical paragraphs with one
/// unique sentence in the middle.
fn build_document(copies: usize) -> String {
    let mut document = String::new();
    for i in 0..copies {
        document.push_str(
            "Works of authorship include literary works, musical works, and dramatic works. ",
        );
        if i == copies / 2 {
            document.push_str("The unique works sit here, fixed in a tangible medium. ");
        }
        document.push_str(&format!("Paragraph {} restates the same categories again. ", i));
    }
    document
}

fn bench_quote_resolution(c: &mut Criterion) {
    let document = build_document(100);

    let mut group = c.benchmark_group("quote_resolution");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("unique_exact", |b| {
        let quote = TextQuoteSelector::from_exact("tangible medium").unwrap();
        b.iter(|| {
            let position = quote.resolve(black_box(&document)).unwrap();
            black_box(position)
        })
    });

    group.bench_function("context_disambiguation", |b| {
        let quote = TextQuoteSelector::new("works", "unique", "").unwrap();
        b.iter(|| {
            let position = quote.resolve(black_box(&document)).unwrap();
            black_box(position)
        })
    });

    group.finish();
}

fn bench_unique_quote_derivation(c: &mut Criterion) {
    let document = build_document(100);
    let anchor = TextQuoteSelector::new("works", "unique", "")
        .unwrap()
        .resolve(&document)
        .unwrap();

    let mut group = c.benchmark_group("unique_quote_derivation");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("as_unique_quote", |b| {
        b.iter(|| {
            let quote = anchor.as_unique_quote(black_box(&document)).unwrap();
            black_box(quote)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_quote_resolution, bench_unique_quote_derivation);
criterion_main!(benches);
