use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use folio::{
    domain::{
        content::Content,
        text::{wrap_text, wrap_words},
    },
    presentation::layout::PageLayout,
};

const ABOUT: &str = "I build fast, reliable software close to the metal: network services, \
storage engines and the command-line tools that glue them together. Most of my spare time \
goes into open source, where I maintain a handful of crates and review far more pull \
requests than I write. 日本語の文章も同じ幅で折り返されることを確認するための一文です。";

fn wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    for width in [20, 60, 116] {
        group.bench_with_input(BenchmarkId::new("wrap_text", width), &width, |b, &w| {
            b.iter(|| wrap_text(black_box(ABOUT), black_box(w)))
        });
        group.bench_with_input(BenchmarkId::new("wrap_words", width), &width, |b, &w| {
            b.iter(|| wrap_words(black_box(ABOUT), black_box(w)))
        });
    }
    group.finish();
}

fn layout(c: &mut Criterion) {
    let content = match Content::bundled() {
        Ok(content) => content,
        Err(e) => panic!("bundled content: {e}"),
    };
    let mut group = c.benchmark_group("page_layout");
    for width in [60u16, 100, 160] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &w| {
            b.iter(|| PageLayout::compute(black_box(&content), black_box(w)))
        });
    }
    group.finish();
}

criterion_group!(benches, wrapping, layout);
criterion_main!(benches);
