//! Benchmarks for the explanation markup formatter.
//!
//! Run with: `cargo bench --package reprcompare_format`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use reprcompare_format::format_explanation;

fn nested_markup(depth: usize) -> String {
    let mut text = String::from("assert f(x)");
    for i in 0..depth {
        text.push_str("\n{f");
        text.push_str(&i.to_string());
        text.push_str(" = value\n~continued");
    }
    for _ in 0..depth {
        text.push_str("\n}");
    }
    text
}

fn bench_format_explanation(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/explanation");

    for depth in [1, 10, 100] {
        let text = nested_markup(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &text, |b, text| {
            b.iter(|| black_box(format_explanation(text)));
        });
    }

    group.bench_function("escaped_newlines", |b| {
        let text = "line\n".repeat(500);
        b.iter(|| black_box(format_explanation(&text)));
    });

    group.finish();
}

criterion_group!(benches, bench_format_explanation);
criterion_main!(benches);
