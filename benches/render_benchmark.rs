//! Benchmarks for notepress rendering performance.
//!
//! Run with: cargo bench
//!
//! Covers line classification, text wrapping, and full-document rendering
//! to in-memory PDF bytes at various document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notepress::{classify_lines, Document, RenderOptions};

/// Creates a synthetic notes body with the given number of lines.
fn create_test_body(line_count: usize) -> String {
    let mut body = String::from("# Benchmark Notes\n");
    for i in 0..line_count {
        match i % 5 {
            0 => body.push_str(&format!("## Section {}\n", i / 5 + 1)),
            1 | 2 => body.push_str(&format!(
                "- bullet item {} with enough text to exercise the word wrapper a little\n",
                i
            )),
            3 => body.push_str(&format!(
                "Paragraph {} with a realistic amount of prose that wraps across more \
                 than one printed line on an A4 page at the default font size.\n",
                i
            )),
            _ => body.push('\n'),
        }
    }
    body
}

/// Benchmark line classification at various sizes.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for line_count in [10, 100, 1000].iter() {
        let body = create_test_body(*line_count);
        let size = body.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("lines", line_count), &body, |b, body| {
            b.iter(|| classify_lines(black_box(body)));
        });
    }

    group.finish();
}

/// Benchmark greedy word wrapping.
fn bench_wrapping(c: &mut Criterion) {
    let short = "A single short line of text.";
    let long = "A much longer paragraph of text that has to be wrapped across many \
                printed lines, with a mixture of short and somewhat-longer words so \
                the greedy algorithm does representative work on every iteration."
        .repeat(4);

    c.bench_function("wrap_short", |b| {
        b.iter(|| notepress::layout::wrap(black_box(short), 12.0, 538.0));
    });

    c.bench_function("wrap_long", |b| {
        b.iter(|| notepress::layout::wrap(black_box(&long), 12.0, 538.0));
    });
}

/// Benchmark full-document rendering to PDF bytes.
fn bench_document_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_rendering");
    group.sample_size(20);

    // Empty font dir pins the builtin family so the benchmark does not
    // depend on system fonts.
    let font_dir = tempfile::tempdir().unwrap();

    for line_count in [10, 100, 500].iter() {
        let body = create_test_body(*line_count);
        let document = Document::new("Benchmark", &body);
        let options = RenderOptions::default().with_font_dir(font_dir.path());

        group.bench_with_input(
            BenchmarkId::new("lines", line_count),
            &document,
            |b, doc| {
                b.iter(|| {
                    let _ = notepress::render_to_bytes_with_options(black_box(doc), &options);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_wrapping,
    bench_document_rendering,
);
criterion_main!(benches);
