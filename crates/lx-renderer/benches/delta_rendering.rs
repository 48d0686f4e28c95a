//! Benchmarks for delta rendering performance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lx_delta::{Attributes, Delta, ListKind, Op};
use lx_renderer::{DeltaRenderer, HtmlBackend, TextBackend};

/// Generate a delta with paragraphs followed by alternating list blocks.
fn generate_delta(paragraphs: usize, list_items: usize) -> Delta {
    let bold = Attributes {
        bold: true,
        ..Default::default()
    };
    let mut ops = Vec::with_capacity(paragraphs * 3 + list_items * 2);

    for i in 0..paragraphs {
        ops.push(Op::text(format!("Paragraph {i} with ")));
        ops.push(Op::text("bold").with_attributes(bold.clone()));
        ops.push(Op::newline());
    }
    for i in 0..list_items {
        let kind = if (i / 5) % 2 == 0 {
            ListKind::Bullet
        } else {
            ListKind::Ordered
        };
        ops.push(Op::text(format!("Item {i}")));
        ops.push(Op::newline().with_attributes(Attributes {
            list: Some(kind),
            ..Default::default()
        }));
    }
    Delta::new(ops)
}

fn bench_render_simple(c: &mut Criterion) {
    let delta = generate_delta(1, 0);
    let renderer = DeltaRenderer::<HtmlBackend>::new();

    c.bench_function("render_simple_delta", |b| {
        b.iter(|| renderer.render(&delta));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let html = DeltaRenderer::<HtmlBackend>::new();
    let text = DeltaRenderer::<TextBackend>::new();

    let mut group = c.benchmark_group("render_by_size");
    for size in [10, 100, 1000] {
        let delta = generate_delta(size, size);
        group.throughput(Throughput::Elements(delta.ops.len() as u64));
        group.bench_with_input(BenchmarkId::new("html", size), &delta, |b, delta| {
            b.iter(|| html.render(delta));
        });
        group.bench_with_input(BenchmarkId::new("text", size), &delta, |b, delta| {
            b.iter(|| text.render(delta));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_simple, bench_render_varying_sizes);
criterion_main!(benches);
