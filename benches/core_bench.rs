use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use scaffold_span_planner::{plan_spans, ScaffoldLine, SpanAllocator};
use std::hint::black_box;

fn build_synthetic_lines(count: usize) -> Vec<ScaffoldLine> {
    (0..count)
        .map(|index| {
            // Längen 600..30000 in 150er-Schritten, abwechselnd in vier Richtungen
            let length = 600.0 + ((index * 7) % 197) as f64 * 150.0;
            let end = match index % 4 {
                0 => DVec2::new(length, 0.0),
                1 => DVec2::new(0.0, length),
                2 => DVec2::new(-length, 0.0),
                _ => DVec2::new(length * 0.6, length * 0.8),
            };
            ScaffoldLine::new(format!("line-{index}"), DVec2::ZERO, end)
        })
        .collect()
}

fn bench_span_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_planning");

    for &length in &[1800.0f64, 9300.0, 54_150.0] {
        group.bench_with_input(BenchmarkId::new("plan", length), &length, |b, &len| {
            b.iter(|| {
                let plan = plan_spans(black_box(len)).expect("Länge sollte planbar sein");
                black_box(plan.segments.len())
            })
        });
    }

    group.finish();
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");
    let allocator = SpanAllocator::default();

    for &line_count in &[100usize, 1_000usize] {
        let lines = build_synthetic_lines(line_count);

        group.bench_with_input(
            BenchmarkId::new("allocate_batch", line_count),
            &lines,
            |b, lines| {
                b.iter(|| {
                    let mut blocks = 0usize;
                    for line in lines {
                        if let Ok(allocation) = allocator.allocate(black_box(line)) {
                            blocks += allocation.blocks.len();
                        }
                    }
                    black_box(blocks)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_span_planning, bench_allocation);
criterion_main!(core_benches);
