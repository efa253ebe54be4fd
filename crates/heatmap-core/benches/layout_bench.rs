// File: crates/heatmap-core/benches/layout_bench.rs
// Summary: Scale derivation and per-record cell mapping cost.

use heatmap_core::{map_cell, Layout, Record, Scales};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_records(years: i32) -> Vec<Record> {
    (0..years)
        .flat_map(|y| (1..=12).map(move |m| Record::new(1753 + y, m, ((y * 12 + m) as f64 * 0.37).cos() * 2.5)))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let layout = Layout::default();
    for &years in &[50i32, 263i32, 1000i32] {
        let records = gen_records(years);
        group.bench_with_input(BenchmarkId::new("scales", years), &records, |b, r| {
            b.iter(|| black_box(Scales::build(r, &layout).expect("scales")));
        });
        let scales = Scales::build(&records, &layout).expect("scales");
        group.bench_with_input(BenchmarkId::new("cells", years), &records, |b, r| {
            b.iter(|| {
                for rec in r {
                    black_box(map_cell(rec, 8.66, &scales).expect("cell"));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
