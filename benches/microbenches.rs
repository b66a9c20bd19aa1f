//! Criterion microbenches for labgrid parsing and writing.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - TextGrid parsing of both text forms (from_textgrid_slice)
//! - TextGrid long-form writing (to_textgrid_string)
//! - Lab parsing and writing (from_lab_str, to_lab_string)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use labgrid::ir::io_lab::{from_lab_str, to_lab_string};
use labgrid::ir::io_textgrid::{from_textgrid_slice, to_textgrid_string, TextGridFormat};

// Include test fixtures at compile time (no file I/O during benchmark)
const LONG_FIXTURE: &str = include_str!("../tests/fixtures/praat_long.TextGrid");
const SHORT_FIXTURE: &str = include_str!("../tests/fixtures/praat_short.TextGrid");
const LAB_FIXTURE: &str = include_str!("../tests/fixtures/sample.lab");

fn bench_textgrid_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("textgrid_parse");

    for (label, fixture) in [("long", LONG_FIXTURE), ("short", SHORT_FIXTURE)] {
        let bytes = fixture.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                let grid = from_textgrid_slice(black_box(bytes), "bench").unwrap();
                black_box(grid)
            })
        });
    }

    group.finish();
}

/// Parses the fixture once, then benchmarks writing it back out.
fn bench_textgrid_write(c: &mut Criterion) {
    let grid = from_textgrid_slice(LONG_FIXTURE.as_bytes(), "bench")
        .expect("Failed to parse TextGrid fixture");

    let mut group = c.benchmark_group("textgrid_write");
    group.throughput(Throughput::Elements(grid.len() as u64));

    group.bench_function("to_textgrid_string_long", |b| {
        b.iter(|| {
            let text = to_textgrid_string(black_box(&grid), TextGridFormat::Long);
            black_box(text)
        })
    });

    group.finish();
}

fn bench_lab(c: &mut Criterion) {
    let lab = from_lab_str(LAB_FIXTURE, "bench").expect("Failed to parse lab fixture");

    let mut group = c.benchmark_group("lab");
    group.throughput(Throughput::Bytes(LAB_FIXTURE.len() as u64));

    group.bench_function("from_lab_str", |b| {
        b.iter(|| {
            let lab = from_lab_str(black_box(LAB_FIXTURE), "bench").unwrap();
            black_box(lab)
        })
    });
    group.bench_function("to_lab_string", |b| {
        b.iter(|| black_box(to_lab_string(black_box(&lab))))
    });

    group.finish();
}

criterion_group!(benches, bench_textgrid_parse, bench_textgrid_write, bench_lab);
criterion_main!(benches);
