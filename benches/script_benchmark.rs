//! Script benchmark: Measure emission throughput.
//!
//! The interesting paths are the character accumulator (hot in cell-by-cell
//! update models) and payload escaping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recsh::{ConsoleColor, ScriptWriter};
use std::io;

fn char_streaming(c: &mut Criterion) {
    c.bench_function("write_char_stream_4k", |b| {
        b.iter(|| {
            let mut writer = ScriptWriter::new(io::sink()).unwrap();
            for _ in 0..4096 {
                writer.write_char(black_box('x')).unwrap();
            }
            writer.close(0).unwrap();
        });
    });
}

fn escaped_write(c: &mut Criterion) {
    let payload = "line one\r\nsaid \"hello\" with a \\ backslash\n".repeat(32);
    c.bench_function("write_str_escape_heavy", |b| {
        b.iter(|| {
            let mut writer = ScriptWriter::new(io::sink()).unwrap();
            writer.write_str(black_box(&payload)).unwrap();
            writer.close(0).unwrap();
        });
    });
}

fn plain_write(c: &mut Criterion) {
    let payload = "the quick brown fox jumps over the lazy dog ".repeat(32);
    c.bench_function("write_str_plain", |b| {
        b.iter(|| {
            let mut writer = ScriptWriter::new(io::sink()).unwrap();
            writer.write_str(black_box(&payload)).unwrap();
            writer.close(0).unwrap();
        });
    });
}

fn color_lookup(c: &mut Criterion) {
    c.bench_function("color_from_code", |b| {
        b.iter(|| ConsoleColor::from_code(black_box(999)));
    });
}

criterion_group!(benches, char_streaming, escaped_write, plain_write, color_lookup);
criterion_main!(benches);
