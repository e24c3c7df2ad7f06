use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mterm_core::{Parser, Terminal};

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Repeat base patterns to roughly 64 KB so throughput numbers are stable.
fn corpora() -> Vec<(&'static str, Vec<u8>)> {
    const TARGET: usize = 64 * 1024;

    let ascii_line = b"The quick brown fox jumps over the lazy dog. 0123456789 ABCDEF\r\n";

    let sgr_line = b"\x1b[1;32m   Compiling\x1b[0m mterm-core v0.1.0 \
\x1b[2m(/repo/crates/mterm-core)\x1b[0m\r\n\
\x1b[1;33mwarning\x1b[0m: unused variable `\x1b[1mx\x1b[0m`\r\n\
\x1b[38;5;196mIDX196\x1b[0m \x1b[48;2;1;2;3mRGB\x1b[0m\r\n";

    // ncurses-style full-screen updates.
    let cursor_line = b"\x1b[1;1H\x1b[2J\x1b[1;1HABCDEFGHIJ\
\x1b[2;1HKLMNOPQRST\x1b[3;1H0123456789\
\x1b[1;5H\x1b[0K\x1b[3;8H\x1b[1P\x1b[2;3H\x1b[2@  \x1b[5;20r\x1b[20;1H\n\n\x1b[r";

    let utf8_line = "日本語テスト café résumé ─┼─ λ→∞ line of text\r\n".as_bytes();

    let osc_line = b"\x1b]0;build: step 3/7\x07\x1b]8;;https://example.com/a\x1b\\link\x1b]8;;\x1b\\\r\n";

    [
        ("ascii_64k", ascii_line.as_slice()),
        ("sgr_64k", sgr_line.as_slice()),
        ("cursor_64k", cursor_line.as_slice()),
        ("utf8_64k", utf8_line),
        ("osc_64k", osc_line.as_slice()),
    ]
    .into_iter()
    .map(|(id, line)| (id, line.repeat(TARGET / line.len())))
    .collect()
}

fn parser_throughput_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_throughput");
    for (id, bytes) in corpora() {
        eprintln!(
            "[mterm-core bench] corpus={} bytes={} fnv1a64={:016x}",
            id,
            bytes.len(),
            fnv1a64(&bytes)
        );
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        // Baseline: one allocated Vec<Action> per call.
        group.bench_with_input(BenchmarkId::new("feed_vec", id), &bytes, |b, bytes| {
            let mut parser = Parser::new();
            b.iter(|| {
                let actions = parser.feed(black_box(bytes));
                black_box(actions.len());
            });
        });

        // Reused scratch buffer, as the terminal drives it.
        group.bench_with_input(BenchmarkId::new("advance_into", id), &bytes, |b, bytes| {
            let mut parser = Parser::new();
            let mut actions = Vec::with_capacity(8);
            b.iter(|| {
                let mut count = 0usize;
                for &byte in black_box(bytes.as_slice()) {
                    actions.clear();
                    parser.advance_into(byte, &mut actions);
                    count += actions.len();
                }
                black_box(count);
            });
        });
    }
    group.finish();
}

fn terminal_pipeline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_pipeline");
    for (id, bytes) in corpora() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("feed", id), &bytes, |b, bytes| {
            b.iter(|| {
                let mut term = Terminal::new(40, 120);
                term.feed(black_box(bytes));
                black_box(term.cursor());
            });
        });
    }
    group.finish();
}

fn replay_bench(c: &mut Criterion) {
    let mut term = Terminal::new(40, 120);
    term.feed(b"\x1b[3;30r\x1b[?7;25;2004h\x1b[4h\x1b[1;3;38;2;10;20;30;48;5;17m");
    term.feed(b"\x1b]8;id=1;https://example.com\x1b\\\x1b[12;40H");

    c.bench_function("replay_string", |b| {
        b.iter(|| black_box(black_box(&term).replay_string()));
    });
}

criterion_group!(
    benches,
    parser_throughput_bench,
    terminal_pipeline_bench,
    replay_bench
);
criterion_main!(benches);
