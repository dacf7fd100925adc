use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gitgate::gateway::{GitSubcommand, find_dangerous_pattern, truncate_output};

const SAFE_ARGS: &str = "--oneline --graph --decorate origin/main..HEAD -- src/";
const DANGEROUS_ARGS: &str = "origin main --force-with-lease --force";

fn generate_output(chars: usize) -> String {
    "diff --git a/src/lib.rs b/src/lib.rs\n+added line\n-removed line\n"
        .repeat(chars / 60 + 1)
}

fn bench_danger_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_dangerous_pattern");

    group.bench_with_input(
        BenchmarkId::new("safe", "no match, full list walk"),
        &SAFE_ARGS,
        |b, input| b.iter(|| find_dangerous_pattern(black_box(input))),
    );

    group.bench_with_input(
        BenchmarkId::new("dangerous", "first pattern hit"),
        &DANGEROUS_ARGS,
        |b, input| b.iter(|| find_dangerous_pattern(black_box(input))),
    );

    group.finish();
}

fn bench_subcommand_parse(c: &mut Criterion) {
    c.bench_function("subcommand_parse_allowed", |b| {
        b.iter(|| GitSubcommand::parse(black_box("checkout")))
    });

    c.bench_function("subcommand_parse_rejected", |b| {
        b.iter(|| GitSubcommand::parse(black_box("filter-branch")))
    });
}

fn bench_truncate(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncate_output");

    let small = generate_output(1_000);
    group.bench_with_input(BenchmarkId::new("small", "1k chars"), &small, |b, input| {
        b.iter(|| truncate_output(black_box(input), 10_000))
    });

    let large = generate_output(100_000);
    group.bench_with_input(
        BenchmarkId::new("large", "100k chars"),
        &large,
        |b, input| b.iter(|| truncate_output(black_box(input), 10_000)),
    );

    group.finish();
}

criterion_group!(benches, bench_danger_scan, bench_subcommand_parse, bench_truncate);
criterion_main!(benches);
