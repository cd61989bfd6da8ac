use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stt_core::grouper::CommonPrefixGrouper;

const PROJECTS: &[&str] = &["billing", "search", "infra", "mobile", "website"];
const TASKS: &[&str] = &["review", "meeting", "bugfix", "planning", "support"];

fn history(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "project {} {} ticket-{}",
                PROJECTS[i % PROJECTS.len()],
                TASKS[(i / PROJECTS.len()) % TASKS.len()],
                i % 97
            )
        })
        .collect()
}

fn bench_learn(c: &mut Criterion) {
    let mut group = c.benchmark_group("learn_all");
    for n in [100, 1_000, 10_000] {
        let lines = history(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &lines, |b, lines| {
            b.iter(|| {
                let mut g = CommonPrefixGrouper::new();
                g.learn_all(lines);
                g
            })
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut g = CommonPrefixGrouper::new();
    g.learn_all(history(10_000));

    c.bench_function("groups_of", |b| {
        b.iter(|| g.get_groups_of("project search planning ticket-42 notes"))
    });
    c.bench_function("expansions_root", |b| {
        b.iter(|| g.get_possible_expansions("pro"))
    });
    c.bench_function("expansions_branch", |b| {
        b.iter(|| g.get_possible_expansions("project search "))
    });
}

criterion_group!(benches, bench_learn, bench_queries);
criterion_main!(benches);
