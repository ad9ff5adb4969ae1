//! Performance benchmarks for the render pipeline
//!
//! Filter/sort and chart projection over repository lists of growing size.
//! Run with: cargo bench

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ghtrack::charts::{LanguageHistogram, StarSeries};
use ghtrack::models::Repository;
use ghtrack::render::{filter_and_sort, FilterCriteria, RepoListView, SortKey};

const LANGUAGES: [Option<&str>; 6] = [
    Some("Rust"),
    Some("Go"),
    Some("TypeScript"),
    Some("Python"),
    None,
    Some("C"),
];

/// Generate repositories with varied names, languages and counts
fn generate_repos(count: usize) -> Vec<Repository> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| Repository {
            name: format!("project-{:05}", (i * 7919) % count.max(1)),
            description: Some(format!("Tool number {} for parsing things", i)),
            html_url: format!("https://github.com/bench/project-{}", i),
            language: LANGUAGES[i % LANGUAGES.len()].map(str::to_string),
            stargazers_count: if i % 5 == 0 { None } else { Some((i * 31 % 997) as u64) },
            forks_count: Some((i % 13) as u64),
            updated_at: Some(base + Duration::hours((i * 37 % 5000) as i64)),
            fork: i % 4 == 0,
            topics: vec!["cli".to_string(), format!("topic-{}", i % 9)],
        })
        .collect()
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_sort");

    for size in [10, 100, 1_000, 10_000].iter() {
        let repos = generate_repos(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for sort in SortKey::ALL {
            let criteria = FilterCriteria::new("pars", false, sort);
            group.bench_with_input(
                BenchmarkId::new(sort.as_str(), size),
                &repos,
                |b, repos| {
                    b.iter(|| {
                        let filtered = filter_and_sort(black_box(repos), black_box(&criteria));
                        black_box(filtered.len())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_repo_list_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("repo_list_view");
    let criteria = FilterCriteria::new("", true, SortKey::Updated);

    for size in [100, 1_000].iter() {
        let repos = generate_repos(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &repos, |b, repos| {
            b.iter(|| black_box(RepoListView::build(black_box(repos), &criteria)));
        });
    }

    group.finish();
}

fn bench_chart_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_projection");

    for size in [10, 100, 1_000, 10_000].iter() {
        let repos = generate_repos(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("languages", size), &repos, |b, repos| {
            b.iter(|| black_box(LanguageHistogram::from_repos(black_box(repos))));
        });
        group.bench_with_input(BenchmarkId::new("top_stars", size), &repos, |b, repos| {
            b.iter(|| black_box(StarSeries::from_repos(black_box(repos))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_and_sort,
    bench_repo_list_view,
    bench_chart_projection,
);

criterion_main!(benches);
