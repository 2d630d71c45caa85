// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use report_browser::{
    csv,
    facets::FacetLists,
    filter::{self, FilterState},
    normalize::{self, SourceProfile},
};

const AGENCIES: [&str; 5] = ["GAO", "Treasury", "OMB", "DoD", "HHS"];
const TOPICS: [&str; 6] = ["Budget", "Tax", "Defense", "Health", "Energy", "Trade"];

/// Synthetic secondary-source CSV with `n` rows and some quoted fields.
fn sample_csv(n: usize) -> String {
    let mut out = String::from("title,summary,source,reportType,topics,date,tags\n");
    for i in 0..n {
        let topic = TOPICS[i % TOPICS.len()];
        out.push_str(&format!(
            "Report {i} on {topic},\"Notes, part {i}\",{},{},\"{topic}; {}\",{}-{:02}-01,audit;q{}\n",
            AGENCIES[i % AGENCIES.len()],
            if i % 3 == 0 { "AFR" } else { "PAR" },
            TOPICS[(i + 1) % TOPICS.len()],
            2015 + i % 10,
            1 + i % 12,
            i % 4,
        ));
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let text = sample_csv(5_000);
    let table = csv::decode(&text);
    let profile = SourceProfile::secondary("");
    let reports = normalize::normalize(&table.rows, &profile);

    c.bench_function("decode_5k", |b| {
        b.iter(|| black_box(csv::decode(black_box(&text))).row_count())
    });

    c.bench_function("normalize_5k", |b| {
        b.iter(|| black_box(normalize::normalize(black_box(&table.rows), &profile)).len())
    });

    c.bench_function("facets_5k", |b| {
        b.iter(|| black_box(FacetLists::build(black_box(&reports))).subjects.len())
    });

    let state = FilterState {
        query: "budget".into(),
        subjects: ["GAO".to_string(), "OMB".to_string()].into(),
        year: Some("2019".into()),
        ..Default::default()
    };
    c.bench_function("filter_5k", |b| {
        b.iter(|| black_box(filter::filter_indices(black_box(&reports), &state)).len())
    });

    c.bench_function("filter_raw_5k", |b| {
        b.iter(|| black_box(filter::filter_raw_rows(black_box(&table), "notes, part 42")).len())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
