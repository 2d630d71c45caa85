// tests/filter.rs
//
// Conjunctive filter semantics and facet lists, without any UI.
//
use std::collections::BTreeSet;

use report_browser::csv::decode;
use report_browser::facets::{build_facets, Dimension, FacetLists};
use report_browser::filter::{filter, filter_indices, filter_raw_rows, FilterState};
use report_browser::report::CanonicalReport;
use report_browser::store::ReportSet;

fn report(title: &str, date: &str, report_type: &str) -> CanonicalReport {
    CanonicalReport {
        title: title.into(),
        date: date.into(),
        report_type: report_type.into(),
        ..Default::default()
    }
}

fn pair() -> Vec<CanonicalReport> {
    vec![
        report("Budget Report", "2021-05-01", "CRS"),
        report("Tax Policy", "2022-01-01", "AFR"),
    ]
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn query_year_and_both() {
    let reports = pair();

    let q = FilterState { query: "tax".into(), ..Default::default() };
    let hits = filter(&reports, &q);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Tax Policy");

    let y = FilterState { year: Some("2021".into()), ..Default::default() };
    let hits = filter(&reports, &y);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Budget Report");

    let both = FilterState { query: "tax".into(), year: Some("2021".into()), ..Default::default() };
    assert!(filter(&reports, &both).is_empty());
}

#[test]
fn query_is_case_insensitive_and_searches_summary() {
    let mut reports = pair();
    reports[0].summary = "Notes on TAXATION".into();
    let q = FilterState { query: "TAX".into(), ..Default::default() };
    assert_eq!(filter_indices(&reports, &q), vec![0, 1]);
}

#[test]
fn empty_state_is_identity() {
    let reports = pair();
    let hits: Vec<CanonicalReport> = filter(&reports, &FilterState::default()).into_iter().cloned().collect();
    assert_eq!(hits, reports);
}

#[test]
fn survivors_keep_input_order() {
    let reports = vec![
        report("c tax", "2020", "AFR"),
        report("a", "2020", "AFR"),
        report("b tax", "2020", "AFR"),
        report("a tax", "2020", "AFR"),
    ];
    let q = FilterState { query: "tax".into(), ..Default::default() };
    assert_eq!(filter_indices(&reports, &q), vec![0, 2, 3]);
}

#[test]
fn report_type_badges() {
    let reports = pair();
    let s = FilterState { report_types: set(&["AFR", "PAR"]), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![1]);
}

#[test]
fn tags_are_independent_of_type() {
    let mut reports = pair();
    reports[0].tags = set(&["audit"]);
    reports[1].tags = set(&["CRS"]);

    // Tag "CRS" matches the free-form tag, not the type.
    let s = FilterState { tags: set(&["CRS"]), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![1]);

    let s = FilterState { tags: set(&["audit"]), report_types: set(&["AFR"]), ..Default::default() };
    assert!(filter_indices(&reports, &s).is_empty());
}

#[test]
fn subject_depends_on_primary_flag() {
    let reports = vec![
        CanonicalReport {
            primary: true,
            topic: "Budget".into(),
            topics: vec!["Budget".into(), "Defense".into()],
            agency: "".into(),
            ..report("A", "2021", "CRS")
        },
        CanonicalReport { agency: "Budget".into(), ..report("B", "2021", "AFR") },
        CanonicalReport { agency: "GAO".into(), ..report("C", "2021", "AFR") },
    ];

    let s = FilterState { subjects: set(&["Budget"]), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![0, 1]);

    // Secondary topic of a primary report also matches.
    let s = FilterState { subjects: set(&["Defense"]), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![0]);

    let s = FilterState { subjects: set(&["GAO", "Defense"]), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![0, 2]);
}

#[test]
fn year_is_a_prefix_match() {
    let reports = vec![report("a", "2021-05", "AFR"), report("b", "2021", "AFR"), report("c", "", "AFR")];
    let s = FilterState { year: Some("2021".into()), ..Default::default() };
    assert_eq!(filter_indices(&reports, &s), vec![0, 1]);
}

#[test]
fn facets_are_sorted_and_deduplicated() {
    let reports: Vec<CanonicalReport> = ["b", "a", "a", "c", ""]
        .iter()
        .map(|t| report(t, "", "AFR"))
        .collect();
    let titles = build_facets(&reports, |r| [r.title.as_str()]);
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn facets_use_ordinal_case_sensitive_order() {
    let reports: Vec<CanonicalReport> = ["beta", "Alpha", "alpha"].iter().map(|t| report(t, "", "AFR")).collect();
    let titles = build_facets(&reports, |r| Some(r.title.as_str()));
    assert_eq!(titles, vec!["Alpha", "alpha", "beta"]);
}

#[test]
fn facet_lists_cover_every_dimension() {
    let reports = vec![
        CanonicalReport {
            primary: true,
            topic: "Budget".into(),
            topics: vec!["Budget".into(), "Tax".into()],
            tags: set(&["x"]),
            ..report("A", "2021-05-01", "CRS")
        },
        CanonicalReport { agency: "GAO".into(), ..report("B", "2022-01", "AFR") },
        CanonicalReport { agency: "GAO".into(), ..report("C", "", "AFR") },
    ];
    let f = FacetLists::build(&reports);
    assert_eq!(f.subjects, vec!["Budget", "GAO"]);
    assert_eq!(f.years, vec!["2021", "2022"]);
    assert_eq!(f.topics, vec!["Budget", "Tax"]);
    assert_eq!(f.report_types, vec!["AFR", "CRS"]);
    assert_eq!(f.tags, vec!["x"]);
    assert_eq!(f.get(Dimension::Year), f.years.as_slice());
}

#[test]
fn empty_dimension_gives_empty_list() {
    let f = FacetLists::build(&pair());
    assert!(f.tags.is_empty());
    assert!(FacetLists::build(&[]).subjects.is_empty());
}

#[test]
fn raw_rows_search_any_cell() {
    let t = decode("a,b\nApple,Pie\nBanana,Split\ncherry,APPLE\n");
    assert_eq!(filter_raw_rows(&t, "apple"), vec![0, 2]);
    assert_eq!(filter_raw_rows(&t, ""), vec![0, 1, 2]);
    assert!(filter_raw_rows(&t, "zzz").is_empty());
}

#[test]
fn set_from_literal_reports_queries_in_order() {
    let set = ReportSet::from_reports(pair());
    assert!(set.tables().is_empty());
    assert_eq!(set.facets().years, vec!["2021", "2022"]);

    let view = set.query(&FilterState { query: "policy".into(), ..Default::default() });
    assert_eq!(view.row_ix, vec![1]);
    assert_eq!(view.get(0).map(|r| r.title.as_str()), Some("Tax Policy"));
}
