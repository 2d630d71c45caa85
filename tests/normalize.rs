// tests/normalize.rs
//
// Alias resolution, defaults and per-source conventions.
//
use report_browser::csv::decode;
use report_browser::normalize::{normalize, SourceKind, SourceProfile};

#[test]
fn missing_title_becomes_untitled() {
    let t = decode("summary,date\nSomething,2020-01-01\n");
    let r = &normalize(&t.rows, &SourceProfile::secondary("AFR"))[0];
    assert_eq!(r.title, "Untitled");
    assert_eq!(r.summary, "Something");
    assert_eq!(r.date, "2020-01-01");
}

#[test]
fn capitalized_aliases_are_accepted() {
    let t = decode("Title,Summary,Date,Agency\nTax Policy,About taxes,2022-01-01,Treasury\n");
    let r = &normalize(&t.rows, &SourceProfile::secondary(""))[0];
    assert_eq!(r.title, "Tax Policy");
    assert_eq!(r.summary, "About taxes");
    assert_eq!(r.date, "2022-01-01");
    assert_eq!(r.agency, "Treasury");
}

#[test]
fn lowercase_alias_wins_when_both_present() {
    let t = decode("title,Title\nlower,Upper\n");
    let r = &normalize(&t.rows, &SourceProfile::secondary(""))[0];
    assert_eq!(r.title, "lower");
}

#[test]
fn primary_forces_type_and_splits_topics() {
    let t = decode("title,topics,reportType\nA,\"A; B ;C\",AFR\n");
    let r = &normalize(&t.rows, &SourceProfile::primary("CRS"))[0];
    assert_eq!(r.report_type, "CRS");
    assert!(r.primary);
    assert_eq!(r.topics, vec!["A", "B", "C"]);
    assert_eq!(r.topic, "A");
    assert_eq!(r.agency, "");
    assert_eq!(r.subject(), "A");
}

#[test]
fn primary_without_topics_uses_misc_and_empty_list() {
    let t = decode("title\nA\n");
    let r = &normalize(&t.rows, &SourceProfile::primary("CRS"))[0];
    assert!(r.topics.is_empty());
    assert_eq!(r.topic, "Misc");
}

#[test]
fn secondary_type_comes_from_source_then_default_then_unknown() {
    let t = decode("title,reportType\nA,PAR\nB,\n");
    let with_default = normalize(&t.rows, &SourceProfile::secondary("AFR"));
    assert_eq!(with_default[0].report_type, "PAR");
    assert_eq!(with_default[1].report_type, "AFR");

    let no_default = normalize(&t.rows, &SourceProfile::secondary(""));
    assert_eq!(no_default[1].report_type, "Unknown");
}

#[test]
fn secondary_agency_defaults_and_topic_stays_empty() {
    let t = decode("title,source,topics\nA,GAO,Budget\nB,,\n");
    let rs = normalize(&t.rows, &SourceProfile::secondary("AFR"));
    assert_eq!(rs[0].agency, "GAO");
    assert_eq!(rs[0].topic, "");
    assert_eq!(rs[0].topics, vec!["Budget"]);
    assert_eq!(rs[1].agency, "Unknown");
    assert!(!rs[1].primary);
}

#[test]
fn delimiters_are_per_source() {
    let t = decode("title,topics,tags\nA,\"x, y\",\"red|blue| \"\n");
    let p = SourceProfile::primary("CRS").with_delimiters(',', '|');
    let r = &normalize(&t.rows, &p)[0];
    assert_eq!(r.topics, vec!["x", "y"]);
    assert_eq!(r.tags.iter().map(String::as_str).collect::<Vec<_>>(), vec!["blue", "red"]);
}

#[test]
fn links_are_optional() {
    let t = decode("title,pdf_url,url\nA,https://x/a.pdf,\n");
    let r = &normalize(&t.rows, &SourceProfile::secondary(""))[0];
    assert_eq!(r.pdf_url.as_deref(), Some("https://x/a.pdf"));
    assert_eq!(r.web_url, None);
}

#[test]
fn profile_kind_is_exposed() {
    assert_eq!(SourceProfile::primary("CRS").kind, SourceKind::Primary("CRS".into()));
    assert!(!SourceProfile::secondary("").is_primary());
}
