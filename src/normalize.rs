// src/normalize.rs
//
// Maps decoded rows from differently-shaped sources onto `CanonicalReport`.
// Each field has a fixed alias list; the first non-empty hit wins, otherwise
// the field's default applies. Nothing here fails.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    MISC_TOPIC, TAG_DELIM, TOPIC_DELIM, UNKNOWN_AGENCY, UNKNOWN_TYPE, UNTITLED,
};
use crate::csv::RawRow;
use crate::report::CanonicalReport;

/// How a source decides `report_type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Every record gets this tag, whatever the file says.
    Primary(String),
    /// Use the file's own type column; fall back to this (then "Unknown").
    Secondary(String),
}

/// Per-source normalization settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProfile {
    pub kind: SourceKind,
    #[serde(default = "default_topic_delim")]
    pub topic_delimiter: char,
    #[serde(default = "default_tag_delim")]
    pub tag_delimiter: char,
}

fn default_topic_delim() -> char { TOPIC_DELIM }
fn default_tag_delim() -> char { TAG_DELIM }

impl SourceProfile {
    pub fn primary(tag: &str) -> Self {
        Self {
            kind: SourceKind::Primary(s!(tag)),
            topic_delimiter: TOPIC_DELIM,
            tag_delimiter: TAG_DELIM,
        }
    }

    pub fn secondary(default_type: &str) -> Self {
        Self {
            kind: SourceKind::Secondary(s!(default_type)),
            topic_delimiter: TOPIC_DELIM,
            tag_delimiter: TAG_DELIM,
        }
    }

    pub fn with_delimiters(mut self, topic: char, tag: char) -> Self {
        self.topic_delimiter = topic;
        self.tag_delimiter = tag;
        self
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.kind, SourceKind::Primary(_))
    }
}

/* ---------------- Alias table ---------------- */

pub const TITLE: &[&str] = &["title", "Title"];
pub const SUMMARY: &[&str] = &["summary", "Summary", "abstract"];
pub const REPORT_TYPE: &[&str] = &["reportType", "ReportType", "report_type", "type", "Type"];
pub const AGENCY: &[&str] = &["source", "Agency", "agency"];
pub const TOPICS: &[&str] = &["topics", "Topics", "Topic", "topic"];
pub const DATE: &[&str] = &["date", "Date"];
pub const TAGS: &[&str] = &["tags", "Tags"];
pub const PDF_URL: &[&str] = &["pdf_url", "pdfUrl", "PDF", "pdf"];
pub const WEB_URL: &[&str] = &["web_url", "url", "URL", "link"];

/// First non-empty value among `aliases`, in order.
pub fn resolve<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|a| row.get(a))
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// Split on `delim`, trim parts, drop empties; order kept.
pub fn split_multi(value: &str, delim: char) -> Vec<String> {
    value
        .split(delim)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/* ---------------- Normalization ---------------- */

pub fn normalize(rows: &[RawRow], profile: &SourceProfile) -> Vec<CanonicalReport> {
    rows.iter().map(|row| normalize_row(row, profile)).collect()
}

pub fn normalize_row(row: &RawRow, profile: &SourceProfile) -> CanonicalReport {
    let text = |aliases: &[&str], default: &str| s!(resolve(row, aliases).unwrap_or(default));
    let link = |aliases: &[&str]| resolve(row, aliases).map(str::to_string);

    let primary = profile.is_primary();

    let report_type = match &profile.kind {
        SourceKind::Primary(tag) => tag.clone(),
        SourceKind::Secondary(fallback) => {
            let t = resolve(row, REPORT_TYPE).unwrap_or(fallback.trim());
            if t.is_empty() { s!(UNKNOWN_TYPE) } else { s!(t) }
        }
    };
    // A primary tag configured as "" still must not leave the type empty.
    let report_type = if report_type.is_empty() { s!(UNKNOWN_TYPE) } else { report_type };

    let topics = resolve(row, TOPICS)
        .map(|v| split_multi(v, profile.topic_delimiter))
        .unwrap_or_default();

    let (agency, topic) = if primary {
        let first = topics.first().cloned().unwrap_or_else(|| s!(MISC_TOPIC));
        (s!(), first)
    } else {
        (text(AGENCY, UNKNOWN_AGENCY), s!())
    };

    let tags: BTreeSet<String> = resolve(row, TAGS)
        .map(|v| split_multi(v, profile.tag_delimiter).into_iter().collect())
        .unwrap_or_default();

    CanonicalReport {
        title: text(TITLE, UNTITLED),
        summary: text(SUMMARY, ""),
        report_type,
        agency,
        topic,
        topics,
        date: text(DATE, ""),
        tags,
        pdf_url: link(PDF_URL),
        web_url: link(WEB_URL),
        primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::decode;

    #[test]
    fn resolve_skips_empty_aliases() {
        let t = decode("title,Title\n,Second\n");
        assert_eq!(resolve(&t.rows[0], TITLE), Some("Second"));
    }

    #[test]
    fn split_multi_trims_and_drops_empties() {
        assert_eq!(split_multi("A; B ;C", ';'), vec!["A", "B", "C"]);
        assert_eq!(split_multi(" ; ;", ';'), Vec::<String>::new());
        assert_eq!(split_multi("x, y", ','), vec!["x", "y"]);
    }

    #[test]
    fn empty_primary_tag_falls_back_to_unknown() {
        let t = decode("title\nA\n");
        let r = normalize(&t.rows, &SourceProfile::primary(""));
        assert_eq!(r[0].report_type, UNKNOWN_TYPE);
    }
}
