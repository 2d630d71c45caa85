// src/report.rs
use std::collections::BTreeSet;

/// The unified record shape every source is normalized into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalReport {
    pub title: String,
    pub summary: String,
    pub report_type: String,
    /// Non-primary reports only; empty otherwise.
    pub agency: String,
    /// First of `topics` (display); primary reports only.
    pub topic: String,
    pub topics: Vec<String>,
    /// "YYYY-MM-DD" or "YYYY-MM" by convention; not validated.
    pub date: String,
    pub tags: BTreeSet<String>,
    pub pdf_url: Option<String>,
    pub web_url: Option<String>,
    /// Came from a primary (forced-type) source.
    pub primary: bool,
}

impl CanonicalReport {
    /// Agency-or-topic value shown next to the title and used by the subject facet.
    pub fn subject(&self) -> &str {
        if self.primary { &self.topic } else { &self.agency }
    }

    /// Text before the first '-' of the date.
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }

    /// Canonical columns, in table/CSV order.
    pub const COLUMNS: [&'static str; 9] = [
        "Type", "Title", "Summary", "Agency/Topic", "Topics", "Date", "Tags", "PDF", "Web",
    ];

    /// One cell per entry of [`Self::COLUMNS`].
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.report_type.clone(),
            self.title.clone(),
            self.summary.clone(),
            s!(self.subject()),
            self.topics.join("; "),
            self.date.clone(),
            self.tags.iter().cloned().collect::<Vec<_>>().join("; "),
            self.pdf_url.clone().unwrap_or_default(),
            self.web_url.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_follows_primary_flag() {
        let mut r = CanonicalReport {
            agency: s!("GAO"),
            topic: s!("Budget"),
            ..Default::default()
        };
        assert_eq!(r.subject(), "GAO");
        r.primary = true;
        assert_eq!(r.subject(), "Budget");
    }

    #[test]
    fn year_is_date_prefix() {
        let r = CanonicalReport { date: s!("2021-05-01"), ..Default::default() };
        assert_eq!(r.year(), "2021");
        let empty = CanonicalReport::default();
        assert_eq!(empty.year(), "");
    }

    #[test]
    fn cells_line_up_with_columns() {
        let r = CanonicalReport::default();
        assert_eq!(r.to_cells().len(), CanonicalReport::COLUMNS.len());
    }
}
