// src/filter.rs
//
// Conjunctive report filter. Each clause is vacuously true when its
// dimension is unset; the result always keeps input order.

use std::collections::BTreeSet;

use crate::csv::RawTable;
use crate::report::CanonicalReport;

/// Current selections. Owned by the front end; the filter keeps no state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring over title and summary.
    pub query: String,
    /// Agency (non-primary) or topic (primary) values; multi-select.
    pub subjects: BTreeSet<String>,
    /// Prefix of `date`, normally a 4-digit year.
    pub year: Option<String>,
    /// Active report-type badges.
    pub report_types: BTreeSet<String>,
    /// Active free-form tags. Independent of `report_types`.
    pub tags: BTreeSet<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.subjects.is_empty()
            && self.year.as_deref().is_none_or(str::is_empty)
            && self.report_types.is_empty()
            && self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Flip membership of `value` in a multi-select set.
    pub fn toggle(set: &mut BTreeSet<String>, value: &str) {
        if !set.remove(value) {
            set.insert(s!(value));
        }
    }

    /// Prepared form: lowercase the query once per run instead of once per row.
    fn prepared(&self) -> Prepared<'_> {
        Prepared {
            query: self.query.to_lowercase(),
            state: self,
        }
    }
}

struct Prepared<'a> {
    query: String,
    state: &'a FilterState,
}

impl Prepared<'_> {
    fn matches(&self, r: &CanonicalReport) -> bool {
        self.text(r) && self.report_type(r) && self.tags(r) && self.subject(r) && self.year(r)
    }

    fn text(&self, r: &CanonicalReport) -> bool {
        self.query.is_empty()
            || r.title.to_lowercase().contains(&self.query)
            || r.summary.to_lowercase().contains(&self.query)
    }

    fn report_type(&self, r: &CanonicalReport) -> bool {
        let active = &self.state.report_types;
        active.is_empty() || active.contains(&r.report_type)
    }

    fn tags(&self, r: &CanonicalReport) -> bool {
        let active = &self.state.tags;
        active.is_empty() || r.tags.iter().any(|t| active.contains(t))
    }

    fn subject(&self, r: &CanonicalReport) -> bool {
        let sel = &self.state.subjects;
        if sel.is_empty() {
            return true;
        }
        if r.primary {
            sel.contains(&r.topic) || r.topics.iter().any(|t| sel.contains(t))
        } else {
            sel.contains(&r.agency)
        }
    }

    fn year(&self, r: &CanonicalReport) -> bool {
        match self.state.year.as_deref() {
            None | Some("") => true,
            Some(y) => r.date.starts_with(y),
        }
    }
}

/// Does `report` pass every clause of `state`?
pub fn matches(report: &CanonicalReport, state: &FilterState) -> bool {
    state.prepared().matches(report)
}

/// Positions of surviving reports, ascending.
pub fn filter_indices(reports: &[CanonicalReport], state: &FilterState) -> Vec<usize> {
    if state.is_empty() {
        return (0..reports.len()).collect();
    }
    let p = state.prepared();
    reports
        .iter()
        .enumerate()
        .filter(|(_, r)| p.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Surviving reports, in input order.
pub fn filter<'a>(reports: &'a [CanonicalReport], state: &FilterState) -> Vec<&'a CanonicalReport> {
    filter_indices(reports, state)
        .into_iter()
        .map(|i| &reports[i])
        .collect()
}

/// Raw-table search: keep rows where any cell contains `query` (case-insensitive).
pub fn filter_raw_rows(table: &RawTable, query: &str) -> Vec<usize> {
    let q = query.to_lowercase();
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| q.is_empty() || row.values().any(|v| v.to_lowercase().contains(&q)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = BTreeSet::new();
        FilterState::toggle(&mut set, "CRS");
        assert!(set.contains("CRS"));
        FilterState::toggle(&mut set, "CRS");
        assert!(set.is_empty());
    }

    #[test]
    fn blank_year_counts_as_unset() {
        let state = FilterState { year: Some(s!()), ..Default::default() };
        assert!(state.is_empty());
        let r = CanonicalReport { date: s!("2020-01"), ..Default::default() };
        assert!(matches(&r, &state));
    }
}
