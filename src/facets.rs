// src/facets.rs
//
// Distinct option lists for the filter controls. Built once per load from the
// full report set; filtering never touches them.

use std::collections::BTreeSet;

use crate::report::CanonicalReport;

/// Sorted (byte order), deduplicated, non-empty values picked by `select`.
pub fn build_facets<'a, F, I>(reports: &'a [CanonicalReport], select: F) -> Vec<String>
where
    F: Fn(&'a CanonicalReport) -> I,
    I: IntoIterator<Item = &'a str>,
{
    reports
        .iter()
        .flat_map(select)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Built-in filter dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Agency for non-primary reports, topic for primary ones.
    Subject,
    Year,
    Topics,
    ReportType,
    Tags,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Subject,
        Dimension::Year,
        Dimension::Topics,
        Dimension::ReportType,
        Dimension::Tags,
    ];

    /// Has a matching clause in `FilterState`. `Topics` is listed for display only.
    pub fn is_filterable(self) -> bool {
        !matches!(self, Dimension::Topics)
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Subject    => "Topic/Agency",
            Dimension::Year       => "Year",
            Dimension::Topics     => "Topics",
            Dimension::ReportType => "Type",
            Dimension::Tags       => "Tags",
        }
    }

    pub fn values(self, r: &CanonicalReport) -> Vec<&str> {
        match self {
            Dimension::Subject    => vec![r.subject()],
            Dimension::Year       => vec![r.year()],
            Dimension::Topics     => r.topics.iter().map(String::as_str).collect(),
            Dimension::ReportType => vec![r.report_type.as_str()],
            Dimension::Tags       => r.tags.iter().map(String::as_str).collect(),
        }
    }
}

/// Option lists for every dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetLists {
    pub subjects: Vec<String>,
    pub years: Vec<String>,
    pub topics: Vec<String>,
    pub report_types: Vec<String>,
    pub tags: Vec<String>,
}

impl FacetLists {
    pub fn build(reports: &[CanonicalReport]) -> Self {
        let of = |d: Dimension| build_facets(reports, move |r| d.values(r));
        Self {
            subjects: of(Dimension::Subject),
            years: of(Dimension::Year),
            topics: of(Dimension::Topics),
            report_types: of(Dimension::ReportType),
            tags: of(Dimension::Tags),
        }
    }

    pub fn get(&self, d: Dimension) -> &[String] {
        match d {
            Dimension::Subject    => &self.subjects,
            Dimension::Year       => &self.years,
            Dimension::Topics     => &self.topics,
            Dimension::ReportType => &self.report_types,
            Dimension::Tags       => &self.tags,
        }
    }
}
