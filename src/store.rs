// src/store.rs
//
// The loaded dataset and the loader that builds it.
//
// - ReportSet: immutable after construction. Holds the normalized reports,
//              the raw decoded tables (for per-source views) and the facets.
// - ReportView: zero-copy filtered projection (row indices into a ReportSet).
// - load_sources: reads every source on its own thread and waits for all of
//                 them; one failure fails the whole load.

use std::{
    fs,
    sync::mpsc,
    thread,
};

use crate::{
    config::options::SourceSpec,
    csv::{self, RawTable},
    error::LoadError,
    facets::FacetLists,
    filter::{self, FilterState},
    normalize,
    progress::Progress,
    report::CanonicalReport,
};

/// One decoded source, kept for the raw table tabs.
#[derive(Clone, Debug)]
pub struct SourceTable {
    pub name: String,
    pub table: RawTable,
}

#[derive(Clone, Debug, Default)]
pub struct ReportSet {
    reports: Vec<CanonicalReport>,
    tables: Vec<SourceTable>,
    facets: FacetLists,
}

impl ReportSet {
    /// Normalize decoded sources (in the given order) and index facets.
    pub fn from_tables(decoded: Vec<(SourceSpec, RawTable)>) -> Self {
        let mut reports = Vec::new();
        let mut tables = Vec::with_capacity(decoded.len());

        for (spec, table) in decoded {
            reports.extend(normalize::normalize(&table.rows, &spec.profile));
            tables.push(SourceTable { name: spec.name, table });
        }

        Self::assemble(reports, tables)
    }

    /// Wrap already-normalized reports (no raw tables).
    pub fn from_reports(reports: Vec<CanonicalReport>) -> Self {
        Self::assemble(reports, Vec::new())
    }

    fn assemble(reports: Vec<CanonicalReport>, tables: Vec<SourceTable>) -> Self {
        let facets = FacetLists::build(&reports);
        Self { reports, tables, facets }
    }

    pub fn reports(&self) -> &[CanonicalReport] { &self.reports }
    pub fn tables(&self) -> &[SourceTable] { &self.tables }
    pub fn len(&self) -> usize { self.reports.len() }
    pub fn is_empty(&self) -> bool { self.reports.is_empty() }

    /// Option lists for the filter controls.
    pub fn facets(&self) -> &FacetLists { &self.facets }

    /// Reports matching `state`, in load order.
    pub fn query(&self, state: &FilterState) -> ReportView<'_> {
        ReportView {
            row_ix: filter::filter_indices(&self.reports, state),
            set: self,
        }
    }
}

/// Filtered projection of a `ReportSet`.
#[derive(Clone, Debug)]
pub struct ReportView<'a> {
    /// Positions of kept reports in the set
    pub row_ix: Vec<usize>,
    set: &'a ReportSet,
}

impl<'a> ReportView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn get(&self, i: usize) -> Option<&'a CanonicalReport> {
        self.row_ix.get(i).and_then(|&ix| self.set.reports.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CanonicalReport> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.set.reports.get(ix))
    }

    pub fn to_vec(&self) -> Vec<&'a CanonicalReport> {
        self.iter().collect()
    }
}

/* ---------------- Loading ---------------- */

pub fn read_source(spec: &SourceSpec) -> Result<RawTable, LoadError> {
    let bytes = fs::read(&spec.path).map_err(|source| LoadError::Read {
        name: spec.name.clone(),
        path: spec.path.clone(),
        source,
    })?;
    // Invalid UTF-8 degrades to U+FFFD instead of failing the load.
    Ok(csv::decode(&String::from_utf8_lossy(&bytes)))
}

/// Read and decode all sources concurrently, then build the set.
/// Fails on the first source error; no partial data is returned.
pub fn load_sources(
    specs: &[SourceSpec],
    mut progress: Option<&mut dyn Progress>,
) -> Result<ReportSet, LoadError> {
    if specs.is_empty() {
        return Err(LoadError::NoSources);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(specs.len());
    }

    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<RawTable, LoadError>)>();

    for (i, spec) in specs.iter().cloned().enumerate() {
        let tx = res_tx.clone();
        thread::spawn(move || {
            let _ = tx.send((i, read_source(&spec)));
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<RawTable>> = vec![None; specs.len()];
    let mut failure: Option<LoadError> = None;

    for (i, result) in res_rx.iter() {
        let name = &specs[i].name;
        match result {
            Ok(table) => {
                logf!("Load: {} rows={} headers={}", name, table.row_count(), table.header_count());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(name, table.row_count());
                }
                slots[i] = Some(table);
            }
            Err(e) => {
                loge!("Load: {}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &e.to_string());
                }
                failure.get_or_insert(e);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if let Some(e) = failure {
        return Err(e);
    }

    let mut decoded = Vec::with_capacity(specs.len());
    for (spec, slot) in specs.iter().zip(slots) {
        let table = slot.ok_or_else(|| LoadError::Lost(spec.name.clone()))?;
        decoded.push((spec.clone(), table));
    }

    let set = ReportSet::from_tables(decoded);
    logf!("Load: {} reports from {} sources", set.len(), specs.len());
    Ok(set)
}
