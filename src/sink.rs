// src/sink.rs
//
// Rendering boundary. The core hands finished report sequences and facet
// lists to a `ViewSink`; it never draws anything itself.

use std::io::{self, Write};

use crate::{
    csv,
    facets::{Dimension, FacetLists},
    filter::FilterState,
    report::CanonicalReport,
    store::ReportSet,
};

pub trait ViewSink {
    /// Show the current (already filtered) reports.
    fn render_reports(&mut self, reports: &[&CanonicalReport]);

    /// Populate the selection controls.
    fn render_facets(&mut self, facets: &FacetLists);
}

/// Filter `set` by `state` and hand the result to `sink`. Returns the match count.
pub fn publish(set: &ReportSet, state: &FilterState, sink: &mut dyn ViewSink) -> usize {
    let view = set.query(state);
    let reports = view.to_vec();
    logd!("Publish: {} of {} reports", reports.len(), set.len());
    sink.render_reports(&reports);
    reports.len()
}

/// Output layout for `TextSink`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Cards,
    Csv,
    Tsv,
}

/// Plain-text sink for terminals and pipes.
/// Write errors are kept and reported by `finish()`.
pub struct TextSink<W: Write> {
    out: W,
    format: TextFormat,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, format: TextFormat) -> Self {
        Self { out, format, error: None }
    }

    /// Flush and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn keep(&mut self, r: io::Result<()>) {
        if let Err(e) = r {
            self.error.get_or_insert(e);
        }
    }

    fn write_card(&mut self, r: &CanonicalReport) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", r.report_type, r.title)?;
        if !r.summary.is_empty() {
            writeln!(self.out, "    {}", r.summary)?;
        }
        let subject = r.subject();
        match (subject.is_empty(), r.date.is_empty()) {
            (false, false) => writeln!(self.out, "    {} · {}", subject, r.date)?,
            (false, true)  => writeln!(self.out, "    {}", subject)?,
            (true, false)  => writeln!(self.out, "    {}", r.date)?,
            (true, true)   => {}
        }
        if !r.tags.is_empty() {
            let tags: Vec<&str> = r.tags.iter().map(String::as_str).collect();
            writeln!(self.out, "    tags: {}", tags.join(", "))?;
        }
        if let Some(u) = &r.pdf_url { writeln!(self.out, "    pdf: {}", u)?; }
        if let Some(u) = &r.web_url { writeln!(self.out, "    web: {}", u)?; }
        writeln!(self.out)
    }
}

impl<W: Write> ViewSink for TextSink<W> {
    fn render_reports(&mut self, reports: &[&CanonicalReport]) {
        let sep = match self.format {
            TextFormat::Csv => ',',
            TextFormat::Tsv => '\t',
            TextFormat::Cards => {
                for r in reports {
                    let res = self.write_card(r);
                    self.keep(res);
                }
                let res = writeln!(self.out, "{} report(s)", reports.len());
                self.keep(res);
                return;
            }
        };

        let res = csv::write_row(&mut self.out, &CanonicalReport::COLUMNS, sep);
        self.keep(res);
        for r in reports {
            let res = csv::write_row(&mut self.out, &r.to_cells(), sep);
            self.keep(res);
        }
    }

    fn render_facets(&mut self, facets: &FacetLists) {
        for d in Dimension::ALL.into_iter().filter(|d| d.is_filterable()) {
            let values = facets.get(d);
            let res = writeln!(self.out, "{} ({}): {}", d.label(), values.len(), values.join(" | "));
            self.keep(res);
        }
        let res = writeln!(self.out);
        self.keep(res);
    }
}
