//! CSV report writer
//!
//! Implements the `ReportSink` port, writing one row per rated task with
//! RFC 4180 quoting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::ports::ReportSink;
use crate::core::services::{Report, ReportRow};

/// Report column headers, in order
pub const HEADERS: [&str; 8] = [
    "Task ID",
    "Audit Rating",
    "Area Rating",
    "Label Rating",
    "Occlusion Rating",
    "Final Rating",
    "Annotated Image Path",
    "Issues",
];

/// Writes reports as CSV to any writer
#[derive(Debug)]
pub struct CsvReportWriter<W: Write> {
    out: W,
}

impl CsvReportWriter<BufWriter<File>> {
    /// Create (or truncate) a CSV file at `path`
    pub fn create(path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wrap a writer
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> std::io::Result<()> {
        let line = fields.iter().map(|f| escape(f.as_ref())).collect::<Vec<_>>().join(",");
        write!(self.out, "{line}\r\n")
    }
}

/// Quote a field when it contains a delimiter, quote or line break
#[must_use]
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Column values for one row
#[must_use]
pub fn row_fields(row: &ReportRow) -> [String; 8] {
    let rating = &row.rating;
    [
        row.task_id.clone(),
        rating.audit_tier().score_label().to_string(),
        rating.area_tier().score_label().to_string(),
        rating.label_tier().score_label().to_string(),
        rating.occlusion_tier().score_label().to_string(),
        rating.grade.to_string(),
        row.image_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        rating.issues_joined(),
    ]
}

impl<W: Write> ReportSink for CsvReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_record(&HEADERS)?;
        for row in &report.rows {
            self.write_record(&row_fields(row))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
