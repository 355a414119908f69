// ==========================================
// Pool Planner - Report layer
// ==========================================
// Responsibility: GroupPlan + rejections -> output sheets -> xlsx
// Boundary: depends on the engine and importer only through their output types
// ==========================================

pub mod assembler;
pub mod error;
pub mod schedule;
pub mod xlsx_writer;

pub use assembler::ReportAssembler;
pub use error::{ReportError, ReportResult};
pub use schedule::build_schedule_sheet;
pub use xlsx_writer::XlsxReportWriter;

use serde::{Deserialize, Serialize};

// ==========================================
// ReportSheet - one output worksheet
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSheet {
    pub name: String,
    pub rows: Vec<Vec<String>>, // an empty row is a blank separator line
    pub bold_rows: Vec<usize>,  // indexes into `rows`
}

impl ReportSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn push_bold_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.bold_rows.push(self.rows.len());
        self.push_row(cells);
    }

    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn is_bold(&self, row: usize) -> bool {
        self.bold_rows.contains(&row)
    }
}
