// ==========================================
// Pool Planner - Report errors
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// No pool received any entrant; message is localized
    #[error("{0}")]
    EmptyPlan(String),

    #[error("Workbook write failed: {0}")]
    Write(String),

    #[error("File write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Write(err.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
