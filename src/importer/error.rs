// ==========================================
// Pool Planner - Import errors
// ==========================================
// Scope: file-level failures only; row problems become RejectedRow entries
// ==========================================

use thiserror::Error;

/// Import error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0} (supported: .xlsx/.xlsm/.xls/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    FileReadError(String),

    #[error("Failed to parse workbook: {0}")]
    ExcelParseError(String),

    #[error("Failed to parse CSV: {0}")]
    CsvParseError(String),

    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    // ===== Generic =====
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ImportError {
    fn from(err: tokio::task::JoinError) -> Self {
        ImportError::InternalError(format!("import task failed: {}", err))
    }
}

/// Result alias
pub type ImportResult<T> = Result<T, ImportError>;
