// ==========================================
// Pool Planner - API errors
// ==========================================
// Responsibility: one error type for callers of PlanningApi
// Rule: every message names its cause (file or config field)
// ==========================================

use crate::config::error::ConfigError;
use crate::report::error::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Layer errors
    // ==========================================
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),

    // ==========================================
    // Request errors
    // ==========================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every upload failed to decode; per-file causes are in the outcomes
    #[error("None of the {0} roster file(s) could be read")]
    AllUploadsFailed(usize),
}

impl ApiError {
    /// True when the plan had no pools; the CLI reports this as its own exit path
    pub fn is_empty_plan(&self) -> bool {
        matches!(self, ApiError::Report(ReportError::EmptyPlan(_)))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
