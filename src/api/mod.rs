// ==========================================
// Pool Planner - API layer
// ==========================================
// Responsibility: single entry point for the CLI and integration tests
// ==========================================

pub mod error;
pub mod planning_api;

pub use error::{ApiError, ApiResult};
pub use planning_api::{FileSummary, PlanSummary, PlanningApi, PlanningOutcome, PoolSummary};
