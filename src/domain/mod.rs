// ==========================================
// Pool Planner - Domain layer
// ==========================================
// Responsibility: entities and value types shared by importer, engine and report
// Boundary: no file access, no planning logic
// ==========================================

pub mod cell;
pub mod entrant;
pub mod plan;

pub use cell::{CellValue, SheetGrid};
pub use entrant::{Entrant, ExtractionResult, ExtractionSummary, RejectedRow, SourcedRejection};
pub use plan::{Group, GroupPlan, PoolGroups};
