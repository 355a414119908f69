// ==========================================
// Pool Planner - Core library
// ==========================================
// Purpose: roster spreadsheets -> validated entrants -> pools and groups -> xlsx
// Layers: domain, config, importer, engine, report, api
// ==========================================

// Translations in ./locales, English fallback
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Modules
// ==========================================

// Domain - entrants, grids, plans
pub mod domain;

// Configuration - layout, pools, locale
pub mod config;

// Import - file decode and row validation
pub mod importer;

// Engine - pool partition and group balancing
pub mod engine;

// Report - output sheets and xlsx writer
pub mod report;

// API - end-to-end planning entry point
pub mod api;

pub mod logging;

pub mod i18n;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    CellValue, Entrant, ExtractionResult, ExtractionSummary, Group, GroupPlan, PoolGroups,
    RejectedRow, SheetGrid, SourcedRejection,
};

pub use config::{CompetitionConfig, ConfigManager, PoolDefinition, RosterLayout};

pub use engine::{GreedyClubBalancer, GroupBalancer, GroupPlanner};

pub use importer::{EntrantExtractor, RosterImporter, RosterImporterImpl, UploadOutcome};

pub use report::{ReportAssembler, ReportError, ReportSheet, XlsxReportWriter};

pub use api::{ApiError, ApiResult, PlanningApi, PlanningOutcome};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Pool Planner";
