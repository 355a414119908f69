// ==========================================
// Pool Planner - Import layer
// ==========================================
// Responsibility: roster files -> validated entrants + rejected rows
// Supports: CSV, XLSX, XLSM, XLS, ODS
// ==========================================

pub mod data_cleaner;
pub mod entrant_extractor;
pub mod error;
pub mod file_parser;
pub mod importer_trait;
pub mod roster_importer;
pub mod row_validator;

pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use entrant_extractor::EntrantExtractor;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use roster_importer::{dedupe_paths, RosterImporterImpl, UploadOutcome};
pub use row_validator::RosterRowValidator;

pub use importer_trait::{DataCleaner, FileParser, RosterImporter, RowValidator};
