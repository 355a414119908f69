// ==========================================
// Pool Planner - Importer traits
// ==========================================
// Responsibility: seams of the import pipeline (no implementations)
// Pipeline: parse file -> clean cells -> validate row -> build entrant
// ==========================================

use crate::domain::cell::{CellValue, SheetGrid};
use crate::importer::error::ImportResult;
use crate::importer::roster_importer::UploadOutcome;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// ==========================================
// RosterImporter Trait
// ==========================================
// Implemented by: RosterImporterImpl
#[async_trait]
pub trait RosterImporter: Send + Sync {
    /// Decode one roster file and extract its entrants
    ///
    /// Never fails as a whole: a decode failure is carried in
    /// `UploadOutcome::result` so it stays attributed to its file.
    async fn import_file(&self, file_path: PathBuf) -> UploadOutcome;

    /// Import several files concurrently
    ///
    /// # Notes
    /// - one outcome per distinct input file, in input order
    /// - a failing file does not affect the others
    /// - returns only once every file has finished
    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<UploadOutcome>;
}

// ==========================================
// FileParser Trait
// ==========================================
// Implemented by: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// Decode the first worksheet into an absolute grid
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<SheetGrid>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// Implemented by: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// Trim surrounding whitespace
    fn clean_text(&self, value: &str) -> String;

    /// Text of a cell, None when blank
    fn normalize_null(&self, cell: &CellValue) -> Option<String>;

    /// True when the cell holds the marker "x" (any case)
    fn is_marker(&self, cell: &CellValue) -> bool;

    /// Parse d/m/yyyy with `.`, `/` or `-` separators
    ///
    /// # Returns
    /// - Some(date): a real calendar date
    /// - None: wrong shape or impossible date (e.g. 31.02.2011)
    fn parse_date_dmy(&self, value: &str) -> Option<NaiveDate>;

    /// Canonical display form of a date of birth (d.m.yyyy)
    fn format_date(&self, date: NaiveDate) -> String;
}

// ==========================================
// RowValidator Trait
// ==========================================
// Implemented by: RosterRowValidator
pub trait RowValidator: Send + Sync {
    /// Validate the full name cell
    ///
    /// # Returns
    /// - Ok(trimmed name)
    /// - Err(reason): empty, the marker "x", contains a digit, or not text
    fn check_name(&self, cell: &CellValue, club: &str) -> Result<String, String>;

    /// Validate the date of birth cell
    ///
    /// # Returns
    /// - Ok(date): a date cell, or a d/m/yyyy string naming a real date
    /// - Err(reason): anything else
    fn check_date_of_birth(&self, cell: &CellValue) -> Result<NaiveDate, String>;

    /// Flag rows marked as coach that also carry a category
    ///
    /// Annotation only; the entrant stays valid.
    fn check_coach_conflict(&self, coach_marked: bool, category: Option<&str>) -> Option<String>;
}
