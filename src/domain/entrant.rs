// ==========================================
// Pool Planner - Entrant domain model
// ==========================================
// Responsibility: validated entrants, rejected rows, per-sheet extraction result
// Rule: an Entrant only exists once name, date of birth and category validated
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Entrant - validated competitor
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    pub license_number: String, // may be empty when only the name was filled in
    pub full_name: String,      // trimmed, no digits, never the marker "x"
    pub date_of_birth: String,  // d.m.yyyy
    pub club: String,           // from the sheet header, or the unknown-club sentinel
    pub category: String,       // label of the first marked category column
}

// ==========================================
// RejectedRow - row excluded or flagged during validation
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub row_number: usize,    // 1-based spreadsheet row
    pub name: Option<String>, // entrant name, when it passed name validation
    pub club: Option<String>,
    pub reasons: Vec<String>, // in detection order, never empty
}

impl RejectedRow {
    pub fn reasons_joined(&self) -> String {
        self.reasons.join("; ")
    }
}

// ==========================================
// ExtractionSummary - per-sheet row accounting
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub data_rows: usize,           // rows scanned past the header offset
    pub skipped_blank: usize,       // no license number and no name
    pub valid: usize,
    pub rejected: usize,            // rows carrying at least one reason
    pub dropped_no_category: usize, // passed validation but no category marker
}

// ==========================================
// ExtractionResult - output of one sheet
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub club: String,
    pub valid: Vec<Entrant>,
    pub invalid: Vec<RejectedRow>,
    pub summary: ExtractionSummary,
}

// ==========================================
// SourcedRejection - rejected row tagged with its input file
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedRejection {
    pub source: String, // input file name
    pub row: RejectedRow,
}
