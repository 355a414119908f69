// ==========================================
// Pool Planner - Roster layout schema
// ==========================================
// Responsibility: fixed cell offsets of the club roster template
// Rule: every offset used by the extractor is read from here
// ==========================================

use serde::{Deserialize, Serialize};

/// Layout versions this build knows how to read
pub const CURRENT_LAYOUT_VERSION: u32 = 1;

/// 0-based cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// Marker column that selects one category when it holds "x"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub column: usize,
    pub category: String,
}

impl CategoryColumn {
    fn new(column: usize, category: &str) -> Self {
        Self {
            column,
            category: category.to_string(),
        }
    }
}

// ==========================================
// RosterLayout - versioned template schema
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterLayout {
    pub version: u32,
    pub club_cell: CellRef,  // C3
    pub first_data_row: usize, // row 10
    pub license_column: usize, // A
    pub name_column: usize,    // B
    pub coach_column: usize,   // D
    pub dob_column: usize,     // E
    /// F..J, youngest to oldest; scanned in ascending column order
    pub category_columns: Vec<CategoryColumn>,
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            version: CURRENT_LAYOUT_VERSION,
            club_cell: CellRef { row: 2, col: 2 },
            first_data_row: 9,
            license_column: 0,
            name_column: 1,
            coach_column: 3,
            dob_column: 4,
            category_columns: vec![
                CategoryColumn::new(5, "rekrutt"),
                CategoryColumn::new(6, "13-14"),
                CategoryColumn::new(7, "15-16"),
                CategoryColumn::new(8, "17-18"),
                CategoryColumn::new(9, "senior"),
            ],
        }
    }
}

impl RosterLayout {
    /// Category columns sorted by column index, the order markers are checked in
    pub fn ordered_category_columns(&self) -> Vec<&CategoryColumn> {
        let mut columns: Vec<&CategoryColumn> = self.category_columns.iter().collect();
        columns.sort_by_key(|c| c.column);
        columns
    }

    pub fn knows_category(&self, category: &str) -> bool {
        self.category_columns.iter().any(|c| c.category == category)
    }

    /// Rightmost column the extractor reads
    pub fn last_column(&self) -> usize {
        self.category_columns
            .iter()
            .map(|c| c.column)
            .chain([
                self.license_column,
                self.name_column,
                self.coach_column,
                self.dob_column,
                self.club_cell.col,
            ])
            .max()
            .unwrap_or(0)
    }
}
