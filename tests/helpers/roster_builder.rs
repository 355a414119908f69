// ==========================================
// Roster builder - registration sheets for import tests
// ==========================================
// Layout: club in C3, headers on row 9, data from row 10, markers in D and F-J
// ==========================================

use pool_planner::domain::{CellValue, SheetGrid};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const HEADER_ROW: usize = 8;
pub const FIRST_DATA_ROW: usize = 9;
const WIDTH: usize = 10;

fn category_column(category: &str) -> Option<usize> {
    match category {
        "rekrutt" => Some(5),
        "13-14" => Some(6),
        "15-16" => Some(7),
        "17-18" => Some(8),
        "senior" => Some(9),
        _ => None,
    }
}

pub struct RosterBuilder {
    club: Option<String>,
    rows: Vec<[String; WIDTH]>,
}

impl RosterBuilder {
    pub fn new(club: &str) -> Self {
        Self {
            club: Some(club.to_string()),
            rows: Vec::new(),
        }
    }

    /// Roster whose club cell is left empty
    pub fn without_club() -> Self {
        Self {
            club: None,
            rows: Vec::new(),
        }
    }

    /// Entrant row; an unknown category leaves every marker column empty
    pub fn entrant(self, license: &str, name: &str, dob: &str, category: &str) -> Self {
        self.row(license, name, dob, category, false)
    }

    /// Entrant row that also carries the coach marker
    pub fn coach_entrant(self, license: &str, name: &str, dob: &str, category: &str) -> Self {
        self.row(license, name, dob, category, true)
    }

    pub fn blank_row(mut self) -> Self {
        self.rows.push(Default::default());
        self
    }

    fn row(mut self, license: &str, name: &str, dob: &str, category: &str, coach: bool) -> Self {
        let mut cells: [String; WIDTH] = Default::default();
        cells[0] = license.to_string();
        cells[1] = name.to_string();
        if coach {
            cells[3] = "x".to_string();
        } else {
            cells[2] = "x".to_string();
        }
        cells[4] = dob.to_string();
        if let Some(col) = category_column(category) {
            cells[col] = "x".to_string();
        }
        self.rows.push(cells);
        self
    }

    /// 1-based spreadsheet row of the n-th data row (0-based)
    pub fn row_number(n: usize) -> usize {
        FIRST_DATA_ROW + n + 1
    }

    pub fn grid(&self) -> SheetGrid {
        let mut grid = SheetGrid::new("Registration", vec![]);
        if let Some(club) = &self.club {
            grid.set(2, 2, CellValue::text(club.as_str()));
        }
        grid.set(HEADER_ROW, 1, CellValue::text("Name"));
        for (i, row) in self.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                grid.set(FIRST_DATA_ROW + i, col, CellValue::from(value.as_str()));
            }
        }
        grid
    }

    pub fn write_xlsx(&self, path: &Path) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Registration").unwrap();
        if let Some(club) = &self.club {
            sheet.write_string(2, 2, club.as_str()).unwrap();
        }
        sheet.write_string(HEADER_ROW as u32, 1, "Name").unwrap();
        for (i, row) in self.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet
                        .write_string((FIRST_DATA_ROW + i) as u32, col as u16, value.as_str())
                        .unwrap();
                }
            }
        }
        workbook.save(path).unwrap();
    }

    pub fn write_csv(&self, path: &Path) {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .unwrap();
        for r in 0..FIRST_DATA_ROW {
            let mut record = vec![String::new(); 3];
            if r == 2 {
                record[2] = self.club.clone().unwrap_or_default();
            }
            if r == HEADER_ROW {
                record[1] = "Name".to_string();
            }
            writer.write_record(&record).unwrap();
        }
        for row in &self.rows {
            writer.write_record(row.iter()).unwrap();
        }
        writer.flush().unwrap();
    }
}
