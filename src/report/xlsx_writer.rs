// ==========================================
// Pool Planner - XLSX report writer
// ==========================================
// Responsibility: ReportSheet list -> .xlsx file or in-memory buffer
// Rule: sheet names are made valid for Excel (31 chars, no []:*?/\) and unique
// ==========================================

use crate::report::error::ReportResult;
use crate::report::ReportSheet;
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const MAX_SHEET_NAME_LEN: usize = 31;
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

fn is_edge_trimmed(c: char) -> bool {
    c == '\'' || c.is_whitespace()
}

/// First `len` chars, without a trailing apostrophe or space left by the cut
fn truncate_name(name: &str, len: usize) -> String {
    let cut: String = name.chars().take(len).collect();
    cut.trim_end_matches(is_edge_trimmed).to_string()
}

/// Excel-safe sheet name, suffixed when already taken
pub fn sanitize_sheet_name(name: &str, taken: &HashSet<String>) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(is_edge_trimmed);
    let base: String = if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        truncate_name(cleaned, MAX_SHEET_NAME_LEN)
    };

    let mut candidate = base.clone();
    let mut n = 2;
    // Excel compares sheet names case-insensitively
    while taken.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
        candidate = format!("{}{}", truncate_name(&base, keep), suffix);
        n += 1;
    }
    candidate
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(&self, sheets: &[ReportSheet]) -> ReportResult<Workbook> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let mut taken: HashSet<String> = HashSet::new();

        for sheet in sheets {
            let name = sanitize_sheet_name(&sheet.name, &taken);
            taken.insert(name.to_lowercase());

            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&name)?;

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let is_bold = sheet.is_bold(row_idx);
                for (col_idx, value) in row.iter().enumerate() {
                    if value.is_empty() {
                        continue;
                    }
                    let (r, c) = (row_idx as u32, col_idx as u16);
                    if is_bold {
                        worksheet.write_string_with_format(r, c, value, &bold)?;
                    } else {
                        worksheet.write_string(r, c, value)?;
                    }
                }
            }
            worksheet.set_column_width(0, 28)?;
            worksheet.set_column_width(1, 24)?;
        }
        Ok(workbook)
    }

    pub fn write_to_path(&self, sheets: &[ReportSheet], path: &Path) -> ReportResult<()> {
        let mut workbook = self.build_workbook(sheets)?;
        workbook.save(path)?;
        info!(path = %path.display(), sheets = sheets.len(), "report written");
        Ok(())
    }

    pub fn write_to_buffer(&self, sheets: &[ReportSheet]) -> ReportResult<Vec<u8>> {
        let mut workbook = self.build_workbook(sheets)?;
        Ok(workbook.save_to_buffer()?)
    }
}
