// ==========================================
// Pool Planner - Data cleaner
// ==========================================
// Responsibility: TRIM / NULL normalization / marker detection / date parsing
// ==========================================

use crate::domain::cell::CellValue;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use chrono::NaiveDate;

/// Content of a marker column that switches the attribute on
pub const MARKER: &str = "x";

const DATE_SEPARATORS: [char; 3] = ['.', '/', '-'];

pub struct DataCleaner;

impl DataCleaner {
    fn digits_within(part: &str, min: usize, max: usize) -> Option<u32> {
        if part.len() < min || part.len() > max || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    }
}

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn normalize_null(&self, cell: &CellValue) -> Option<String> {
        if cell.is_blank() {
            return None;
        }
        let text = self.clean_text(&cell.to_string());
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn is_marker(&self, cell: &CellValue) -> bool {
        cell.as_text()
            .map(|s| s.trim().eq_ignore_ascii_case(MARKER))
            .unwrap_or(false)
    }

    fn parse_date_dmy(&self, value: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = value.split(DATE_SEPARATORS).collect();
        if parts.len() != 3 {
            return None;
        }

        let day = Self::digits_within(parts[0], 1, 2)?;
        let month = Self::digits_within(parts[1], 1, 2)?;
        let year = Self::digits_within(parts[2], 4, 4)?;

        // from_ymd_opt refuses impossible dates such as 31.02
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%-d.%-m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(&CellValue::Empty), None);
        assert_eq!(cleaner.normalize_null(&CellValue::text("   ")), None);
        assert_eq!(
            cleaner.normalize_null(&CellValue::text("  1234  ")),
            Some("1234".to_string())
        );
        assert_eq!(
            cleaner.normalize_null(&CellValue::Number(1234.0)),
            Some("1234".to_string())
        );
    }

    #[test]
    fn test_is_marker_case_insensitive() {
        let cleaner = DataCleaner;
        assert!(cleaner.is_marker(&CellValue::text("x")));
        assert!(cleaner.is_marker(&CellValue::text("X")));
        assert!(cleaner.is_marker(&CellValue::text(" x ")));
        assert!(!cleaner.is_marker(&CellValue::text("xx")));
        assert!(!cleaner.is_marker(&CellValue::text("ja")));
        assert!(!cleaner.is_marker(&CellValue::Empty));
        assert!(!cleaner.is_marker(&CellValue::Bool(true)));
    }

    #[test]
    fn test_parse_date_separators() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_date_dmy("01.02.2010"), Some(ymd(2010, 2, 1)));
        assert_eq!(cleaner.parse_date_dmy("1/2/2010"), Some(ymd(2010, 2, 1)));
        assert_eq!(cleaner.parse_date_dmy("3-3-2009"), Some(ymd(2009, 3, 3)));
    }

    #[test]
    fn test_parse_date_rejects_bad_shapes() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_date_dmy("2010-02-01"), None);
        assert_eq!(cleaner.parse_date_dmy("01.02.10"), None);
        assert_eq!(cleaner.parse_date_dmy("001.02.2010"), None);
        assert_eq!(cleaner.parse_date_dmy("01.02"), None);
        assert_eq!(cleaner.parse_date_dmy("a1.02.2010"), None);
        assert_eq!(cleaner.parse_date_dmy(""), None);
        assert_eq!(cleaner.parse_date_dmy("01.02.2010 "), None);
        assert_eq!(cleaner.parse_date_dmy(" 01.02.2010"), None);
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_date_dmy("31.02.2011"), None);
        assert_eq!(cleaner.parse_date_dmy("29.02.2011"), None);
        assert_eq!(cleaner.parse_date_dmy("29.02.2012"), Some(ymd(2012, 2, 29)));
        assert_eq!(cleaner.parse_date_dmy("0.1.2012"), None);
    }

    #[test]
    fn test_format_date() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.format_date(ymd(2010, 2, 1)), "1.2.2010");
        assert_eq!(cleaner.format_date(ymd(2009, 12, 24)), "24.12.2009");
    }
}
