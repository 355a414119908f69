// ==========================================
// Pool Planner - Row validator
// ==========================================
// Responsibility: name / date of birth / coach conflict checks per roster row
// Output: localized, human readable reasons for the rejected-row report
// ==========================================

use crate::domain::cell::CellValue;
use crate::i18n;
use crate::importer::data_cleaner::{DataCleaner, MARKER};
use crate::importer::importer_trait::{DataCleaner as _, RowValidator};
use chrono::NaiveDate;

pub struct RosterRowValidator {
    locale: String, // language of the reasons
    cleaner: DataCleaner,
}

impl RosterRowValidator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            cleaner: DataCleaner,
        }
    }
}

impl RowValidator for RosterRowValidator {
    fn check_name(&self, cell: &CellValue, club: &str) -> Result<String, String> {
        // only text cells can hold a name
        let name = cell
            .as_text()
            .map(|s| self.cleaner.clean_text(s))
            .unwrap_or_default();

        let invalid = name.is_empty()
            || name.eq_ignore_ascii_case(MARKER)
            || name.chars().any(|c| c.is_ascii_digit());

        if invalid {
            let value = cell.to_string();
            return Err(i18n::t_with_args(
                &self.locale,
                "reason.invalid_name",
                &[("club", club), ("value", &value)],
            ));
        }
        Ok(name)
    }

    fn check_date_of_birth(&self, cell: &CellValue) -> Result<NaiveDate, String> {
        let parsed = match cell {
            CellValue::Date(date) => Some(*date),
            CellValue::Text(s) => self.cleaner.parse_date_dmy(s),
            _ => None,
        };

        parsed.ok_or_else(|| {
            let value = cell.to_string();
            i18n::t_with_args(&self.locale, "reason.invalid_dob", &[("value", &value)])
        })
    }

    fn check_coach_conflict(&self, coach_marked: bool, category: Option<&str>) -> Option<String> {
        if coach_marked && category.is_some() {
            Some(i18n::t(&self.locale, "reason.coach_conflict"))
        } else {
            None
        }
    }
}
