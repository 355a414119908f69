// ==========================================
// Pool Planner - Entrant extractor
// ==========================================
// Responsibility: one decoded roster sheet -> valid entrants + rejected rows
// Flow per row: blank check -> name -> date of birth -> coach conflict -> category
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::config::layout::RosterLayout;
use crate::domain::cell::SheetGrid;
use crate::domain::entrant::{Entrant, ExtractionResult, RejectedRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::importer_trait::{DataCleaner as DataCleanerTrait, RowValidator};
use crate::importer::row_validator::RosterRowValidator;
use tracing::{debug, info, instrument, warn};

/// How one data row was classified
#[derive(Debug, Clone, PartialEq)]
enum RowOutcome {
    /// No license number and no name
    Blank,
    /// Failed name or date of birth validation
    Rejected(RejectedRow),
    /// Validated but no category marker
    NoCategory,
    /// Valid entrant, possibly flagged (coach conflict)
    Accepted(Entrant, Option<RejectedRow>),
}

// ==========================================
// EntrantExtractor
// ==========================================
pub struct EntrantExtractor {
    layout: RosterLayout,
    unknown_club: String,
    cleaner: Box<dyn DataCleanerTrait>,
    validator: Box<dyn RowValidator>,
}

impl EntrantExtractor {
    /// Extractor with the default cleaner and validator
    pub fn new(config: &dyn ImportConfigReader) -> Self {
        Self::with_components(
            config.roster_layout().clone(),
            config.unknown_club(),
            Box::new(DataCleaner),
            Box::new(RosterRowValidator::new(config.message_locale())),
        )
    }

    pub fn with_components(
        layout: RosterLayout,
        unknown_club: String,
        cleaner: Box<dyn DataCleanerTrait>,
        validator: Box<dyn RowValidator>,
    ) -> Self {
        Self {
            layout,
            unknown_club,
            cleaner,
            validator,
        }
    }

    /// Extract all entrants of one sheet
    #[instrument(skip(self, grid), fields(sheet = %grid.sheet_name, rows = grid.row_count()))]
    pub fn extract(&self, grid: &SheetGrid) -> ExtractionResult {
        let club = self.read_club(grid);
        debug!(club = %club, "club resolved from header");

        let mut result = ExtractionResult {
            club: club.clone(),
            ..ExtractionResult::default()
        };

        for row_idx in self.layout.first_data_row..grid.row_count() {
            result.summary.data_rows += 1;

            match self.classify_row(grid, row_idx, &club) {
                RowOutcome::Blank => result.summary.skipped_blank += 1,
                RowOutcome::NoCategory => result.summary.dropped_no_category += 1,
                RowOutcome::Rejected(rejected) => {
                    warn!(
                        row = rejected.row_number,
                        club = %club,
                        reasons = %rejected.reasons_joined(),
                        "row rejected"
                    );
                    result.summary.rejected += 1;
                    result.invalid.push(rejected);
                }
                RowOutcome::Accepted(entrant, flagged) => {
                    if let Some(flagged) = flagged {
                        warn!(
                            row = flagged.row_number,
                            name = %entrant.full_name,
                            reasons = %flagged.reasons_joined(),
                            "row flagged, entrant kept"
                        );
                        result.summary.rejected += 1;
                        result.invalid.push(flagged);
                    }
                    result.summary.valid += 1;
                    result.valid.push(entrant);
                }
            }
        }

        info!(
            club = %club,
            data_rows = result.summary.data_rows,
            valid = result.summary.valid,
            rejected = result.summary.rejected,
            skipped = result.summary.skipped_blank,
            no_category = result.summary.dropped_no_category,
            "sheet extracted"
        );
        result
    }

    fn read_club(&self, grid: &SheetGrid) -> String {
        let cell = grid.cell(self.layout.club_cell.row, self.layout.club_cell.col);
        self.cleaner
            .normalize_null(cell)
            .unwrap_or_else(|| self.unknown_club.clone())
    }

    /// First marked category column in ascending column order
    fn match_category(&self, grid: &SheetGrid, row_idx: usize) -> Option<String> {
        self.layout
            .ordered_category_columns()
            .into_iter()
            .find(|c| self.cleaner.is_marker(grid.cell(row_idx, c.column)))
            .map(|c| c.category.clone())
    }

    fn classify_row(&self, grid: &SheetGrid, row_idx: usize, club: &str) -> RowOutcome {
        let layout = &self.layout;
        let row_number = row_idx + 1;

        let license = self
            .cleaner
            .normalize_null(grid.cell(row_idx, layout.license_column));
        let name_cell = grid.cell(row_idx, layout.name_column);

        // 1. blank rows
        if license.is_none() && name_cell.is_blank() {
            return RowOutcome::Blank;
        }

        let rejected = |name: Option<String>, reasons: Vec<String>| RejectedRow {
            row_number,
            name,
            club: Some(club.to_string()),
            reasons,
        };

        // 2. name
        let full_name = match self.validator.check_name(name_cell, club) {
            Ok(name) => name,
            Err(reason) => return RowOutcome::Rejected(rejected(None, vec![reason])),
        };

        // 3. date of birth, kept pending so later reasons accumulate on the same row
        let date_of_birth = self
            .validator
            .check_date_of_birth(grid.cell(row_idx, layout.dob_column));

        // 4. coach conflict (annotation only)
        let category = self.match_category(grid, row_idx);
        let coach_marked = self
            .cleaner
            .is_marker(grid.cell(row_idx, layout.coach_column));
        let coach_conflict = self
            .validator
            .check_coach_conflict(coach_marked, category.as_deref());

        let date_of_birth = match date_of_birth {
            Ok(date) => date,
            Err(reason) => {
                let reasons = std::iter::once(reason).chain(coach_conflict).collect();
                return RowOutcome::Rejected(rejected(Some(full_name), reasons));
            }
        };
        let flagged = coach_conflict.map(|reason| rejected(Some(full_name.clone()), vec![reason]));

        // 5. no category: not a competitor
        let Some(category) = category else {
            return match flagged {
                Some(row) => RowOutcome::Rejected(row),
                None => RowOutcome::NoCategory,
            };
        };

        // 6. entrant
        RowOutcome::Accepted(
            Entrant {
                license_number: license.unwrap_or_default(),
                full_name,
                date_of_birth: self.cleaner.format_date(date_of_birth),
                club: club.to_string(),
                category,
            },
            flagged,
        )
    }
}
