// ==========================================
// Pool Planner - Report assembler
// ==========================================
// Responsibility: GroupPlan + rejections -> ordered list of ReportSheet
// Sheets: one per pool, then schedule, then rejected rows (both optional)
// Rule: a plan without pools is an error, never an empty workbook
// ==========================================

use crate::config::competition::CompetitionConfig;
use crate::domain::entrant::SourcedRejection;
use crate::domain::plan::{GroupPlan, PoolGroups};
use crate::i18n;
use crate::report::error::{ReportError, ReportResult};
use crate::report::schedule::build_schedule_sheet;
use crate::report::ReportSheet;
use tracing::{debug, info};

pub struct ReportAssembler {
    locale: String,
    include_schedule: bool,
    include_rejections: bool,
    pool_names: Vec<String>, // declared pools, used by the schedule
}

impl ReportAssembler {
    pub fn new(locale: &str, pool_names: Vec<String>) -> Self {
        Self {
            locale: locale.to_string(),
            include_schedule: true,
            include_rejections: true,
            pool_names,
        }
    }

    pub fn from_config(config: &CompetitionConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            include_schedule: config.include_schedule,
            include_rejections: config.include_rejections,
            pool_names: config.pools.iter().map(|p| p.name.clone()).collect(),
        }
    }

    pub fn with_schedule(mut self, include: bool) -> Self {
        self.include_schedule = include;
        self
    }

    pub fn with_rejections(mut self, include: bool) -> Self {
        self.include_rejections = include;
        self
    }

    fn text(&self, key: &str) -> String {
        i18n::t(&self.locale, key)
    }

    /// Build every output sheet
    ///
    /// # Errors
    /// - `ReportError::EmptyPlan` when the plan has no pools
    pub fn assemble(
        &self,
        plan: &GroupPlan,
        rejections: &[SourcedRejection],
    ) -> ReportResult<Vec<ReportSheet>> {
        if plan.is_empty() {
            return Err(ReportError::EmptyPlan(self.text("report.empty_plan")));
        }

        let mut sheets: Vec<ReportSheet> = plan.pools.iter().map(|p| self.pool_sheet(p)).collect();

        if self.include_schedule {
            sheets.push(build_schedule_sheet(&self.locale, &self.pool_names));
        }
        // A rejected sheet without rows carries no information
        if self.include_rejections && !rejections.is_empty() {
            sheets.push(self.rejected_sheet(rejections));
        }

        info!(
            sheets = sheets.len(),
            pools = plan.pools.len(),
            rejections = rejections.len(),
            "report assembled"
        );
        Ok(sheets)
    }

    /// Header, then per group a marker row, its entrants and a blank line
    pub fn pool_sheet(&self, pool: &PoolGroups) -> ReportSheet {
        let mut sheet = ReportSheet::new(pool.pool_name.clone());
        sheet.push_bold_row([
            self.text("report.header_name"),
            self.text("report.header_club"),
            self.text("report.header_category"),
        ]);

        for (idx, group) in pool.groups.iter().enumerate() {
            let number = (idx + 1).to_string();
            let label =
                i18n::t_with_args(&self.locale, "report.group_label", &[("number", number.as_str())]);
            sheet.push_bold_row([pool.pool_name.clone(), label]);
            for entrant in group {
                sheet.push_row([
                    entrant.full_name.as_str(),
                    entrant.club.as_str(),
                    entrant.category.as_str(),
                ]);
            }
            sheet.push_blank();
        }

        debug!(pool = %pool.pool_name, rows = sheet.rows.len(), "pool sheet built");
        sheet
    }

    pub fn rejected_sheet(&self, rejections: &[SourcedRejection]) -> ReportSheet {
        let mut sheet = ReportSheet::new(self.text("report.rejected_sheet"));
        sheet.push_bold_row([
            self.text("report.header_file"),
            self.text("report.header_row"),
            self.text("report.header_name"),
            self.text("report.header_club"),
            self.text("report.header_reasons"),
        ]);

        for rejection in rejections {
            let row = &rejection.row;
            sheet.push_row([
                rejection.source.clone(),
                row.row_number.to_string(),
                row.name.clone().unwrap_or_default(),
                row.club.clone().unwrap_or_default(),
                row.reasons_joined(),
            ]);
        }
        sheet
    }
}
