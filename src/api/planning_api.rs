// ==========================================
// Pool Planner - Planning API
// ==========================================
// Responsibility: roster files -> entrants -> group plan -> report sheets
// Flow: batch import (parallel, isolated) -> barrier -> plan once -> assemble
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::competition::CompetitionConfig;
use crate::config::config_manager::ConfigManager;
use crate::domain::cell::SheetGrid;
use crate::domain::entrant::{Entrant, SourcedRejection};
use crate::domain::plan::GroupPlan;
use crate::engine::group_planner::GroupPlanner;
use crate::importer::entrant_extractor::EntrantExtractor;
use crate::importer::importer_trait::RosterImporter;
use crate::importer::roster_importer::{RosterImporterImpl, UploadOutcome};
use crate::report::assembler::ReportAssembler;
use crate::report::xlsx_writer::XlsxReportWriter;
use crate::report::ReportSheet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// PlanningOutcome - uploads plus the plan built from them
// ==========================================
#[derive(Debug)]
pub struct PlanningOutcome {
    pub uploads: Vec<UploadOutcome>,
    pub plan: GroupPlan,
}

impl PlanningOutcome {
    /// Valid entrants of all readable uploads, in upload order
    pub fn entrants(&self) -> Vec<Entrant> {
        self.uploads
            .iter()
            .flat_map(|u| u.entrants().iter().cloned())
            .collect()
    }

    pub fn rejections(&self) -> Vec<SourcedRejection> {
        self.uploads.iter().flat_map(UploadOutcome::rejections).collect()
    }

    pub fn failed_uploads(&self) -> Vec<&UploadOutcome> {
        self.uploads.iter().filter(|u| !u.is_ok()).collect()
    }

    /// Err when there were uploads and none of them could be read
    pub fn check_uploads(&self) -> ApiResult<()> {
        let failed = self.failed_uploads().len();
        if !self.uploads.is_empty() && failed == self.uploads.len() {
            return Err(ApiError::AllUploadsFailed(failed));
        }
        Ok(())
    }

    pub fn summary(&self) -> PlanSummary {
        let files = self
            .uploads
            .iter()
            .map(|u| match &u.result {
                Ok(extraction) => FileSummary {
                    upload_id: u.upload_id,
                    file_name: u.file_name.clone(),
                    club: Some(extraction.club.clone()),
                    valid: extraction.valid.len(),
                    rejected: extraction.invalid.len(),
                    dropped_no_category: extraction.summary.dropped_no_category,
                    error: None,
                },
                Err(e) => FileSummary {
                    upload_id: u.upload_id,
                    file_name: u.file_name.clone(),
                    club: None,
                    valid: 0,
                    rejected: 0,
                    dropped_no_category: 0,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        let pools = self
            .plan
            .pools
            .iter()
            .map(|p| PoolSummary {
                pool_name: p.pool_name.clone(),
                groups: p.groups.iter().map(Vec::len).collect(),
                entrants: p.entrant_count(),
            })
            .collect();

        PlanSummary {
            files,
            pools,
            unplaced: self.plan.unplaced.len(),
        }
    }
}

/// Per-file line of the run summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub upload_id: Uuid,
    pub file_name: String,
    pub club: Option<String>,
    pub valid: usize,
    pub rejected: usize,
    pub dropped_no_category: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSummary {
    pub pool_name: String,
    pub groups: Vec<usize>, // size of each group, in group order
    pub entrants: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub files: Vec<FileSummary>,
    pub pools: Vec<PoolSummary>,
    pub unplaced: usize,
}

// ==========================================
// PlanningApi
// ==========================================
pub struct PlanningApi {
    config: CompetitionConfig,
    importer: Arc<dyn RosterImporter>,
    extractor: EntrantExtractor,
    planner: GroupPlanner,
    assembler: ReportAssembler,
    writer: XlsxReportWriter,
}

impl PlanningApi {
    /// Validate the configuration and wire every stage from it
    pub fn new(config: CompetitionConfig) -> ApiResult<Self> {
        config.validate()?;
        let importer: Arc<dyn RosterImporter> = Arc::new(RosterImporterImpl::new(&config));
        Ok(Self::with_importer(config, importer))
    }

    pub fn from_manager(manager: &ConfigManager) -> ApiResult<Self> {
        Self::new(manager.config().clone())
    }

    /// Same pipeline with a caller-supplied importer
    pub fn with_importer(config: CompetitionConfig, importer: Arc<dyn RosterImporter>) -> Self {
        Self {
            extractor: EntrantExtractor::new(&config),
            planner: GroupPlanner::from_config(&config),
            assembler: ReportAssembler::from_config(&config),
            writer: XlsxReportWriter::new(),
            importer,
            config,
        }
    }

    pub fn config(&self) -> &CompetitionConfig {
        &self.config
    }

    // ==========================================
    // Planning
    // ==========================================

    /// Import every file, then plan once over all readable uploads
    ///
    /// Files that fail to decode stay in `uploads` with their error; they do
    /// not abort the run.
    #[instrument(skip(self, file_paths), fields(files = file_paths.len()))]
    pub async fn plan_from_files(&self, file_paths: Vec<PathBuf>) -> ApiResult<PlanningOutcome> {
        if file_paths.is_empty() {
            return Err(ApiError::InvalidInput("no roster files given".to_string()));
        }

        let uploads = self.importer.batch_import(file_paths).await;
        for failed in uploads.iter().filter(|u| !u.is_ok()) {
            if let Err(e) = &failed.result {
                warn!(file = %failed.file_name, error = %e, "roster skipped");
            }
        }

        let entrants: Vec<Entrant> = uploads
            .iter()
            .flat_map(|u| u.entrants().iter().cloned())
            .collect();
        let plan = self.planner.generate_plan(&entrants);

        info!(
            uploads = uploads.len(),
            entrants = entrants.len(),
            pools = plan.pools.len(),
            "planning finished"
        );
        Ok(PlanningOutcome { uploads, plan })
    }

    /// Plan directly from decoded grids, one upload per grid
    pub fn plan_from_grids(&self, grids: &[SheetGrid]) -> PlanningOutcome {
        let uploads: Vec<UploadOutcome> = grids
            .iter()
            .map(|grid| UploadOutcome {
                upload_id: Uuid::new_v4(),
                file_name: grid.sheet_name.clone(),
                file_path: PathBuf::new(),
                result: Ok(self.extractor.extract(grid)),
            })
            .collect();

        let entrants: Vec<Entrant> = uploads
            .iter()
            .flat_map(|u| u.entrants().iter().cloned())
            .collect();
        let plan = self.planner.generate_plan(&entrants);
        PlanningOutcome { uploads, plan }
    }

    // ==========================================
    // Report
    // ==========================================

    pub fn assemble(&self, outcome: &PlanningOutcome) -> ApiResult<Vec<ReportSheet>> {
        Ok(self.assembler.assemble(&outcome.plan, &outcome.rejections())?)
    }

    pub fn write_workbook(&self, outcome: &PlanningOutcome, path: &Path) -> ApiResult<()> {
        let sheets = self.assemble(outcome)?;
        self.writer.write_to_path(&sheets, path)?;
        Ok(())
    }

    pub fn workbook_bytes(&self, outcome: &PlanningOutcome) -> ApiResult<Vec<u8>> {
        let sheets = self.assemble(outcome)?;
        Ok(self.writer.write_to_buffer(&sheets)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::CellValue;

    fn roster(club: &str, rows: &[[&str; 10]]) -> SheetGrid {
        let mut grid = SheetGrid::new(club, vec![]);
        grid.set(2, 2, CellValue::from(club));
        for (i, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                grid.set(9 + i, col, CellValue::from(*value));
            }
        }
        grid
    }

    fn api() -> PlanningApi {
        PlanningApi::new(CompetitionConfig::default()).unwrap()
    }

    #[test]
    fn test_oslo_tf_pair_shares_group() {
        let grid = roster(
            "Oslo TF",
            &[
                ["1", "Kari Nilsen", "", "", "01.02.2011", "", "x", "", "", ""],
                ["2", "Per Olsen", "", "", "03.04.2011", "", "x", "", "", ""],
            ],
        );
        let outcome = api().plan_from_grids(&[grid]);

        let pool = outcome.plan.pool("Pool 1").unwrap();
        let with_entrants: Vec<_> = pool.groups.iter().filter(|g| !g.is_empty()).collect();
        assert_eq!(with_entrants.len(), 1);
        assert_eq!(with_entrants[0].len(), 2);
    }

    #[test]
    fn test_rejections_reach_summary() {
        let grid = roster(
            "Oslo TF",
            &[
                ["1", "Ola123", "", "", "01.02.2011", "", "x", "", "", ""],
                ["2", "Kari Nilsen", "", "", "31.02.2011", "", "x", "", "", ""],
                ["3", "Per Olsen", "", "", "03.04.2011", "", "", "x", "", ""],
            ],
        );
        let outcome = api().plan_from_grids(&[grid]);

        assert_eq!(outcome.rejections().len(), 2);
        let summary = outcome.summary();
        assert_eq!(summary.files[0].valid, 1);
        assert_eq!(summary.files[0].rejected, 2);
        assert_eq!(summary.pools[0].pool_name, "Pool 2");
    }

    #[test]
    fn test_empty_outcome_fails_assembly() {
        let outcome = api().plan_from_grids(&[]);
        let err = api().assemble(&outcome).unwrap_err();
        assert!(err.is_empty_plan());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CompetitionConfig {
            pools: vec![],
            ..Default::default()
        };
        assert!(matches!(PlanningApi::new(config), Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_no_files_is_invalid_input() {
        let result = api().plan_from_files(vec![]).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_all_uploads_failed() {
        let outcome = api()
            .plan_from_files(vec![PathBuf::from("/nonexistent/roster.xlsx")])
            .await
            .unwrap();
        assert!(outcome.plan.is_empty());
        assert!(matches!(outcome.check_uploads(), Err(ApiError::AllUploadsFailed(1))));
    }
}
