// ==========================================
// Pool Planner - Roster importer
// ==========================================
// Responsibility: file -> grid -> ExtractionResult, one isolated outcome per file
// Concurrency: each file on its own blocking task, joined before returning
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::domain::entrant::{Entrant, ExtractionResult, SourcedRejection};
use crate::importer::entrant_extractor::EntrantExtractor;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FileParser, RosterImporter};
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// UploadOutcome - result of one input file
// ==========================================
#[derive(Debug)]
pub struct UploadOutcome {
    pub upload_id: Uuid,
    pub file_name: String,
    pub file_path: PathBuf,
    pub result: ImportResult<ExtractionResult>,
}

impl UploadOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn entrants(&self) -> &[Entrant] {
        self.result.as_ref().map(|r| r.valid.as_slice()).unwrap_or(&[])
    }

    /// Rejected rows tagged with this file's name
    pub fn rejections(&self) -> Vec<SourcedRejection> {
        match &self.result {
            Ok(extraction) => extraction
                .invalid
                .iter()
                .map(|row| SourcedRejection {
                    source: self.file_name.clone(),
                    row: row.clone(),
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Drop repeated inputs, keyed on file name, size and modification time
///
/// Paths whose metadata cannot be read are kept so the import reports them.
pub fn dedupe_paths(file_paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen: HashSet<(String, u64, Option<SystemTime>)> = HashSet::new();
    let mut unique = Vec::with_capacity(file_paths.len());

    for path in file_paths {
        match fs::metadata(&path) {
            Ok(meta) => {
                let key = (file_name_of(&path), meta.len(), meta.modified().ok());
                if seen.insert(key) {
                    unique.push(path);
                } else {
                    debug!(file = %path.display(), "duplicate upload skipped");
                }
            }
            Err(_) => unique.push(path),
        }
    }
    unique
}

// ==========================================
// RosterImporterImpl
// ==========================================
pub struct RosterImporterImpl {
    file_parser: Arc<dyn FileParser>,
    extractor: Arc<EntrantExtractor>,
}

impl RosterImporterImpl {
    /// Importer with the extension-dispatching parser
    pub fn new(config: &dyn ImportConfigReader) -> Self {
        Self::with_components(
            Arc::new(UniversalFileParser),
            Arc::new(EntrantExtractor::new(config)),
        )
    }

    pub fn with_components(file_parser: Arc<dyn FileParser>, extractor: Arc<EntrantExtractor>) -> Self {
        Self {
            file_parser,
            extractor,
        }
    }

    fn import_blocking(
        parser: &dyn FileParser,
        extractor: &EntrantExtractor,
        path: &Path,
    ) -> ImportResult<ExtractionResult> {
        let grid = parser.parse_to_grid(path)?;
        Ok(extractor.extract(&grid))
    }
}

#[async_trait]
impl RosterImporter for RosterImporterImpl {
    #[instrument(skip(self), fields(file = %file_path.display()))]
    async fn import_file(&self, file_path: PathBuf) -> UploadOutcome {
        let upload_id = Uuid::new_v4();
        let file_name = file_name_of(&file_path);
        let started = Instant::now();
        info!(upload_id = %upload_id, "importing roster");

        let parser = Arc::clone(&self.file_parser);
        let extractor = Arc::clone(&self.extractor);
        let path = file_path.clone();

        let result = tokio::task::spawn_blocking(move || {
            Self::import_blocking(parser.as_ref(), extractor.as_ref(), &path)
        })
        .await
        .map_err(ImportError::from)
        .and_then(|inner| inner);

        match &result {
            Ok(extraction) => info!(
                upload_id = %upload_id,
                club = %extraction.club,
                valid = extraction.valid.len(),
                rejected = extraction.invalid.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "roster imported"
            ),
            Err(e) => error!(upload_id = %upload_id, error = %e, "roster import failed"),
        }

        UploadOutcome {
            upload_id,
            file_name,
            file_path,
            result,
        }
    }

    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<UploadOutcome> {
        let requested = file_paths.len();
        let unique = dedupe_paths(file_paths);
        info!(requested, unique = unique.len(), "starting batch import");

        let outcomes = join_all(unique.into_iter().map(|path| self.import_file(path))).await;

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            warn!(failed, "some rosters could not be read");
        }
        info!(
            total = outcomes.len(),
            success = outcomes.len() - failed,
            failed,
            "batch import finished"
        );
        outcomes
    }
}
