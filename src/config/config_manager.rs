// ==========================================
// Pool Planner - Config manager
// ==========================================
// Responsibility: locate, load, validate and snapshot the competition config
// Lookup: explicit path -> <config dir>/pool-planner/competition.json -> defaults
// ==========================================

use crate::config::competition::CompetitionConfig;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::import_config_trait::ImportConfigReader;
use crate::config::layout::RosterLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "competition.json";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: CompetitionConfig,
    source: ConfigSource,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: CompetitionConfig::default(),
            source: ConfigSource::Defaults,
        }
    }
}

impl ConfigManager {
    /// Wrap an in-memory config after validating it
    pub fn from_config(config: CompetitionConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source: ConfigSource::Defaults,
        })
    }

    /// Load a JSON config file
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: CompetitionConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        info!(path = %path.display(), pools = config.pools.len(), "loaded competition config");
        Ok(Self {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    /// Resolve the config the way the CLI does
    ///
    /// # Lookup order
    /// 1. `explicit` when given (must exist)
    /// 2. the user config directory, when the file exists
    /// 3. built-in defaults
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Some(path) = Self::default_config_path().filter(|p| p.exists()) {
            return Self::from_path(&path);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pool-planner").join(CONFIG_FILE_NAME))
    }

    pub fn config(&self) -> &CompetitionConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Override the message locale (CLI `--locale`)
    pub fn set_locale(&mut self, locale: &str) -> ConfigResult<()> {
        let mut candidate = self.config.clone();
        candidate.locale = locale.to_string();
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    pub fn set_include_schedule(&mut self, include: bool) {
        self.config.include_schedule = include;
    }

    pub fn set_include_rejections(&mut self, include: bool) {
        self.config.include_rejections = include;
    }

    /// Pretty JSON of the active config, written next to a plan for traceability
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

impl ImportConfigReader for ConfigManager {
    fn roster_layout(&self) -> &RosterLayout {
        &self.config.layout
    }

    fn unknown_club(&self) -> String {
        self.config.resolved_unknown_club()
    }

    fn message_locale(&self) -> &str {
        &self.config.locale
    }
}
