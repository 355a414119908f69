// ==========================================
// Pool Planner - Competition configuration
// ==========================================
// Responsibility: pool table, group limits, locale and layout in one struct
// Format: JSON, every field optional (missing fields take the defaults)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::layout::{RosterLayout, CURRENT_LAYOUT_VERSION};
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Group limit for pools that do not set their own
pub const DEFAULT_MAX_GROUPS: usize = 6;

// ==========================================
// PoolDefinition - one pool of the competition
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolDefinition {
    pub name: String,
    /// Accepted categories; position is the within-pool rank
    pub categories: Vec<String>,
    #[serde(default)]
    pub max_groups: Option<usize>,
}

impl PoolDefinition {
    pub fn new(name: &str, categories: &[&str], max_groups: usize) -> Self {
        Self {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            max_groups: Some(max_groups),
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// category -> rank within this pool
    pub fn category_order(&self) -> HashMap<String, usize> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect()
    }
}

// ==========================================
// CompetitionConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionConfig {
    pub locale: String,
    /// Club used when the header cell is empty; localized default when None
    pub unknown_club: Option<String>,
    pub layout: RosterLayout,
    /// Declaration order is the partition order
    pub pools: Vec<PoolDefinition>,
    pub default_max_groups: usize,
    pub include_schedule: bool,
    pub include_rejections: bool,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            unknown_club: None,
            layout: RosterLayout::default(),
            pools: vec![
                PoolDefinition::new("Pool 1", &["rekrutt", "13-14"], 6),
                PoolDefinition::new("Pool 2", &["15-16"], 3),
                PoolDefinition::new("Pool 3", &["17-18", "senior"], 3),
            ],
            default_max_groups: DEFAULT_MAX_GROUPS,
            include_schedule: true,
            include_rejections: true,
        }
    }
}

impl CompetitionConfig {
    pub fn resolved_unknown_club(&self) -> String {
        match &self.unknown_club {
            Some(club) if !club.trim().is_empty() => club.trim().to_string(),
            _ => i18n::t(&self.locale, "club.unknown"),
        }
    }

    /// Structural checks run before any import starts
    pub fn validate(&self) -> ConfigResult<()> {
        if self.layout.version != CURRENT_LAYOUT_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported roster layout version {} (supported: {})",
                self.layout.version, CURRENT_LAYOUT_VERSION
            )));
        }
        if self.layout.category_columns.is_empty() {
            return Err(ConfigError::Invalid(
                "layout has no category columns".to_string(),
            ));
        }
        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::Invalid(format!(
                "unsupported locale '{}' (supported: {})",
                self.locale,
                i18n::SUPPORTED_LOCALES.join(", ")
            )));
        }
        if self.pools.is_empty() {
            return Err(ConfigError::Invalid("no pools configured".to_string()));
        }
        if self.default_max_groups == 0 {
            return Err(ConfigError::Invalid(
                "default_max_groups must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for pool in &self.pools {
            if !seen.insert(pool.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate pool name '{}'",
                    pool.name
                )));
            }
            if pool.categories.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "pool '{}' has no categories",
                    pool.name
                )));
            }
            if pool.max_groups == Some(0) {
                return Err(ConfigError::Invalid(format!(
                    "pool '{}' must allow at least one group",
                    pool.name
                )));
            }
            if let Some(unknown) = pool
                .categories
                .iter()
                .find(|c| !self.layout.knows_category(c))
            {
                return Err(ConfigError::Invalid(format!(
                    "pool '{}' references category '{}' that no layout column produces",
                    pool.name, unknown
                )));
            }
        }
        Ok(())
    }
}
