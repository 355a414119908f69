// ==========================================
// Pool Planner - Configuration layer
// ==========================================
// Responsibility: roster layout schema, pool table, locale
// Storage: optional JSON file, defaults otherwise
// ==========================================

pub mod competition;
pub mod config_manager;
pub mod error;
pub mod import_config_trait;
pub mod layout;

pub use competition::{CompetitionConfig, PoolDefinition, DEFAULT_MAX_GROUPS};
pub use config_manager::{ConfigManager, ConfigSource};
pub use error::{ConfigError, ConfigResult};
pub use import_config_trait::ImportConfigReader;
pub use layout::{CategoryColumn, CellRef, RosterLayout, CURRENT_LAYOUT_VERSION};
