// ==========================================
// Pool Planner - Import configuration reader trait
// ==========================================
// Responsibility: the configuration the extractor needs, nothing more
// Boundary: read only, no planning settings
// ==========================================

use crate::config::competition::CompetitionConfig;
use crate::config::layout::RosterLayout;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// Implemented by: CompetitionConfig, ConfigManager
pub trait ImportConfigReader: Send + Sync {
    /// Cell offsets of the roster template
    fn roster_layout(&self) -> &RosterLayout;

    /// Club assigned when the header cell is empty
    ///
    /// # Default
    /// - localized "Unknown club" / "Ukjent klubb"
    fn unknown_club(&self) -> String;

    /// Locale rejection reasons are written in
    fn message_locale(&self) -> &str;
}

impl ImportConfigReader for CompetitionConfig {
    fn roster_layout(&self) -> &RosterLayout {
        &self.layout
    }

    fn unknown_club(&self) -> String {
        self.resolved_unknown_club()
    }

    fn message_locale(&self) -> &str {
        &self.locale
    }
}
