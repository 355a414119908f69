// ==========================================
// Pool Planner - Group plan domain model
// ==========================================
// Responsibility: pools, groups and the plan handed to the report assembler
// ==========================================

use crate::domain::entrant::Entrant;
use serde::{Deserialize, Serialize};

/// Entrants assigned together; index in the pool + 1 is the group number
pub type Group = Vec<Entrant>;

// ==========================================
// PoolGroups - groups of one pool
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolGroups {
    pub pool_name: String,
    pub groups: Vec<Group>,
}

impl PoolGroups {
    pub fn entrant_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Largest group size minus smallest group size
    pub fn size_spread(&self) -> usize {
        let max = self.groups.iter().map(Vec::len).max().unwrap_or(0);
        let min = self.groups.iter().map(Vec::len).min().unwrap_or(0);
        max - min
    }
}

// ==========================================
// GroupPlan - complete assignment result
// ==========================================
// Pools appear in declaration order; pools without entrants are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupPlan {
    pub pools: Vec<PoolGroups>,
    pub unplaced: Vec<Entrant>, // category matched no pool
}

impl GroupPlan {
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn pool(&self, name: &str) -> Option<&PoolGroups> {
        self.pools.iter().find(|p| p.pool_name == name)
    }

    pub fn pool_names(&self) -> Vec<&str> {
        self.pools.iter().map(|p| p.pool_name.as_str()).collect()
    }

    pub fn placed_count(&self) -> usize {
        self.pools.iter().map(PoolGroups::entrant_count).sum()
    }
}
