// ==========================================
// Pool Planner - Pool partitioner
// ==========================================
// Responsibility: route each entrant to the first pool accepting its category
// Rule: pools are tried in declaration order
// Output: non-empty pools in declaration order + entrants no pool accepts
// ==========================================

use crate::config::competition::PoolDefinition;
use crate::domain::entrant::Entrant;

// ==========================================
// PoolPartition - output of the partition step
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolPartition {
    /// (pool index in declaration order, entrants in input order)
    pub pools: Vec<(usize, Vec<Entrant>)>,
    pub unplaced: Vec<Entrant>,
}

pub struct PoolPartitioner<'a> {
    pools: &'a [PoolDefinition],
}

impl<'a> PoolPartitioner<'a> {
    pub fn new(pools: &'a [PoolDefinition]) -> Self {
        Self { pools }
    }

    fn pool_index_for(&self, category: &str) -> Option<usize> {
        self.pools.iter().position(|pool| pool.accepts(category))
    }

    pub fn partition(&self, entrants: &[Entrant]) -> PoolPartition {
        let mut buckets: Vec<Vec<Entrant>> = vec![Vec::new(); self.pools.len()];
        let mut unplaced = Vec::new();

        for entrant in entrants {
            match self.pool_index_for(&entrant.category) {
                Some(idx) => buckets[idx].push(entrant.clone()),
                None => unplaced.push(entrant.clone()),
            }
        }

        let pools = buckets
            .into_iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .collect();

        PoolPartition { pools, unplaced }
    }
}
