// ==========================================
// Pool Planner - Group planner
// ==========================================
// Responsibility: merged entrants -> pools -> balanced groups
// Input: validated entrants of every upload
// Output: GroupPlan (pools in declaration order, unplaced entrants)
// Rule: deterministic; a club never spans two groups of a pool
// ==========================================

use crate::config::competition::{CompetitionConfig, PoolDefinition};
use crate::domain::entrant::Entrant;
use crate::domain::plan::{Group, GroupPlan, PoolGroups};
use crate::engine::group_balancer::{
    category_rank, cluster_by_club, GreedyClubBalancer, GroupBalancer,
};
use crate::engine::pool_partitioner::PoolPartitioner;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

// ==========================================
// GroupPlanner
// ==========================================
pub struct GroupPlanner {
    pools: Vec<PoolDefinition>,
    default_max_groups: usize,
    balancer: Box<dyn GroupBalancer>,
}

impl GroupPlanner {
    pub fn new(pools: Vec<PoolDefinition>, default_max_groups: usize) -> Self {
        Self::with_balancer(pools, default_max_groups, Box::new(GreedyClubBalancer::new()))
    }

    pub fn with_balancer(
        pools: Vec<PoolDefinition>,
        default_max_groups: usize,
        balancer: Box<dyn GroupBalancer>,
    ) -> Self {
        Self {
            pools,
            default_max_groups,
            balancer,
        }
    }

    pub fn from_config(config: &CompetitionConfig) -> Self {
        Self::new(config.pools.clone(), config.default_max_groups)
    }

    pub fn pools(&self) -> &[PoolDefinition] {
        &self.pools
    }

    fn max_groups_for(&self, pool: &PoolDefinition) -> usize {
        pool.max_groups.unwrap_or(self.default_max_groups)
    }

    // ==========================================
    // Plan generation
    // ==========================================

    /// Build the full plan for the merged entrant list
    ///
    /// An empty entrant list gives an empty plan; the report layer decides
    /// whether that is an error.
    #[instrument(skip(self, entrants), fields(
        entrants = entrants.len(),
        balancer = self.balancer.name()
    ))]
    pub fn generate_plan(&self, entrants: &[Entrant]) -> GroupPlan {
        let partition = PoolPartitioner::new(&self.pools).partition(entrants);

        for entrant in &partition.unplaced {
            warn!(
                name = %entrant.full_name,
                club = %entrant.club,
                category = %entrant.category,
                "category belongs to no pool, entrant left out of the plan"
            );
        }

        let pools: Vec<PoolGroups> = partition
            .pools
            .into_iter()
            .map(|(idx, members)| {
                let pool = &self.pools[idx];
                let max_groups = self.max_groups_for(pool);
                let groups =
                    self.assign_groups_by_club(&members, max_groups, &pool.category_order());
                debug!(
                    pool = %pool.name,
                    entrants = members.len(),
                    groups = groups.len(),
                    "pool grouped"
                );
                PoolGroups {
                    pool_name: pool.name.clone(),
                    groups,
                }
            })
            .collect();

        let plan = GroupPlan {
            pools,
            unplaced: partition.unplaced,
        };
        info!(
            pools = plan.pools.len(),
            placed = plan.placed_count(),
            unplaced = plan.unplaced.len(),
            "group plan generated"
        );
        plan
    }

    /// Split one pool's entrants into `max_groups` club-preserving groups
    ///
    /// Each group is then stable-sorted by (category rank, club name).
    pub fn assign_groups_by_club(
        &self,
        entrants: &[Entrant],
        max_groups: usize,
        category_order: &HashMap<String, usize>,
    ) -> Vec<Group> {
        let clusters = cluster_by_club(entrants, category_order);
        let mut groups = self.balancer.balance(&clusters, max_groups);

        for group in &mut groups {
            group.sort_by(|a, b| {
                category_rank(category_order, &a.category)
                    .cmp(&category_rank(category_order, &b.category))
                    .then_with(|| a.club.cmp(&b.club))
            });
        }
        groups
    }
}

impl Default for GroupPlanner {
    fn default() -> Self {
        Self::from_config(&CompetitionConfig::default())
    }
}
