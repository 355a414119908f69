// ==========================================
// Pool Planner - Group balancer
// ==========================================
// Responsibility: distribute club clusters over a fixed number of groups
// Rule: a club cluster is never split
// Rule: no randomness, no clock; equal input gives equal output
// ==========================================

use crate::domain::entrant::Entrant;
use crate::domain::plan::Group;
use std::collections::HashMap;

/// Rank used for categories the pool does not list
pub const UNKNOWN_CATEGORY_RANK: usize = 99;

// ==========================================
// ClubCluster - all entrants of one club within a pool
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ClubCluster {
    pub club: String,
    pub entrants: Vec<Entrant>, // input order
    pub min_rank: usize,        // youngest category rank present in the club
}

impl ClubCluster {
    pub fn size(&self) -> usize {
        self.entrants.len()
    }
}

pub fn category_rank(category_order: &HashMap<String, usize>, category: &str) -> usize {
    category_order
        .get(category)
        .copied()
        .unwrap_or(UNKNOWN_CATEGORY_RANK)
}

/// Cluster entrants by club and order clusters by (minimum rank, club name)
///
/// Clusters are first built in first-seen order; the sort is stable.
pub fn cluster_by_club(
    entrants: &[Entrant],
    category_order: &HashMap<String, usize>,
) -> Vec<ClubCluster> {
    let mut index_by_club: HashMap<&str, usize> = HashMap::new();
    let mut clusters: Vec<ClubCluster> = Vec::new();

    for entrant in entrants {
        let rank = category_rank(category_order, &entrant.category);
        match index_by_club.get(entrant.club.as_str()) {
            Some(&idx) => {
                let cluster = &mut clusters[idx];
                cluster.min_rank = cluster.min_rank.min(rank);
                cluster.entrants.push(entrant.clone());
            }
            None => {
                index_by_club.insert(entrant.club.as_str(), clusters.len());
                clusters.push(ClubCluster {
                    club: entrant.club.clone(),
                    entrants: vec![entrant.clone()],
                    min_rank: rank,
                });
            }
        }
    }

    clusters.sort_by(|a, b| a.min_rank.cmp(&b.min_rank).then_with(|| a.club.cmp(&b.club)));
    clusters
}

// ==========================================
// GroupBalancer Trait
// ==========================================
// Implemented by: GreedyClubBalancer
pub trait GroupBalancer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Place the ordered clusters into exactly `max_groups` groups
    ///
    /// Groups may stay empty when there are fewer clusters than groups.
    fn balance(&self, clusters: &[ClubCluster], max_groups: usize) -> Vec<Group>;
}

// ==========================================
// GreedyClubBalancer
// ==========================================
// Each cluster goes to the group with the smallest count, lowest index on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyClubBalancer;

impl GreedyClubBalancer {
    pub fn new() -> Self {
        Self
    }
}

impl GroupBalancer for GreedyClubBalancer {
    fn name(&self) -> &'static str {
        "greedy-club"
    }

    fn balance(&self, clusters: &[ClubCluster], max_groups: usize) -> Vec<Group> {
        let group_count = max_groups.max(1);
        let mut groups: Vec<Group> = vec![Vec::new(); group_count];
        let mut counts = vec![0usize; group_count];

        for cluster in clusters {
            // min_by_key returns the first minimum, i.e. the lowest index
            let target = counts
                .iter()
                .enumerate()
                .min_by_key(|(_, count)| **count)
                .map(|(idx, _)| idx)
                .unwrap_or(0);

            groups[target].extend(cluster.entrants.iter().cloned());
            counts[target] += cluster.size();
        }

        groups
    }
}
