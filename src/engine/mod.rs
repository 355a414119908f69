// ==========================================
// Pool Planner - Engine layer
// ==========================================
// Responsibility: pool partition and club-preserving group balancing
// Boundary: pure functions of the entrant list, no I/O
// ==========================================

pub mod group_balancer;
pub mod group_planner;
pub mod pool_partitioner;

pub use group_balancer::{
    cluster_by_club, ClubCluster, GreedyClubBalancer, GroupBalancer, UNKNOWN_CATEGORY_RANK,
};
pub use group_planner::GroupPlanner;
pub use pool_partitioner::{PoolPartition, PoolPartitioner};
