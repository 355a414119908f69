// ==========================================
// Integration tests - pool and group assignment
// ==========================================
// Properties: determinism, club integrity, completeness, balance bound
// ==========================================

mod helpers;

use helpers::entrant_builder::{club_entrants, mixed_field, EntrantBuilder};
use pool_planner::config::{CompetitionConfig, PoolDefinition};
use pool_planner::domain::{Entrant, GroupPlan};
use pool_planner::engine::{ClubCluster, GroupBalancer, GroupPlanner};
use pool_planner::Group;
use std::collections::{HashMap, HashSet};

fn planner() -> GroupPlanner {
    GroupPlanner::from_config(&CompetitionConfig::default())
}

fn group_of(plan: &GroupPlan) -> HashMap<(String, String), (String, usize)> {
    let mut index = HashMap::new();
    for pool in &plan.pools {
        for (g, group) in pool.groups.iter().enumerate() {
            for e in group {
                index.insert((e.full_name.clone(), e.club.clone()), (pool.pool_name.clone(), g));
            }
        }
    }
    index
}

#[test]
fn test_plan_is_deterministic() {
    let entrants = mixed_field();
    let first = planner().generate_plan(&entrants);
    let second = planner().generate_plan(&entrants);
    assert_eq!(first, second);
}

#[test]
fn test_club_never_split_within_pool() {
    let plan = planner().generate_plan(&mixed_field());

    for pool in &plan.pools {
        let mut club_group: HashMap<&str, usize> = HashMap::new();
        for (g, group) in pool.groups.iter().enumerate() {
            for e in group {
                let seen = *club_group.entry(e.club.as_str()).or_insert(g);
                assert_eq!(seen, g, "club {} split in {}", e.club, pool.pool_name);
            }
        }
    }
}

#[test]
fn test_every_entrant_placed_exactly_once() {
    let entrants = mixed_field();
    let plan = planner().generate_plan(&entrants);

    assert_eq!(plan.placed_count(), entrants.len());
    assert!(plan.unplaced.is_empty());

    let placed: HashSet<_> = group_of(&plan).into_keys().collect();
    assert_eq!(placed.len(), entrants.len());
}

#[test]
fn test_pool_membership_follows_category() {
    let plan = planner().generate_plan(&mixed_field());
    let config = CompetitionConfig::default();

    for pool in &plan.pools {
        let definition = config.pools.iter().find(|p| p.name == pool.pool_name).unwrap();
        for e in pool.groups.iter().flatten() {
            assert!(definition.accepts(&e.category));
        }
    }
}

#[test]
fn test_balance_bound_holds() {
    let plan = planner().generate_plan(&mixed_field());

    for pool in &plan.pools {
        // spread can exceed 1 only by the size of the largest club cluster
        let mut cluster_sizes: HashMap<&str, usize> = HashMap::new();
        for e in pool.groups.iter().flatten() {
            *cluster_sizes.entry(e.club.as_str()).or_default() += 1;
        }
        let largest = cluster_sizes.values().copied().max().unwrap_or(0);
        assert!(
            pool.size_spread() <= largest,
            "{}: spread {} > largest cluster {}",
            pool.pool_name,
            pool.size_spread(),
            largest
        );
    }
}

#[test]
fn test_singletons_spread_evenly() {
    let entrants: Vec<Entrant> = (0..9)
        .map(|i| {
            EntrantBuilder::new(&format!("Solo {}", i))
                .club(&format!("Club {}", i))
                .category("15-16")
                .build()
        })
        .collect();
    let plan = planner().generate_plan(&entrants);

    let pool = plan.pool("Pool 2").unwrap();
    let sizes: Vec<usize> = pool.groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 3]);
}

#[test]
fn test_oslo_pair_together_for_any_group_limit() {
    for max_groups in 1..=8 {
        let pools = vec![PoolDefinition::new("Pool 1", &["rekrutt", "13-14"], max_groups)];
        let planner = GroupPlanner::new(pools, 6);

        let mut entrants = club_entrants("Bergen TK", "13-14", 2);
        entrants.push(EntrantBuilder::new("Kari Nilsen").club("Oslo TF").build());
        entrants.extend(club_entrants("Asker TF", "rekrutt", 3));
        entrants.push(EntrantBuilder::new("Per Olsen").club("Oslo TF").build());

        let plan = planner.generate_plan(&entrants);
        let index = group_of(&plan);
        let kari = &index[&("Kari Nilsen".to_string(), "Oslo TF".to_string())];
        let per = &index[&("Per Olsen".to_string(), "Oslo TF".to_string())];
        assert_eq!(kari, per, "max_groups = {}", max_groups);
    }
}

#[test]
fn test_groups_ordered_for_display() {
    let pools = vec![PoolDefinition::new("Pool 1", &["rekrutt", "13-14"], 1)];
    let planner = GroupPlanner::new(pools, 6);
    let entrants = vec![
        EntrantBuilder::new("Zulu older").club("Zulu").category("13-14").build(),
        EntrantBuilder::new("Alpha older").club("Alpha").category("13-14").build(),
        EntrantBuilder::new("Zulu young").club("Zulu").category("rekrutt").build(),
    ];

    let plan = planner.generate_plan(&entrants);
    let names: Vec<&str> = plan.pools[0].groups[0]
        .iter()
        .map(|e| e.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Zulu young", "Alpha older", "Zulu older"]);
}

/// Puts every cluster into the last group
struct LastGroupBalancer;

impl GroupBalancer for LastGroupBalancer {
    fn name(&self) -> &'static str {
        "last-group"
    }

    fn balance(&self, clusters: &[ClubCluster], max_groups: usize) -> Vec<Group> {
        let mut groups: Vec<Group> = vec![Vec::new(); max_groups];
        for cluster in clusters {
            groups[max_groups - 1].extend(cluster.entrants.iter().cloned());
        }
        groups
    }
}

#[test]
fn test_custom_balancer_is_used() {
    let config = CompetitionConfig::default();
    let planner = GroupPlanner::with_balancer(
        config.pools.clone(),
        config.default_max_groups,
        Box::new(LastGroupBalancer),
    );

    let plan = planner.generate_plan(&club_entrants("Oslo TF", "senior", 2));
    let pool = plan.pool("Pool 3").unwrap();
    assert_eq!(pool.groups[2].len(), 2);
    assert!(pool.groups[0].is_empty());
}
