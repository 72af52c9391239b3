use std::ops::Add;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thousands::Separable;
use varpack::VPError;
use varpack::entities::{Objective, Solution, VPInstance};
use varpack::feasibility;

use crate::config::BFSConfig;
use crate::opt::enumerator::AssignmentEnumerator;
use crate::opt::selector::Incumbent;

/// Brute-force optimizer: enumerates every assignment, keeps the feasible ones and selects the best.
///
/// The enumeration is partitioned by the bin of the first item, partitions are searched in parallel
/// and their incumbents merged in enumeration order, so the result does not depend on the number of threads.
pub struct BFSOptimizer {
    pub instance: VPInstance,
    pub config: BFSConfig,
    pub stats: BFSStats,
    pool: ThreadPool,
}

impl BFSOptimizer {
    pub fn new(instance: VPInstance, config: BFSConfig) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("bfs-{i}"));
        if let Some(n_threads) = config.n_threads {
            builder = builder.num_threads(n_threads);
        }
        let pool = builder.build().context("could not build thread pool")?;
        Ok(Self {
            instance,
            config,
            stats: BFSStats::default(),
            pool,
        })
    }

    pub fn solve(&mut self) -> Result<Solution, VPError> {
        let start = Instant::now();
        let instance = &self.instance;

        let n_assignments = instance.n_assignments();
        if let Some(limit) = self.config.max_assignments {
            if n_assignments > limit {
                return Err(VPError::EnumerationLimit {
                    size: n_assignments,
                    limit,
                });
            }
        }

        let partitions = AssignmentEnumerator::partitions(instance.domains());
        info!(
            "[BFS] enumerating {} assignments of {} items over {} bins in {} partitions ({} threads)",
            n_assignments.separate_with_commas(),
            instance.n_items(),
            instance.n_bins(),
            partitions.len(),
            self.pool.current_num_threads()
        );

        let best_n_allocated = AtomicUsize::new(0);
        let prune = self.config.prune;

        let (incumbent, stats) = self
            .pool
            .install(|| {
                partitions
                    .into_par_iter()
                    .map(|partition| search_partition(instance, partition, &best_n_allocated, prune))
                    .reduce_with(|(inc_a, stats_a), (inc_b, stats_b)| {
                        (inc_a.merge(inc_b), stats_a + stats_b)
                    })
            })
            .expect("there is always at least one partition");

        self.stats = stats;

        info!(
            "[BFS] {} of {} assignments feasible, {} partitions pruned",
            stats.n_feasible.separate_with_commas(),
            stats.n_enumerated.separate_with_commas(),
            stats.n_pruned_partitions
        );

        let (assignment, objective) = incumbent.into_best()?;
        let solution = Solution::new(instance, assignment);
        debug_assert_eq!(solution.objective, objective);

        info!(
            "[BFS] optimization finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[BFS] solution {} allocates {}/{} items, {}, utilization {:.3}",
            solution.assignment,
            solution.n_allocated(),
            instance.n_items(),
            solution.objective,
            solution.utilization
        );

        Ok(solution)
    }
}

/// Enumerates a single partition, filters it on capacity and tracks its best assignment.
fn search_partition(
    instance: &VPInstance,
    partition: AssignmentEnumerator,
    best_n_allocated: &AtomicUsize,
    prune: bool,
) -> (Incumbent, BFSStats) {
    let mut incumbent = Incumbent::new();
    let mut stats = BFSStats::default();

    //a partition can only contain the winner if it reaches the best number of allocated items seen so far
    let bound = partition.max_allocated();
    if prune && bound < best_n_allocated.load(Ordering::Relaxed) {
        debug!(
            "[BFS] pruning partition {:?}, at most {bound} items allocated",
            partition.fixed_bins().collect::<Vec<_>>()
        );
        stats.n_pruned_partitions += 1;
        return (incumbent, stats);
    }

    let overflow_id = instance.overflow_id();
    for assignment in partition {
        stats.n_enumerated += 1;
        if !feasibility::is_feasible(instance, &assignment) {
            continue;
        }
        stats.n_feasible += 1;
        let objective = Objective::of(&assignment, overflow_id);
        if incumbent.offer(objective, assignment) {
            best_n_allocated.fetch_max(objective.n_allocated, Ordering::Relaxed);
        }
    }

    (incumbent, stats)
}

/// Counters of a (partial) search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BFSStats {
    pub n_enumerated: u64,
    pub n_feasible: u64,
    pub n_pruned_partitions: usize,
}

impl Add for BFSStats {
    type Output = BFSStats;

    fn add(self, rhs: BFSStats) -> BFSStats {
        BFSStats {
            n_enumerated: self.n_enumerated + rhs.n_enumerated,
            n_feasible: self.n_feasible + rhs.n_feasible,
            n_pruned_partitions: self.n_pruned_partitions + rhs.n_pruned_partitions,
        }
    }
}
