use std::time::Instant;

use crate::entities::{Assignment, Objective, VPInstance};
use crate::util::assertions::solution_matches_instance;
use crate::util::utilization;

/// The best assignment found for a [`VPInstance`], together with its objective values.
#[derive(Debug, Clone)]
pub struct Solution {
    pub assignment: Assignment,
    pub objective: Objective,
    /// Utilization estimate derived from the occupancy product, see [`utilization`]
    pub utilization: f64,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(instance: &VPInstance, assignment: Assignment) -> Self {
        let objective = Objective::of(&assignment, instance.overflow_id());
        let solution = Solution {
            assignment,
            objective,
            utilization: utilization(objective.occupancy_product),
            time_stamp: Instant::now(),
        };
        debug_assert!(solution_matches_instance(instance, &solution));
        solution
    }

    pub fn n_allocated(&self) -> usize {
        self.objective.n_allocated
    }

    pub fn occupancy_product(&self) -> Option<u64> {
        self.objective.occupancy_product
    }

    /// (item id, bin id) pairs of the items allocated to a real bin
    pub fn allocations(&self, instance: &VPInstance) -> impl Iterator<Item = (usize, usize)> {
        let overflow_id = instance.overflow_id();
        self.assignment
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(_, bin_id)| bin_id != overflow_id)
    }
}
