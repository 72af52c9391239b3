use std::time::Instant;

use crate::entities::{Solution, VPInstance};
use crate::io::ext_repr::{ExtAllocation, ExtVPSolution};

/// Exports a solution out of the library
pub fn export(instance: &VPInstance, solution: &Solution, epoch: Instant) -> ExtVPSolution {
    ExtVPSolution {
        assignment: solution.assignment.iter().map(|&b| b as u64).collect(),
        overflow_bin_id: instance.overflow_id() as u64,
        allocations: solution
            .allocations(instance)
            .map(|(item_id, bin_id)| ExtAllocation {
                item_id: item_id as u64,
                bin_id: bin_id as u64,
            })
            .collect(),
        n_allocated: solution.n_allocated(),
        occupancy_product: solution.occupancy_product(),
        utilization: solution.utilization,
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
