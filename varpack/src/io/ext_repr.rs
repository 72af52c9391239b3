use serde::{Deserialize, Serialize};

use crate::entities::N_DIMS;

/// Allocation problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtVPInstance {
    /// The name of the instance
    pub name: String,
    /// Set of items to be allocated
    pub items: Vec<ExtItem>,
    /// Set of real bins (the overflow bin is implicit)
    pub bins: Vec<ExtBin>,
    /// One row per item, one column per bin: `true` if the item may be allocated to the bin
    pub allocation: Vec<Vec<bool>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Resources consumed by the item
    pub size: [u64; N_DIMS],
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBin {
    /// Unique identifier of the bin
    pub id: u64,
    /// Maximum load per dimension
    pub capacity: [u64; N_DIMS],
}

/// An item allocated to a real bin
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtAllocation {
    pub item_id: u64,
    pub bin_id: u64,
}

/// Allocation problem solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtVPSolution {
    /// Bin id per item, unallocated items are assigned to the overflow bin
    pub assignment: Vec<u64>,
    /// Id of the overflow bin
    pub overflow_bin_id: u64,
    /// Items allocated to a real bin
    pub allocations: Vec<ExtAllocation>,
    /// Number of allocated items
    pub n_allocated: usize,
    /// Product of the item counts of the occupied bins, absent if no bin is occupied
    pub occupancy_product: Option<u64>,
    /// Utilization estimate derived from the occupancy product
    pub utilization: f64,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}
