use std::fmt::Display;

use crate::entities::{Assignment, VPInstance};

/// First capacity violation found in an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityViolation {
    pub bin_id: usize,
    pub dim: usize,
    /// Number of items assigned to the bin
    pub count: usize,
    pub load: u64,
    pub capacity: u64,
}

impl Display for CapacityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bin {} overloaded in dimension {}: {} items, load {} > capacity {}",
            self.bin_id, self.dim, self.count, self.load, self.capacity
        )
    }
}

/// Checks the load of every bin, the overflow bin included, against its capacity in every dimension.
///
/// Items are assumed homogeneous: the load of a bin is its item count times the shared item size.
/// Bins are checked in increasing id order and the first violation is returned.
pub fn check(instance: &VPInstance, assignment: &Assignment) -> Result<(), CapacityViolation> {
    debug_assert_eq!(assignment.len(), instance.n_items());
    let item_size = instance.item_size();
    let counts = assignment.bin_counts(instance.n_bins() + 1);

    for (bin, &count) in instance.all_bins().zip(counts.iter()) {
        let load = item_size.scaled(count);
        if let Some(dim) = load.exceeding_dim(&bin.capacity) {
            return Err(CapacityViolation {
                bin_id: bin.id,
                dim,
                count,
                load: load.0[dim],
                capacity: bin.capacity.0[dim],
            });
        }
    }
    Ok(())
}

pub fn is_feasible(instance: &VPInstance, assignment: &Assignment) -> bool {
    check(instance, assignment).is_ok()
}
