use std::fmt::Display;

use crate::entities::Assignment;

/// Two-level objective of an assignment, both levels maximized.
///
/// The derived ordering is lexicographic: `n_allocated` first, `occupancy_product` second.
/// An absent product (no real bin occupied) ranks below every present product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Objective {
    /// Number of items allocated to a real bin
    pub n_allocated: usize,
    /// Product of the item counts over the occupied real bins
    pub occupancy_product: Option<u64>,
}

impl Objective {
    pub fn of(assignment: &Assignment, overflow_id: usize) -> Self {
        Objective {
            n_allocated: assignment.n_allocated(overflow_id),
            occupancy_product: assignment.occupancy_product(overflow_id),
        }
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupancy_product {
            Some(p) => write!(f, "[{} allocated, product {}]", self.n_allocated, p),
            None => write!(f, "[{} allocated, no product]", self.n_allocated),
        }
    }
}
