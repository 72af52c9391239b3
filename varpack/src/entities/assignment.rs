use std::fmt::Display;
use std::ops::Deref;

use itertools::Itertools;

/// Full mapping of items to bins: position `i` holds the id of the bin item `i` is assigned to.
/// Items assigned to the overflow bin are not allocated.
///
/// Immutable once created, can be used as a key in sets and maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment(Box<[usize]>);

impl Assignment {
    pub fn new(bin_ids: impl Into<Box<[usize]>>) -> Self {
        Assignment(bin_ids.into())
    }

    pub fn bin_of(&self, item_id: usize) -> usize {
        self.0[item_id]
    }

    pub fn bin_ids(&self) -> &[usize] {
        &self.0
    }

    /// Number of items assigned to each bin id in `0..n_slots`.
    /// `n_slots` should include the overflow bin (number of real bins + 1).
    pub fn bin_counts(&self, n_slots: usize) -> Vec<usize> {
        let mut counts = vec![0; n_slots];
        for &bin_id in self.0.iter() {
            counts[bin_id] += 1;
        }
        counts
    }

    /// Number of items not assigned to the overflow bin
    pub fn n_allocated(&self, overflow_id: usize) -> usize {
        self.0.iter().filter(|&&b| b != overflow_id).count()
    }

    /// Product of the item counts of the real bins holding at least one item.
    /// Empty bins are left out of the product entirely.
    /// `None` if no real bin holds an item.
    pub fn occupancy_product(&self, overflow_id: usize) -> Option<u64> {
        let counts = self.bin_counts(overflow_id + 1);
        counts[..overflow_id]
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as u64)
            .reduce(|acc, c| acc.saturating_mul(c))
    }
}

impl Deref for Assignment {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
