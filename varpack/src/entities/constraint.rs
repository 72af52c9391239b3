use fixedbitset::FixedBitSet;

use crate::VPError;

/// Relation between items and the real bins they are allowed to be allocated to.
///
/// Stored row-major in a bitset, one row of `n_bins` bits per item.
/// The overflow bin is not part of the relation: every item may always end up there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationConstraint {
    n_items: usize,
    n_bins: usize,
    allowed: FixedBitSet,
}

impl AllocationConstraint {
    /// Creates a relation in which no item is allowed in any bin.
    pub fn empty(n_items: usize, n_bins: usize) -> Self {
        Self {
            n_items,
            n_bins,
            allowed: FixedBitSet::with_capacity(n_items * n_bins),
        }
    }

    /// Creates a relation in which every item is allowed in every bin.
    pub fn full(n_items: usize, n_bins: usize) -> Self {
        let mut constraint = Self::empty(n_items, n_bins);
        constraint.allowed.insert_range(..);
        constraint
    }

    /// Builds the relation from a dense matrix: one row per item, one column per real bin.
    /// Every row must contain exactly `n_bins` entries.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R], n_bins: usize) -> Result<Self, VPError> {
        let mut constraint = Self::empty(rows.len(), n_bins);
        for (item_id, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_bins {
                return Err(VPError::ShapeMismatch {
                    table: "allocation constraint columns",
                    expected: n_bins,
                    found: row.len(),
                });
            }
            for (bin_id, &allowed) in row.iter().enumerate() {
                constraint.set(item_id, bin_id, allowed);
            }
        }
        Ok(constraint)
    }

    /// Builds the relation from the list of allowed (item, bin) pairs.
    pub fn from_pairs(
        n_items: usize,
        n_bins: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut constraint = Self::empty(n_items, n_bins);
        for (item_id, bin_id) in pairs {
            constraint.set(item_id, bin_id, true);
        }
        constraint
    }

    pub fn set(&mut self, item_id: usize, bin_id: usize, allowed: bool) {
        let idx = self.index(item_id, bin_id);
        self.allowed.set(idx, allowed);
    }

    pub fn allows(&self, item_id: usize, bin_id: usize) -> bool {
        self.allowed.contains(self.index(item_id, bin_id))
    }

    /// Real bins the item is allowed in, in increasing order.
    pub fn allowed_bins(&self, item_id: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(item_id < self.n_items, "item {item_id} out of range");
        (0..self.n_bins).filter(move |&bin_id| self.allows(item_id, bin_id))
    }

    /// Number of allowed (item, bin) pairs
    pub fn n_allowed(&self) -> usize {
        self.allowed.count_ones(..)
    }

    pub fn n_items(&self) -> usize {
        self.n_items
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    fn index(&self, item_id: usize, bin_id: usize) -> usize {
        assert!(
            item_id < self.n_items && bin_id < self.n_bins,
            "({item_id}, {bin_id}) out of range for a {}x{} constraint",
            self.n_items,
            self.n_bins
        );
        item_id * self.n_bins + bin_id
    }
}
