use std::ops::Deref;

use itertools::Itertools;

use crate::VPError;
use crate::entities::AllocationConstraint;

/// Bins an item may be assigned to: the allowed real bins in increasing order,
/// always followed by the overflow bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateDomain(Vec<usize>);

impl CandidateDomain {
    /// Derives the domain of a single item.
    pub fn new(item_id: usize, constraint: &AllocationConstraint) -> Self {
        let overflow_id = constraint.n_bins();
        let bin_ids = constraint
            .allowed_bins(item_id)
            .chain(std::iter::once(overflow_id))
            .collect_vec();
        CandidateDomain(bin_ids)
    }

    /// Derives the domains of all items.
    /// Fails if the constraint does not cover exactly `n_items` items and `n_bins` real bins.
    pub fn build_all(
        n_items: usize,
        n_bins: usize,
        constraint: &AllocationConstraint,
    ) -> Result<Vec<CandidateDomain>, VPError> {
        if constraint.n_items() != n_items {
            return Err(VPError::ShapeMismatch {
                table: "allocation constraint rows",
                expected: n_items,
                found: constraint.n_items(),
            });
        }
        if constraint.n_bins() != n_bins {
            return Err(VPError::ShapeMismatch {
                table: "allocation constraint columns",
                expected: n_bins,
                found: constraint.n_bins(),
            });
        }
        Ok((0..n_items)
            .map(|item_id| CandidateDomain::new(item_id, constraint))
            .collect())
    }

    /// The overflow bin id, which is always the last element
    pub fn overflow_id(&self) -> usize {
        *self.0.last().expect("candidate domain is never empty")
    }

    /// The allowed real bins, without the overflow bin
    pub fn real_bins(&self) -> &[usize] {
        &self.0[..self.0.len() - 1]
    }

    /// Whether the item can be placed in at least one real bin
    pub fn has_real_bins(&self) -> bool {
        self.0.len() > 1
    }

    pub fn bin_ids(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for CandidateDomain {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
