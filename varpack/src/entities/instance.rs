use itertools::Itertools;
use log::warn;

use crate::VPError;
use crate::entities::{AllocationConstraint, Bin, CandidateDomain, Item, Size};

/// Instance of the allocation problem: items, capacity-limited bins and the bins each item is allowed in.
///
/// An overflow bin with id `n_bins()` is added on construction.
/// Its capacity is the sum of all item sizes, so it can hold every item at once.
#[derive(Debug, Clone)]
pub struct VPInstance {
    items: Vec<Item>,
    bins: Vec<Bin>,
    overflow_bin: Bin,
    constraint: AllocationConstraint,
    domains: Vec<CandidateDomain>,
}

impl VPInstance {
    pub fn new(
        items: Vec<Item>,
        bins: Vec<Bin>,
        constraint: AllocationConstraint,
    ) -> Result<Self, VPError> {
        if let Some((position, item)) = items.iter().enumerate().find(|(i, item)| item.id != *i) {
            return Err(VPError::NonConsecutiveIds {
                entity: "item",
                position,
                id: item.id,
            });
        }
        if let Some((position, bin)) = bins.iter().enumerate().find(|(i, bin)| bin.id != *i) {
            return Err(VPError::NonConsecutiveIds {
                entity: "bin",
                position,
                id: bin.id,
            });
        }

        let domains = CandidateDomain::build_all(items.len(), bins.len(), &constraint)?;

        if !items.iter().map(|item| item.size).all_equal() {
            warn!(
                "items do not share the same size, loads are computed with the size of item 0: {:?}",
                items[0].size
            );
        }

        let overflow_bin = Bin::overflow(bins.len(), items.iter().map(|i| i.size).sum());

        Ok(Self {
            items,
            bins,
            overflow_bin,
            constraint,
            domains,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    /// The size every item is assumed to have when computing loads
    pub fn item_size(&self) -> Size {
        self.items.first().map_or(Size::ZERO, |item| item.size)
    }

    /// The real bins, without the overflow bin
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Bin with the given id, including the overflow bin
    pub fn bin(&self, id: usize) -> &Bin {
        match id == self.overflow_bin.id {
            true => &self.overflow_bin,
            false => &self.bins[id],
        }
    }

    /// All bins, with the overflow bin last
    pub fn all_bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter().chain(std::iter::once(&self.overflow_bin))
    }

    pub fn overflow_bin(&self) -> &Bin {
        &self.overflow_bin
    }

    pub fn overflow_id(&self) -> usize {
        self.overflow_bin.id
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// Number of real bins
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn constraint(&self) -> &AllocationConstraint {
        &self.constraint
    }

    pub fn domains(&self) -> &[CandidateDomain] {
        &self.domains
    }

    pub fn domain(&self, item_id: usize) -> &CandidateDomain {
        &self.domains[item_id]
    }

    /// Total number of (not necessarily feasible) assignments, saturating at `u128::MAX`
    pub fn n_assignments(&self) -> u128 {
        self.domains
            .iter()
            .fold(1u128, |acc, d| acc.saturating_mul(d.len() as u128))
    }
}
