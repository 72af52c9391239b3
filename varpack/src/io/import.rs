use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{AllocationConstraint, Bin, Item, Size, VPInstance};
use crate::io::ext_repr::ExtVPInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtVPInstance) -> Result<VPInstance> {
    let items = {
        let mut items = ext_instance
            .items
            .iter()
            .map(|ext_item| Item::new(ext_item.id as usize, Size::new(ext_item.size)))
            .collect_vec();

        items.sort_by_key(|item| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        items
    };

    let bins = {
        let mut bins = ext_instance
            .bins
            .iter()
            .map(|ext_bin| Bin::new(ext_bin.id as usize, Size::new(ext_bin.capacity)))
            .collect_vec();

        bins.sort_by_key(|bin| bin.id);
        ensure!(
            bins.iter().enumerate().all(|(i, bin)| bin.id == i),
            "All bins should have consecutive IDs starting from 0. IDs: {:?}",
            bins.iter().map(|bin| bin.id).collect_vec()
        );
        bins
    };

    //the allocation rows are indexed by item id, not by the position of the item in the input
    let constraint = AllocationConstraint::from_rows(&ext_instance.allocation, bins.len())
        .context("invalid allocation constraint")?;

    let instance = VPInstance::new(items, bins, constraint)
        .with_context(|| format!("invalid instance: {}", ext_instance.name))?;

    Ok(instance)
}
