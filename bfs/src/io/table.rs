use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::debug;
use varpack::entities::N_DIMS;
use varpack::io::ext_repr::{ExtBin, ExtItem, ExtVPInstance};

pub const ITEMS_SUFFIX: &str = "-items.txt";
pub const BINS_SUFFIX: &str = "-bins.txt";
pub const CONSTRAINT_SUFFIX: &str = "-alloc-constraint.txt";

/// Reads an instance stored as three comma-separated integer tables next to each other:
/// `<prefix>-items.txt` (one row of item sizes per item), `<prefix>-bins.txt` (one row of capacities per bin)
/// and `<prefix>-alloc-constraint.txt` (one row per item, one 0/1 column per bin).
pub fn read_table_instance(prefix: &Path) -> Result<ExtVPInstance> {
    let items = read_table(&with_suffix(prefix, ITEMS_SUFFIX))?;
    let bins = read_table(&with_suffix(prefix, BINS_SUFFIX))?;
    let constraint = read_table(&with_suffix(prefix, CONSTRAINT_SUFFIX))?;

    let name = prefix
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_tables(name, &items, &bins, &constraint)
}

/// Builds an instance from already parsed tables
pub fn parse_tables(
    name: String,
    items: &[Vec<u64>],
    bins: &[Vec<u64>],
    constraint: &[Vec<u64>],
) -> Result<ExtVPInstance> {
    let items = items
        .iter()
        .enumerate()
        .map(|(id, row)| {
            Ok(ExtItem {
                id: id as u64,
                size: to_dims(row).with_context(|| format!("item {id}"))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let bins = bins
        .iter()
        .enumerate()
        .map(|(id, row)| {
            Ok(ExtBin {
                id: id as u64,
                capacity: to_dims(row).with_context(|| format!("bin {id}"))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let allocation = constraint
        .iter()
        .enumerate()
        .map(|(item_id, row)| {
            row.iter()
                .map(|&v| match v {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => bail!("allocation constraint of item {item_id} contains {v}, expected 0 or 1"),
                })
                .collect::<Result<Vec<bool>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "[IO] parsed tables of {}: {} items, {} bins, {}x{} constraint",
        name,
        items.len(),
        bins.len(),
        allocation.len(),
        allocation.first().map_or(0, |r| r.len())
    );

    Ok(ExtVPInstance {
        name,
        items,
        bins,
        allocation,
    })
}

/// Reads a comma-separated table of non-negative integers.
/// Blank lines and lines starting with `#` are skipped, all rows must have the same length.
pub fn read_table(path: &Path) -> Result<Vec<Vec<u64>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not read table: {}", path.display()))?;
    parse_table(&content).with_context(|| format!("could not parse table: {}", path.display()))
}

pub fn parse_table(content: &str) -> Result<Vec<Vec<u64>>> {
    let rows = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_nr, line)| {
            line.split(',')
                .map(|token| {
                    let token = token.trim();
                    token
                        .parse::<u64>()
                        .with_context(|| format!("line {line_nr}: invalid value '{token}'"))
                })
                .collect::<Result<Vec<u64>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(
        rows.iter().map(|r| r.len()).all_equal(),
        "rows have differing lengths: {:?}",
        rows.iter().map(|r| r.len()).dedup().collect_vec()
    );
    Ok(rows)
}

fn to_dims(row: &[u64]) -> Result<[u64; N_DIMS]> {
    <[u64; N_DIMS]>::try_from(row)
        .with_context(|| format!("expected {N_DIMS} values, found {}", row.len()))
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}
