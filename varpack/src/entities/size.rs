use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Number of resource dimensions of item sizes and bin capacities
pub const N_DIMS: usize = 4;

/// A resource vector: the size of an item or the capacity of a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(pub [u64; N_DIMS]);

impl Size {
    pub const ZERO: Size = Size([0; N_DIMS]);

    pub fn new(dims: [u64; N_DIMS]) -> Self {
        Size(dims)
    }

    /// The load of `count` copies of this size. Saturates instead of overflowing.
    pub fn scaled(&self, count: usize) -> Size {
        let count = count as u64;
        Size(self.0.map(|d| d.saturating_mul(count)))
    }

    /// First dimension in which `self` exceeds `capacity`, if any.
    pub fn exceeding_dim(&self, capacity: &Size) -> Option<usize> {
        (0..N_DIMS).find(|&k| self.0[k] > capacity.0[k])
    }

    pub fn fits_in(&self, capacity: &Size) -> bool {
        self.exceeding_dim(capacity).is_none()
    }

    pub fn dims(&self) -> &[u64; N_DIMS] {
        &self.0
    }
}

impl From<[u64; N_DIMS]> for Size {
    fn from(dims: [u64; N_DIMS]) -> Self {
        Size(dims)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size(std::array::from_fn(|k| self.0[k].saturating_add(rhs.0[k])))
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Size>>(iter: I) -> Size {
        iter.fold(Size::ZERO, |acc, s| acc + s)
    }
}

impl<'a> Sum<&'a Size> for Size {
    fn sum<I: Iterator<Item = &'a Size>>(iter: I) -> Size {
        iter.copied().sum()
    }
}
