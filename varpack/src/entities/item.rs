use crate::entities::Size;

/// Item to be allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Index of the item in the instance
    pub id: usize,
    /// Resources consumed by the item in the bin it is allocated to
    pub size: Size,
}

impl Item {
    pub fn new(id: usize, size: Size) -> Self {
        Self { id, size }
    }
}
