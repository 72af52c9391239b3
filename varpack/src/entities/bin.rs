use crate::entities::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin {
    /// Unique identifier for the bin, the overflow bin is numbered one past the last real bin
    pub id: usize,
    /// Maximum load per dimension
    pub capacity: Size,
    overflow: bool,
}

impl Bin {
    /// Creates a real bin with the given id and capacity.
    pub fn new(id: usize, capacity: Size) -> Self {
        Self {
            id,
            capacity,
            overflow: false,
        }
    }

    /// Creates the synthetic bin which absorbs all items that are not allocated.
    /// Its capacity should be large enough to hold every item at once.
    pub fn overflow(id: usize, capacity: Size) -> Self {
        Self {
            id,
            capacity,
            overflow: true,
        }
    }

    pub fn is_overflow(&self) -> bool {
        self.overflow
    }
}
