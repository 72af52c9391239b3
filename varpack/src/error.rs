use std::fmt::Display;

/// Errors raised while setting up or solving an allocation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VPError {
    /// An input table does not have the dimensions implied by the other tables.
    ShapeMismatch {
        /// Which table and axis is inconsistent (e.g. "allocation constraint rows")
        table: &'static str,
        expected: usize,
        found: usize,
    },
    /// Items or bins are not numbered `0..n` in order.
    NonConsecutiveIds {
        /// "item" or "bin"
        entity: &'static str,
        position: usize,
        id: usize,
    },
    /// No assignment satisfies the capacity of every bin.
    Infeasible,
    /// The number of assignments to enumerate exceeds the configured limit.
    EnumerationLimit { size: u128, limit: u128 },
}

impl Display for VPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch {
                table,
                expected,
                found,
            } => write!(
                f,
                "Shape mismatch in {table}: expected {expected}, found {found}"
            ),
            Self::NonConsecutiveIds {
                entity,
                position,
                id,
            } => write!(
                f,
                "The {entity} at position {position} has id {id}, ids should be consecutive starting from 0"
            ),
            Self::Infeasible => write!(f, "No assignment satisfies the capacity constraints"),
            Self::EnumerationLimit { size, limit } => write!(
                f,
                "Enumeration of {size} assignments exceeds the limit of {limit}"
            ),
        }
    }
}

impl std::error::Error for VPError {}
