//! Domain model for a constrained variant of multi-dimensional bin packing:
//! homogeneous items, capacity-limited bins and a per-item list of allowed bins.

/// Entities to model the allocation problem
pub mod entities;

/// Capacity checks of assignments against bins
pub mod feasibility;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::VPError;
