mod assignment;
mod bin;
mod constraint;
mod domain;
mod instance;
mod item;
mod objective;
mod size;
mod solution;

#[doc(inline)]
pub use assignment::Assignment;
#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use constraint::AllocationConstraint;
#[doc(inline)]
pub use domain::CandidateDomain;
#[doc(inline)]
pub use instance::VPInstance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use objective::Objective;
#[doc(inline)]
pub use size::N_DIMS;
#[doc(inline)]
pub use size::Size;
#[doc(inline)]
pub use solution::Solution;
