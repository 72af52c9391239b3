/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod utilization;

#[doc(inline)]
pub use utilization::UTILIZATION_DECAY;
#[doc(inline)]
pub use utilization::utilization;
