mod export;
mod import;

/// External (serializable) representations of the allocation problem and its solutions.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use import::import;
