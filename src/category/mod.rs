//! # Layer 4: Categories and Properties
//!
//! - `primary.rs`: The fourteen mutually exclusive categories.
//! - `composite.rs`: Unions of primary categories.
//! - `property.rs`: cv, referenceability, array shape, enum scoping, rank,
//!   extent and alignment.

pub mod composite;
pub mod primary;
pub mod property;

pub use composite::*;
pub use primary::*;
pub use property::*;
