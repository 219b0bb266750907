//! # Layer 3: Relations
//!
//! Predicates over pairs of types.
//!
//! - `same.rs`: `IsSame`, `IsAnyOf`.
//! - `base_of.rs`: `IsBaseOf` and the public-inheritance walk.
//! - `convertible.rs`: `IsConvertible` and the initialization rules behind it.

pub mod base_of;
pub mod convertible;
pub mod same;

pub use base_of::{is_base_of, DerivesPublicly, IsBaseOf};
pub use convertible::{is_convertible, IsConvertible};
pub use same::{is_any_of, is_same, IsAnyOf, IsSame};
