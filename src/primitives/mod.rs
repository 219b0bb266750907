//! # Layer 0: Primitives
//!
//! Basic building blocks for the type model:
//! - `bool.rs`: Type-level boolean logic (True/False) and the `Predicate` interface.
//! - `constant.rs`: Compile-time constant wrappers.
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `identity.rs`: Nibble streams spelling a type's structure.
//! - `nat.rs`: Peano naturals for array lengths.
//! - `list.rs`: Type-level lists and tuple conversion.
//! - `maybe.rs`: Optional results.

pub mod bool;
pub mod constant;
pub mod nibble;
pub mod identity;
pub mod nat;
pub mod list;
pub mod maybe;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{And, AndThen, Bool, Elif, False, Holds, If, Iff, Not, Or, Predicate, SelectBool, True};
pub use constant::*;
pub use identity::{Cons, Identity, IdentityEq, Nil};
pub use list::{HCons, HNil, IntoList, ListOf, TypeList, TypeTest};
pub use maybe::{Just, Maybe, MaybeFn, Nothing, Resolve};
pub use nat::*;
pub use nibble::{Nibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
