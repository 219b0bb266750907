//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeShape)]` | on struct / union / enum | Register a modeled type |
//! | `type_check!` | function macro | Boolean expression of predicates |

mod type_check;
mod type_shape;

pub use type_check::expand_type_check;
pub use type_shape::expand_derive_type_shape;
