//! # Layer 5: Object Lifecycle
//!
//! Construction, assignment and destruction, each with trivial and
//! non-throwing variants.
//!
//! ```text
//! IsConstructible<T, (Args..)>   T t(args..)
//! IsAssignable<T, U>             declval<T>() = declval<U>()
//! IsDestructible<T>              t.~T()
//! ```
//!
//! "Trivial" and "non-throwing" are registry facts (`#[shape(non_trivial)]`,
//! `#[shape(throwing)]`); every non-class type is both trivial and
//! non-throwing.

pub mod assign;
pub mod construct;
pub mod destruct;

pub use assign::*;
pub use construct::*;
pub use destruct::*;
