//! Procedural macros for the tola-traits type model
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(TypeShape)]` | struct / union / enum | Register a class, union or enumeration |
//! | `type_check!` | - | Evaluate a boolean expression of predicates |
//! | `peano!` | - | Generate natural-number aliases |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(TypeShape)]
//! #[shape(bases(Shape, private Counted), from(f64), into(f64))]
//! struct Circle;
//!
//! const OK: bool = type_check!(Circle: IsClass & !IsUnion & IsConvertible<_, f64>);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(64);  // Generates D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Register a struct, union or enum as a modeled type.
///
/// Structs become classes, unions become unions and enums become
/// enumerations (scoped unless `#[shape(unscoped)]`, with the underlying type
/// taken from `#[repr(..)]`, `i32` by default).
///
/// # Options
///
/// ```ignore
/// #[shape(
///     bases(A, private B, protected C),  // direct bases, public by default
///     from(i32), from(i32, f64),         // implicit constructors, one list each
///     explicit(u8),                      // explicit constructors
///     from_any,                          // template<class U> T(U&&)
///     into(f64, Other),                  // conversion operators
///     assign(i32),                       // extra assignment operators
///     delete(default, copy, move, copy_assign, move_assign, destructor),
///     non_trivial,                       // special members are not trivial
///     throwing,                          // special members may throw
/// )]
/// ```
///
/// Generic items are rejected.
#[proc_macro_derive(TypeShape, attributes(shape))]
pub fn derive_type_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_shape(input).into()
}

/// Evaluate a boolean expression of predicates over one type.
///
/// `&`, `|`, `!` and parentheses combine predicates. A bare predicate name is
/// applied to the checked type; inside explicit arguments `_` stands for it.
/// `&` and `|` short-circuit like `Conjunction` and `Disjunction`.
///
/// # Usage
/// ```ignore
/// assert!(type_check!(i32: IsIntegral & !IsConst));
/// assert!(type_check!(i32: IsConvertible<_, f64> | IsPointer));
/// const C: bool = type_check!(Ptr<u8>: IsScalar);
/// ```
#[proc_macro]
pub fn type_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::GenericConstraint);
    user::expand_type_check(input).into()
}
