#![cfg_attr(not(test), no_std)]
#![recursion_limit = "256"]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - detect: default, enables the `has_impl!` capability probe

//! # tola-traits
//!
//! Compile-time type introspection over a type-level model of C-family types.
//!
//! **`<type_traits>` for a modeled type system, resolved entirely by rustc.**
//!
//! ## Architecture
//!
//! Rust has no cv-qualifiers, no reference collapsing and no unions-vs-classes
//! distinction visible to generics, so the crate models them. Every modeled
//! type implements the schema trait [`Type`]; every trait answers with a
//! type-level boolean ([`True`]/[`False`]) or a modeled type.
//!
//! ### 1. Shapes
//! One `Type` impl per shape answers every structural question:
//!
//! ```text
//! Const<Ptr<Array<i32, D4>>>   const pointer to array of 4 int
//!   |     |     |
//!   |     |     +-- element type and length (a type-level natural)
//!   |     +-------- pointee
//!   +-------------- top-level cv (leaves, pointers, member pointers only)
//! ```
//!
//! ### 2. Identity
//! Each shape spells itself as a nibble stream; two types are the same iff
//! their streams match. User types hash `module::Name@file:line:col`:
//!
//! ```text
//! Ptr<i32>    -> X7 X2 X4
//! Widget      -> X3 h0 h1 .. hF      (FNV-1a nibbles)
//! ```
//!
//! ### 3. Dispatch
//! Rules with several cases pick one with type-level booleans
//! (`<B as Bool>::Pick<Then, Else>`); there is no specialization.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Constant wrappers, Nibbles, Identity, Nat, Lists, Maybe  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Type Model                                              |
//! |  - Type schema, leaves, cv, compound, functions, members registry |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2-5: Traits                                                |
//! |  - relations, transformations, categories, logic, lifecycle       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  User API                                                         |
//! |  - #[derive(TypeShape)], type_check!, has_impl!, const fns        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_traits::prelude::*;
//!
//! #[derive(TypeShape)]
//! struct Base;
//!
//! #[derive(TypeShape)]
//! #[shape(bases(Base), into(f64))]
//! struct Derived;
//!
//! assert!(is_base_of::<Base, Derived>());
//! assert!(is_convertible::<Ptr<Derived>, Ptr<Base>>());
//! assert!(is_same::<Decay<Array<i32, D4>>, Ptr<i32>>());
//! assert!(is_same::<CommonType<(i32, f64)>, f64>());
//! assert!(type_check!(Derived: IsClass & IsConvertible<_, f64>));
//! ```

// Allow `::tola_traits` to work inside the crate itself
extern crate self as tola_traits;

// Re-export paste for predicate declarations
#[doc(hidden)]
pub use paste;

// Declaration macros (predicate!) come first so later modules can use them
mod syntax_macros;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Type Model
// =============================================================================
pub mod model;

// =============================================================================
// Layer 2: Probes and Relations
// =============================================================================
pub mod probe;
pub mod relation;

// =============================================================================
// Layer 3: Transformations and Categories
// =============================================================================
pub mod category;
pub mod transform;

// =============================================================================
// Layer 4: Boolean Algebra
// =============================================================================
pub mod logic;

// =============================================================================
// Layer 5: Object Lifecycle
// =============================================================================
pub mod lifecycle;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::constant::*;
pub use primitives::nat::*;
pub use primitives::nibble::{
    Nibble,
    X0, X1, X2, X3, X4, X5, X6, X7,
    X8, X9, XA, XB, XC, XD, XE, XF,
};
pub use primitives::{
    And, AndThen, Bool, Elif, False, Holds, If, Iff, Not, Or, Predicate, SelectBool, True,
};
pub use primitives::{Cons, Identity, IdentityEq, Nil};
pub use primitives::{HCons, HNil, IntoList, ListOf, TypeList, TypeTest};
pub use primitives::{Just, Maybe, MaybeFn, Nothing, Resolve};

pub use model::{
    Array, Const, ConstVolatile, FnConst, FnConstLRef, FnConstRRef, FnConstVolatile, FnLRef,
    FnQualifier, FnRRef, FnVolatile, Func, LRef, MemPtr, NullPtr, PointerForm, Ptr, QualFn, RRef,
    ReferenceForm, Type, Unbounded, Unqualified, UsualArithmetic, Void, Volatile, MAX_RANK,
};

pub use category::{composite::*, primary::*, property::*};
pub use lifecycle::{assign::*, construct::*, destruct::*};
pub use logic::{conjunction, disjunction, negation, Conjunction, Decided, Deciding, Disjunction, Negation};
pub use probe::{Collapse, Conditional, Enable, EnableIf, TypeIdentity, VoidT};
pub use relation::{base_of::*, convertible::*, same::*};
pub use transform::{cv::*, decay::*, extent::*, pointer::*, reference::*};
pub use transform::{has_common_type, CommonType, CommonTypeOf, HasCommonType};

// Re-export proc-macros
pub use macros::{type_check, TypeShape};

// =============================================================================
// Declarative Macro Bridge for #[derive(TypeShape)]
// =============================================================================
//
// Two-layer macro architecture to get module_path!() into the identity:
// 1. #[derive(TypeShape)] (proc-macro) generates an __impl_type_shape! call
// 2. __impl_type_shape! (this decl-macro) expands concat!(module_path!(), ...)
//    and hashes it with const fns into sixteen identity nibbles

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(TypeShape)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_type_shape {
    ($ty:ident, $name:expr, { $($body:tt)* }) => {
        $crate::__impl_leaf_type!($ty {
            identity: $crate::__user_identity!(concat!(
                module_path!(), "::", $name, "@", file!(), ":", line!(), ":", column!()
            )),
            $($body)*
        });
    };
}

/// Identity of a user type: `X3` followed by the sixteen hash nibbles of
/// its location string.
#[macro_export]
#[doc(hidden)]
macro_rules! __user_identity {
    (@nibbles $s:expr;) => { $crate::Nil };
    (@nibbles $s:expr; $n:tt $($rest:tt)*) => {
        $crate::Cons<
            <$crate::primitives::nibble::Map<{ $crate::primitives::const_utils::hash_nibble($s, $n) }>
                as $crate::primitives::nibble::ToNibble>::Out,
            $crate::__user_identity!(@nibbles $s; $($rest)*)
        >
    };
    ($s:expr) => {
        $crate::Cons<
            $crate::X3,
            $crate::__user_identity!(@nibbles $s; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15)
        >
    };
}

/// Common items for type introspection.
pub mod prelude {
    pub use crate::model::{
        Array, Const, ConstVolatile, FnConst, FnConstLRef, FnConstRRef, FnConstVolatile, FnLRef,
        FnRRef, FnVolatile, Func, LRef, MemPtr, NullPtr, Ptr, QualFn, RRef, Type, Unbounded, Void,
        Volatile,
    };
    pub use crate::primitives::nat::*;
    pub use crate::primitives::{Bool, False, Predicate, True};
    pub use crate::{
        category::{composite::*, primary::*, property::*},
        lifecycle::{assign::*, construct::*, destruct::*},
        logic::{conjunction, disjunction, negation, Conjunction, Disjunction, Negation},
        relation::{base_of::*, convertible::*, same::*},
        transform::{cv::*, decay::*, extent::*, pointer::*, reference::*},
        transform::{has_common_type, CommonType, HasCommonType},
    };
    pub use macros::{type_check, TypeShape};
    // Note: has_impl! and list! are #[macro_export] so they're at crate root
}
