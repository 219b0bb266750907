//! Candidate selection utilities.
//!
//! Rust resolves impls without backtracking, so "discard this candidate if
//! the expression is ill-formed" becomes a trait bound: a `where` clause that
//! cannot be satisfied removes the function or impl from consideration at the
//! call site, and nothing else fails.
//!
//! ```text
//! VoidT<(T::RemovePointer, U)>     Void when every element is a modeled type
//! EnableIf<B, T>                   T when B is True, no type at all otherwise
//! Conditional<B, Then, Else>       const-bool selection
//! has_impl!(T)                     is a concrete type a modeled type
//! has_impl!(T, Trait + ..)         does a concrete type meet the bounds
//! ```

use crate::model::{Type, Void};
use crate::primitives::{Bool, IntoList, True, TypeList};

/// Collapse a tuple of modeled types to `Void`.
pub trait Collapse {
    type Out: Type;
}

impl<L: IntoList> Collapse for L
where
    L::List: TypeList,
{
    type Out = Void;
}

/// `Void` when every type of the tuple is a modeled type.
///
/// ```rust
/// use tola_traits::{Ptr, Void, VoidT};
/// use tola_traits::probe::Collapse;
///
/// fn probe<L: Collapse>() -> bool { true }
/// assert!(probe::<(i32, Ptr<Void>)>());
/// let _: VoidT<(u8,)> = Void;
/// ```
pub type VoidT<L> = <L as Collapse>::Out;

/// Implemented for `True` only, so `where B: Enable` removes a candidate
/// whenever `B` is `False`.
pub trait Enable<T = ()>: Bool {
    type Out;
}

impl<T> Enable<T> for True {
    type Out = T;
}

/// `T` when `B` is `True`; naming it with `False` is a compile error.
pub type EnableIf<B, T = ()> = <B as Enable<T>>::Out;

/// `Then` if `B`, otherwise `Else`.
pub type Conditional<const B: bool, Then, Else> = crate::primitives::If<B, Then, Else>;

/// `T` itself.
pub type TypeIdentity<T> = T;

// =============================================================================
// has_impl! - capability probe (concrete types only)
// =============================================================================

/// Does a concrete type meet a set of bounds? With the type alone, the
/// bound is [`Type`]: is it part of the model at all.
///
/// An inherent const on the candidate shadows the fallback trait const
/// exactly when the bounds hold, so the answer is a `const bool` and an
/// unmet bound is a `false`, never an error.
///
/// ```
/// use tola_traits::has_impl;
/// use tola_traits::prelude::*;
///
/// trait Shape {}
/// impl Shape for u8 {}
///
/// assert!(has_impl!(u8, Shape));
/// assert!(!has_impl!(i8, Shape));
/// assert!(has_impl!(Ptr<Const<i32>>));
/// assert!(!has_impl!(&'static str));
/// assert!(has_impl!(i32, Type + Copy));
/// ```
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! has_impl {
    ($T:ty) => {
        $crate::has_impl!($T, $crate::model::Type)
    };
    ($T:ty, $($bounds:tt)+) => {{
        struct __Candidate<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Unmet {
            const DETECTED: bool = false;
        }
        impl<T: ?Sized> __Unmet for __Candidate<T> {}

        impl<T: ?Sized + $($bounds)+> __Candidate<T> {
            #[allow(dead_code)]
            const DETECTED: bool = true;
        }

        __Candidate::<$T>::DETECTED
    }};
}
