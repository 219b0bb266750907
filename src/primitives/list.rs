//! Type-level lists.
//!
//! Tuples are the surface syntax for lists of types (`IsAnyOf<T, (A, B)>`,
//! `IsConstructible<T, (A, B)>`); internally they are converted to
//! `HCons<A, HCons<B, HNil>>` so that every rule works for any length.

use core::marker::PhantomData;

use super::bool::{Bool, False, Or, True};
use super::identity::IdentityEq;
use crate::model::{Type, Void};

/// Empty list.
#[derive(Debug)]
pub struct HNil;

/// Non-empty list.
#[derive(Debug)]
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Build a type-level list: `list![A, B]` is `HCons<A, HCons<B, HNil>>`.
#[macro_export]
macro_rules! list {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::list![$($tail),*]>
    };
}

// =============================================================================
// Tuple -> list
// =============================================================================

/// Conversion of a tuple (up to 16 elements) into a type-level list.
pub trait IntoList {
    type List;
}

macro_rules! tuple_into_list {
    () => {
        impl IntoList for () {
            type List = HNil;
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> IntoList for ($head, $($tail,)*) {
            type List = HCons<$head, <($($tail,)*) as IntoList>::List>;
        }
        tuple_into_list!($($tail),*);
    };
}
tuple_into_list!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

/// The list form of a tuple.
pub type ListOf<Tuple> = <Tuple as IntoList>::List;

// =============================================================================
// Lists of modeled types
// =============================================================================

/// A boolean-valued function on modeled types, used by [`TypeList::Any`].
pub trait TypeTest {
    type Apply<T: Type>: Bool;
}

/// A list whose elements are all modeled types.
pub trait TypeList: 'static {
    const LEN: usize;
    type IsEmpty: Bool;
    /// First element; `Void` for the empty list.
    type Head: Type;
    type Tail: TypeList;

    /// Does any element pass `F`? False for the empty list.
    type Any<F: TypeTest>: Bool;

    /// Is `X` one of the elements?
    type Contains<X: Type>: Bool;
}

impl TypeList for HNil {
    const LEN: usize = 0;
    type IsEmpty = True;
    type Head = Void;
    type Tail = HNil;
    type Any<F: TypeTest> = False;
    type Contains<X: Type> = False;
}

impl<H: Type, T: TypeList> TypeList for HCons<H, T> {
    const LEN: usize = T::LEN + 1;
    type IsEmpty = False;
    type Head = H;
    type Tail = T;
    type Any<F: TypeTest> = Or<F::Apply<H>, T::Any<F>>;
    type Contains<X: Type> = Or<IdentityEq<H::Identity, X::Identity>, T::Contains<X>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_become_lists() {
        assert_eq!(<ListOf<()> as TypeList>::LEN, 0);
        assert_eq!(<ListOf<(i32, f64, bool)> as TypeList>::LEN, 3);
    }

    #[test]
    fn contains_by_identity() {
        type L = list![i32, f64];
        assert!(<<L as TypeList>::Contains<f64> as Bool>::VALUE);
        assert!(!<<L as TypeList>::Contains<u8> as Bool>::VALUE);
        assert!(!<<HNil as TypeList>::Contains<u8> as Bool>::VALUE);
    }
}
