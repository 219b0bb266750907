//! Type-level natural numbers.
//!
//! Array lengths are naturals so that the length takes part in a type's
//! structural identity: `Array<i32, D3>` and `Array<i32, D4>` are different
//! types with different identities.

use core::marker::PhantomData;

use super::identity::{Cons, Identity, Nil};
use super::nibble::{XE, XF};

/// Type-level natural number.
pub trait Nat: 'static {
    const VALUE: usize;
    /// Unary spelling: one `XE` per successor, closed by `XF`.
    type Identity: Identity;
}

/// Zero.
#[derive(Debug)]
pub struct Z;

/// Successor.
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
    type Identity = Cons<XF, Nil>;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
    type Identity = Cons<XE, N::Identity>;
}

// D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
macros::peano!(64);
