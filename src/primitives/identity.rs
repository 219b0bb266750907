//! Structural identities.
//!
//! A modeled type spells itself as a prefix-free stream of nibbles:
//!
//! ```text
//! Ptr<Const<i32>>   ->  X7 X4 X2 X4 Nil
//!                       |  |  |  |
//!                       |  |  |  +-- builtin index of i32
//!                       |  |  +----- builtin tag
//!                       |  +-------- const tag
//!                       +----------- pointer tag
//! ```
//!
//! Two modeled types are the same type exactly when their streams match, so
//! `IsSame` is a walk over two streams.

use core::marker::PhantomData;

use super::bool::{And, Bool, False, Not, True};
use super::nibble::{Nibble, X0};

/// A stream of nibbles terminated by [`Nil`].
pub trait Identity: 'static {
    type IsNil: Bool;
    type Head: Nibble;
    type Tail: Identity;

    /// Stream equality.
    type Matches<Other: Identity>: Bool;

    /// Concatenation: `Self` followed by `Next`.
    type Then<Next: Identity>: Identity;
}

/// End of stream.
#[derive(Debug)]
pub struct Nil;

/// One nibble followed by the rest of the stream.
#[derive(Debug)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

impl Identity for Nil {
    type IsNil = True;
    type Head = X0;
    type Tail = Nil;
    type Matches<Other: Identity> = Other::IsNil;
    type Then<Next: Identity> = Next;
}

impl<H: Nibble, T: Identity> Identity for Cons<H, T> {
    type IsNil = False;
    type Head = H;
    type Tail = T;
    type Matches<Other: Identity> = And<
        Not<Other::IsNil>,
        And<H::Matches<Other::Head>, T::Matches<Other::Tail>>,
    >;
    type Then<Next: Identity> = Cons<H, T::Then<Next>>;
}

/// Check two identities for equality.
pub type IdentityEq<A, B> = <A as Identity>::Matches<B>;
