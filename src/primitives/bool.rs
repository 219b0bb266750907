//! Type-level boolean logic.
//!
//! Core types: `True`, `False` (the two [`BoolConstant`] instantiations),
//! the `Bool` trait, and the `Predicate` interface every trait exposes.

use crate::model::Type;
use crate::primitives::constant::BoolConstant;
use crate::primitives::maybe::Maybe;

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional over arbitrary types.
    type If<Then, Else>;

    /// Conditional restricted to modeled types, so the result stays a [`Type`].
    type Pick<Then: Type, Else: Type>: Type;

    /// Conditional over optional results.
    type PickMaybe<Then: Maybe, Else: Maybe>: Maybe;

    /// Conditional whose result is guaranteed to implement `Bool`.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical AND that asks `P` for its answer only when `Self` is true,
    /// so `P` may recurse on a structure that ends where `Self` is false.
    type AndThen<P: Predicate>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical equivalence
    type Iff<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level true.
pub type True = BoolConstant<true>;

/// Type-level false.
pub type False = BoolConstant<false>;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Pick<Then: Type, Else: Type> = Then;
    type PickMaybe<Then: Maybe, Else: Maybe> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    type And<Other: Bool> = Other;
    type AndThen<P: Predicate> = P::Out;
    type Or<Other: Bool> = True;
    type Iff<Other: Bool> = Other;
    type Not = False;
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Pick<Then: Type, Else: Type> = Else;
    type PickMaybe<Then: Maybe, Else: Maybe> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    type And<Other: Bool> = False;
    type AndThen<P: Predicate> = False;
    type Or<Other: Bool> = Other;
    type Iff<Other: Bool> = <Other as Bool>::Not;
    type Not = True;
}

// =============================================================================
// Predicate interface
// =============================================================================

/// A type trait with a boolean answer.
///
/// Every predicate struct in this crate (`IsVoid<T>`, `IsSame<A, B>`, ...)
/// implements this trait. `Out` is the answer as a type, `VALUE` as a constant.
pub trait Predicate {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl Predicate for True {
    type Out = True;
}

impl Predicate for False {
    type Out = False;
}

/// The type-level answer of a predicate.
pub type Holds<P> = <P as Predicate>::Out;

/// `A && B` on type-level booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// `A && P` where `P` is only evaluated when `A` holds.
pub type AndThen<A, P> = <A as Bool>::AndThen<P>;

/// `A || B` on type-level booleans.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A` on a type-level boolean.
pub type Not<A> = <A as Bool>::Not;

/// `A == B` on type-level booleans.
pub type Iff<A, B> = <A as Bool>::Iff<B>;

// =============================================================================
// const bool -> Bool
// =============================================================================

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

/// Strict Conditional Type Alias (Result is Bool)
pub type Elif<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::Elif<T, E>;
