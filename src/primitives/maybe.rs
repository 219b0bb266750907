//! Optional type-level results.
//!
//! Some computations have no answer for some inputs (two types without a
//! common type, for example). Those return a `Maybe`: [`Just<T>`] or
//! [`Nothing`]. Probing `IsJust` is the recoverable path; asking for the
//! payload through [`Resolve`] on `Nothing` is a compile error.

use core::marker::PhantomData;

use super::bool::{Bool, False, True};
use crate::model::Type;

/// A type-level optional modeled type.
pub trait Maybe: 'static {
    type IsJust: Bool;

    /// `Self` if present, otherwise `Other`.
    type OrElse<Other: Maybe>: Maybe;

    /// Feed the payload to `F`; absence propagates.
    type Bind<F: MaybeFn>: Maybe;
}

/// A function from modeled types to optional results.
pub trait MaybeFn {
    type Apply<T: Type>: Maybe;
}

/// A present result.
#[derive(Debug)]
pub struct Just<T: Type>(PhantomData<T>);

/// An absent result.
#[derive(Debug)]
pub struct Nothing;

impl<T: Type> Maybe for Just<T> {
    type IsJust = True;
    type OrElse<Other: Maybe> = Self;
    type Bind<F: MaybeFn> = F::Apply<T>;
}

impl Maybe for Nothing {
    type IsJust = False;
    type OrElse<Other: Maybe> = Other;
    type Bind<F: MaybeFn> = Nothing;
}

/// Extraction of a present payload. Only `Just<T>` implements it.
pub trait Resolve: Maybe {
    type Out: Type;
}

impl<T: Type> Resolve for Just<T> {
    type Out = T;
}
