//! Function types.
//!
//! `Func<R, (A, B)>` is the function type `R(A, B)`. Functions carrying a cv
//! or reference qualifier (`R(A) const &`) are a separate constructor,
//! [`QualFn`]: they are functions, but no reference or pointer to them can be
//! formed.

use core::marker::PhantomData;

use crate::model::arith::NotArithmetic;
use crate::model::members::Builtin;
use crate::model::{Type, Void, MAX_RANK};
use crate::primitives::{
    Cons, False, HCons, HNil, Identity, IntoList, Nibble, Nil, True, X0, X1, X2, X3, X4, X5, X6,
    X7, XC, XE, XF,
};

/// A parameter list.
pub trait Params: 'static {
    const ARITY: usize;
    /// One `XE` before each parameter, closed by `XF`.
    type Identity: Identity;
}

impl Params for HNil {
    const ARITY: usize = 0;
    type Identity = Cons<XF, Nil>;
}

impl<H: Type, T: Params> Params for HCons<H, T> {
    const ARITY: usize = T::ARITY + 1;
    type Identity = Cons<XE, <H::Identity as Identity>::Then<T::Identity>>;
}

/// The qualifier of an abominable function type.
pub trait FnQualifier: 'static {
    type Tag: Nibble;
}

macro_rules! fn_qualifier {
    ($($(#[$meta:meta])* $name:ident => $tag:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name;

            impl FnQualifier for $name {
                type Tag = $tag;
            }
        )*
    };
}

fn_qualifier! {
    /// `R(A) const`
    FnConst => X1,
    /// `R(A) volatile`
    FnVolatile => X2,
    /// `R(A) const volatile`
    FnConstVolatile => X3,
    /// `R(A) &`
    FnLRef => X4,
    /// `R(A) &&`
    FnRRef => X5,
    /// `R(A) const &`
    FnConstLRef => X6,
    /// `R(A) const &&`
    FnConstRRef => X7,
}

/// `R(Args...)`, with the parameters as a tuple.
#[derive(Debug)]
pub struct Func<R, Args = ()>(PhantomData<(R, Args)>);

/// `R(Args...) Q`: a qualified ("abominable") function type.
#[derive(Debug)]
pub struct QualFn<R, Args, Q>(PhantomData<(R, Args, Q)>);

type Signature<R, Args, Tag> = Cons<
    XC,
    <<R as Type>::Identity as Identity>::Then<
        <<<Args as IntoList>::List as Params>::Identity as Identity>::Then<Cons<Tag, Nil>>,
    >,
>;

// Functions ignore cv: adding const to a function type is a no-op, which is
// exactly what `IsFunction` tests.
macro_rules! function {
    ($ty:ident<$($param:ident),*>, tag: $tag:ty, referenceable: $referenceable:ident $(, $bound:ident: $trait:ident)?) => {
        impl<R: Type, Args: IntoList + 'static $(, $bound: $trait)?> Type for $ty<$($param),*>
        where
            Args::List: Params,
        {
            type Identity = Signature<R, Args, $tag>;

            type ArrayShape = False;
            type UnboundedShape = False;
            type PointerShape = False;
            type LRefShape = False;
            type RRefShape = False;
            type MemberPointerShape = False;
            type ClassOrUnion = False;
            type UnionShape = False;
            type UnscopedEnum = False;
            type Referenceable = $referenceable;
            type Referent = $referenceable;
            type Pointee = $referenceable;
            type CompleteObject = False;

            type IsConst = False;
            type IsVolatile = False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type AddConst = Self;
            type AddVolatile = Self;

            type RemoveReference = Self;
            type RemovePointer = Self;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            type MemberType = Void;
            type MemberClass = Void;

            type Bases = HNil;
            type PublicBases = HNil;
            type Members = Builtin;
            type Arith = NotArithmetic;

            const RANK: usize = 0;
            const EXTENTS: [usize; MAX_RANK] = [0; MAX_RANK];
            const ALIGN: usize = 0;
        }
    };
}

function!(Func<R, Args>, tag: X0, referenceable: True);
function!(QualFn<R, Args, Q>, tag: Q::Tag, referenceable: False, Q: FnQualifier);
