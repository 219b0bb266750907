//! Builtin leaves: `Void`, `NullPtr` and the Rust primitive scalars.
//!
//! The primitive scalars stand in for the fundamental types of the modeled
//! language:
//!
//! | Modeled as | Role |
//! |------------|------|
//! | `bool` | boolean |
//! | `char` | 32-bit character type |
//! | `i8`, `i16`, `i32`, `i64`, `i128` | signed integers (`i32` is `int`) |
//! | `isize` | `long` |
//! | `u8` .. `u128`, `usize` | unsigned counterparts |
//! | `f32`, `f64` | `float`, `double` |

use crate::model::arith::NotArithmetic;
use crate::model::members::Builtin;
use crate::primitives::{Cons, False, HNil, Nil, True};
use crate::primitives::{X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};

/// The empty type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Void;

/// The type of the null pointer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullPtr;

/// Implement [`Type`](crate::model::Type) and
/// [`Unqualified`](crate::model::Unqualified) for a leaf: a type with no
/// structure of its own (builtins and user classes, unions, enumerations).
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_leaf_type {
    (
        $ty:ty {
            identity: $id:ty,
            referenceable: $referenceable:ty,
            class_or_union: $class_or_union:ty,
            union: $union:ty,
            unscoped_enum: $unscoped:ty,
            bases: $bases:ty,
            public_bases: $public_bases:ty,
            members: $members:ty,
            arith: $arith:ty,
            align: $align:expr $(,)?
        }
    ) => {
        impl $crate::model::Type for $ty {
            type Identity = $id;

            type ArrayShape = $crate::False;
            type UnboundedShape = $crate::False;
            type PointerShape = $crate::False;
            type LRefShape = $crate::False;
            type RRefShape = $crate::False;
            type MemberPointerShape = $crate::False;
            type ClassOrUnion = $class_or_union;
            type UnionShape = $union;
            type UnscopedEnum = $unscoped;
            type Referenceable = $referenceable;
            type Referent = $referenceable;
            type Pointee = $crate::True;
            type CompleteObject = $referenceable;

            type IsConst = $crate::False;
            type IsVolatile = $crate::False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type AddConst = $crate::model::Const<Self>;
            type AddVolatile = $crate::model::Volatile<Self>;

            type RemoveReference = Self;
            type RemovePointer = Self;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            type MemberType = $crate::model::Void;
            type MemberClass = $crate::model::Void;

            type Bases = $bases;
            type PublicBases = $public_bases;
            type Members = $members;
            type Arith = $arith;

            const RANK: usize = 0;
            const EXTENTS: [usize; $crate::model::MAX_RANK] = [0; $crate::model::MAX_RANK];
            const ALIGN: usize = $align;
        }

        impl $crate::model::Unqualified for $ty {}
    };
}

crate::__impl_leaf_type!(Void {
    identity: Cons<X0, Nil>,
    referenceable: False,
    class_or_union: False,
    union: False,
    unscoped_enum: False,
    bases: HNil,
    public_bases: HNil,
    members: Builtin,
    arith: NotArithmetic,
    align: 0,
});

crate::__impl_leaf_type!(NullPtr {
    identity: Cons<X1, Nil>,
    referenceable: True,
    class_or_union: False,
    union: False,
    unscoped_enum: False,
    bases: HNil,
    public_bases: HNil,
    members: Builtin,
    arith: NotArithmetic,
    align: core::mem::align_of::<*const ()>(),
});

macro_rules! builtin_scalar {
    ($($ty:ty => $index:ident),* $(,)?) => {
        $(
            crate::__impl_leaf_type!($ty {
                identity: Cons<X2, Cons<$index, Nil>>,
                referenceable: True,
                class_or_union: False,
                union: False,
                unscoped_enum: False,
                bases: HNil,
                public_bases: HNil,
                members: Builtin,
                arith: $ty,
                align: core::mem::align_of::<$ty>(),
            });
        )*
    };
}

builtin_scalar! {
    bool => X0,
    char => X1,
    i8 => X2,
    i16 => X3,
    i32 => X4,
    i64 => X5,
    i128 => X6,
    isize => X7,
    u8 => X8,
    u16 => X9,
    u32 => XA,
    u64 => XB,
    u128 => XC,
    usize => XD,
    f32 => XE,
    f64 => XF,
}
