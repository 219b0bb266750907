//! cv-qualified types.
//!
//! `Const<T>`, `Volatile<T>` and `ConstVolatile<T>` wrap only
//! [`Unqualified`] types, so every cv-qualified type has one spelling:
//! `Const<Const<T>>` and `Const<LRef<T>>` cannot be written, and
//! `AddConst<Volatile<T>>` is `ConstVolatile<T>`. A qualifier applied to an
//! array lands on the element type instead.

use core::marker::PhantomData;

use crate::model::{Type, Unqualified, MAX_RANK};
use crate::primitives::{Bool, Cons, False, True, X4, X5, X6};

/// `const T`
#[derive(Debug)]
pub struct Const<T: Unqualified>(PhantomData<T>);

/// `volatile T`
#[derive(Debug)]
pub struct Volatile<T: Unqualified>(PhantomData<T>);

/// `const volatile T`
#[derive(Debug)]
pub struct ConstVolatile<T: Unqualified>(PhantomData<T>);

macro_rules! cv_wrapper {
    (
        $wrapper:ident, tag: $tag:ident,
        is_const: $is_const:ident, is_volatile: $is_volatile:ident,
        remove_const: $remove_const:ty, remove_volatile: $remove_volatile:ty,
        add_const: $add_const:ty, add_volatile: $add_volatile:ty $(,)?
    ) => {
        impl<T: Unqualified> Type for $wrapper<T> {
            type Identity = Cons<$tag, T::Identity>;

            type ArrayShape = False;
            type UnboundedShape = False;
            type PointerShape = False;
            type LRefShape = False;
            type RRefShape = False;
            type MemberPointerShape = False;
            type ClassOrUnion = T::ClassOrUnion;
            type UnionShape = T::UnionShape;
            type UnscopedEnum = T::UnscopedEnum;
            type Referenceable = T::Referenceable;
            type Referent = T::Referent;
            type Pointee = T::Pointee;
            type CompleteObject = T::CompleteObject;

            type IsConst = $is_const;
            type IsVolatile = $is_volatile;
            type RemoveConst = $remove_const;
            type RemoveVolatile = $remove_volatile;
            type AddConst = $add_const;
            type AddVolatile = $add_volatile;

            type RemoveReference = Self;
            type RemovePointer = <T::PointerShape as Bool>::Pick<T::RemovePointer, Self>;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            type MemberType = T::MemberType;
            type MemberClass = T::MemberClass;

            type Bases = T::Bases;
            type PublicBases = T::PublicBases;
            type Members = T::Members;
            type Arith = T::Arith;

            const RANK: usize = 0;
            const EXTENTS: [usize; MAX_RANK] = [0; MAX_RANK];
            const ALIGN: usize = T::ALIGN;
        }
    };
}

cv_wrapper!(
    Const, tag: X4,
    is_const: True, is_volatile: False,
    remove_const: T, remove_volatile: Self,
    add_const: Self, add_volatile: ConstVolatile<T>,
);

cv_wrapper!(
    Volatile, tag: X5,
    is_const: False, is_volatile: True,
    remove_const: Self, remove_volatile: T,
    add_const: ConstVolatile<T>, add_volatile: Self,
);

cv_wrapper!(
    ConstVolatile, tag: X6,
    is_const: True, is_volatile: True,
    remove_const: Volatile<T>, remove_volatile: Const<T>,
    add_const: Self, add_volatile: Self,
);
