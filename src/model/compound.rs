//! Compound types: pointers, references, arrays and member pointers.

use core::marker::PhantomData;

use crate::model::arith::NotArithmetic;
use crate::model::members::Builtin;
use crate::model::{Const, Type, Unqualified, Void, Volatile, MAX_RANK};
use crate::primitives::const_utils::push_extent;
use crate::primitives::{Bool, Cons, False, HNil, Identity, Nat, True, X7, X8, X9, XA, XB, XD};

/// `T*`. There are no pointers to references or to qualified functions.
///
/// ```compile_fail
/// use tola_traits::prelude::*;
/// let _: Option<Ptr<LRef<i32>>> = None;
/// ```
#[derive(Debug)]
pub struct Ptr<T: Type<Pointee = True>>(PhantomData<T>);

/// `T&`. There are no references to `void`, to references or to qualified
/// functions.
///
/// ```compile_fail
/// use tola_traits::prelude::*;
/// let _: Option<LRef<Void>> = None;
/// ```
#[derive(Debug)]
pub struct LRef<T: Type<Referent = True>>(PhantomData<T>);

/// `T&&`
#[derive(Debug)]
pub struct RRef<T: Type<Referent = True>>(PhantomData<T>);

/// `T[N]`, with the length as a type-level natural (`Array<i32, D4>`). The
/// element is a complete object type.
///
/// ```compile_fail
/// use tola_traits::prelude::*;
/// let _: Option<Array<LRef<i32>, D2>> = None;
/// ```
///
/// ```compile_fail
/// use tola_traits::prelude::*;
/// let _: Option<Array<Func<i32>, D2>> = None;
/// ```
#[derive(Debug)]
pub struct Array<T: Type<CompleteObject = True>, N: Nat>(PhantomData<(T, N)>);

/// `T[]`
#[derive(Debug)]
pub struct Unbounded<T: Type<CompleteObject = True>>(PhantomData<T>);

/// `M C::*`: pointer to a member of type `M` in class `C`.
#[derive(Debug)]
pub struct MemPtr<M: Type, C: Type>(PhantomData<(M, C)>);

/// Builds `T&` and `T&&` where `T` can be referred to; elsewhere `T` itself.
///
/// Selecting on the flag instead of with [`Bool::Pick`]
/// keeps the reference from being formed when it does not exist.
pub trait ReferenceForm: Bool {
    type Lvalue<T: Type<Referent = Self>>: Type;
    type Rvalue<T: Type<Referent = Self>>: Type;
}

impl ReferenceForm for True {
    type Lvalue<T: Type<Referent = True>> = LRef<T>;
    type Rvalue<T: Type<Referent = True>> = RRef<T>;
}

impl ReferenceForm for False {
    type Lvalue<T: Type<Referent = False>> = T;
    type Rvalue<T: Type<Referent = False>> = T;
}

/// Builds `T*` where `T` can be pointed to; elsewhere `T` itself.
pub trait PointerForm: Bool {
    type To<T: Type<Pointee = Self>>: Type;
}

impl PointerForm for True {
    type To<T: Type<Pointee = True>> = Ptr<T>;
}

impl PointerForm for False {
    type To<T: Type<Pointee = False>> = T;
}

impl<T: Type<Pointee = True>> Type for Ptr<T> {
    type Identity = Cons<X7, T::Identity>;

    type ArrayShape = False;
    type UnboundedShape = False;
    type PointerShape = True;
    type LRefShape = False;
    type RRefShape = False;
    type MemberPointerShape = False;
    type ClassOrUnion = False;
    type UnionShape = False;
    type UnscopedEnum = False;
    type Referenceable = True;
    type Referent = True;
    type Pointee = True;
    type CompleteObject = True;

    type IsConst = False;
    type IsVolatile = False;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;

    type RemoveReference = Self;
    type RemovePointer = T;
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
    const ALIGN: usize = core::mem::align_of::<*const ()>();
}

impl<T: Type<Pointee = True>> Unqualified for Ptr<T> {}

// References ignore cv: `AddConst<LRef<T>>` is `LRef<T>`.
macro_rules! reference {
    ($reference:ident, tag: $tag:ident, lvalue: $lvalue:ident, rvalue: $rvalue:ident) => {
        impl<T: Type<Referent = True>> Type for $reference<T> {
            type Identity = Cons<$tag, T::Identity>;

            type ArrayShape = False;
            type UnboundedShape = False;
            type PointerShape = False;
            type LRefShape = $lvalue;
            type RRefShape = $rvalue;
            type MemberPointerShape = False;
            type ClassOrUnion = False;
            type UnionShape = False;
            type UnscopedEnum = False;
            type Referenceable = True;
            type Referent = False;
            type Pointee = False;
            type CompleteObject = False;

            type IsConst = False;
            type IsVolatile = False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type AddConst = Self;
            type AddVolatile = Self;

            type RemoveReference = T;
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
            const ALIGN: usize = T::ALIGN;
        }
    };
}

reference!(LRef, tag: X8, lvalue: True, rvalue: False);
reference!(RRef, tag: X9, lvalue: False, rvalue: True);

// Arrays carry the element's cv: `AddConst<Array<T, N>>` is
// `Array<AddConst<T>, N>`, and an array is const when its element is.
impl<T: Type<CompleteObject = True>, N: Nat> Type for Array<T, N> {
    type Identity = Cons<XA, <N::Identity as Identity>::Then<T::Identity>>;

    type ArrayShape = True;
    type UnboundedShape = False;
    type PointerShape = False;
    type LRefShape = False;
    type RRefShape = False;
    type MemberPointerShape = False;
    type ClassOrUnion = False;
    type UnionShape = False;
    type UnscopedEnum = False;
    type Referenceable = True;
    type Referent = True;
    type Pointee = True;
    type CompleteObject = True;

    type IsConst = T::IsConst;
    type IsVolatile = T::IsVolatile;
    type RemoveConst = Array<T::RemoveConst, N>;
    type RemoveVolatile = Array<T::RemoveVolatile, N>;
    type AddConst = Array<T::AddConst, N>;
    type AddVolatile = Array<T::AddVolatile, N>;

    type RemoveReference = Self;
    type RemovePointer = Self;
    type RemoveExtent = T;
    type RemoveAllExtents = T::RemoveAllExtents;
    type MemberType = Void;
    type MemberClass = Void;

    type Bases = HNil;
    type PublicBases = HNil;
    type Members = Builtin;
    type Arith = NotArithmetic;

    const RANK: usize = T::RANK + 1;
    const EXTENTS: [usize; MAX_RANK] = push_extent(N::VALUE, T::EXTENTS);
    const ALIGN: usize = T::ALIGN;
}

impl<T: Type<CompleteObject = True>> Type for Unbounded<T> {
    type Identity = Cons<XB, T::Identity>;

    type ArrayShape = True;
    type UnboundedShape = True;
    type PointerShape = False;
    type LRefShape = False;
    type RRefShape = False;
    type MemberPointerShape = False;
    type ClassOrUnion = False;
    type UnionShape = False;
    type UnscopedEnum = False;
    type Referenceable = True;
    type Referent = True;
    type Pointee = True;
    type CompleteObject = False;

    type IsConst = T::IsConst;
    type IsVolatile = T::IsVolatile;
    type RemoveConst = Unbounded<T::RemoveConst>;
    type RemoveVolatile = Unbounded<T::RemoveVolatile>;
    type AddConst = Unbounded<T::AddConst>;
    type AddVolatile = Unbounded<T::AddVolatile>;

    type RemoveReference = Self;
    type RemovePointer = Self;
    type RemoveExtent = T;
    type RemoveAllExtents = T::RemoveAllExtents;
    type MemberType = Void;
    type MemberClass = Void;

    type Bases = HNil;
    type PublicBases = HNil;
    type Members = Builtin;
    type Arith = NotArithmetic;

    const RANK: usize = T::RANK + 1;
    const EXTENTS: [usize; MAX_RANK] = push_extent(0, T::EXTENTS);
    const ALIGN: usize = T::ALIGN;
}

impl<M: Type, C: Type> Type for MemPtr<M, C> {
    type Identity = Cons<XD, <M::Identity as Identity>::Then<C::Identity>>;

    type ArrayShape = False;
    type UnboundedShape = False;
    type PointerShape = False;
    type LRefShape = False;
    type RRefShape = False;
    type MemberPointerShape = True;
    type ClassOrUnion = False;
    type UnionShape = False;
    type UnscopedEnum = False;
    type Referenceable = True;
    type Referent = True;
    type Pointee = True;
    type CompleteObject = True;

    type IsConst = False;
    type IsVolatile = False;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;

    type RemoveReference = Self;
    type RemovePointer = Self;
    type RemoveExtent = Self;
    type RemoveAllExtents = Self;
    type MemberType = M;
    type MemberClass = C;

    type Bases = HNil;
    type PublicBases = HNil;
    type Members = Builtin;
    type Arith = NotArithmetic;

    const RANK: usize = 0;
    const EXTENTS: [usize; MAX_RANK] = [0; MAX_RANK];
    const ALIGN: usize = core::mem::align_of::<usize>();
}

impl<M: Type, C: Type> Unqualified for MemPtr<M, C> {}
