//! Constructibility.
//!
//! `IsConstructible<T, (A1, .., An)>` asks whether `T t(declval<A1>(), ..)`
//! is well-formed. The answer depends on the argument count:
//!
//! ```text
//! ()          value-initialization: an object other than an array of
//!             unknown bound whose (element) type has a default constructor;
//!             never a reference
//! (A,)        implicit conversion from A, or a declared constructor
//!             (explicit ones included) of a class T
//! (A, B, ..)  a declared constructor of a class T accepting the arguments
//! ```
//!
//! Trivial and non-throwing variants read the registry of the element type;
//! a single argument that is neither the same class nor a derived one goes
//! through a user-defined conversion and is never trivial.

use core::marker::PhantomData;

use crate::category::composite::{IsObject, IsReference};
use crate::model::{CtorList, Members, MembersOf, Type};
use crate::primitives::{And, Bool, False, HCons, HNil, Holds, IntoList, Not, Or, Predicate, TypeList};
use crate::relation::base_of::DerivesPublicly;
use crate::relation::convertible::IsConvertible;
use crate::relation::same::IsSame;
use crate::syntax_macros::predicate;
use crate::transform::cv::AddConst;
use crate::transform::extent::RemoveAllExtents;
use crate::transform::reference::{AddLvalueReference, AddRvalueReference, RemoveCvRef};

/// Registry of the type actually being built: the element type of arrays.
type ElementMembers<T> = MembersOf<RemoveAllExtents<T>>;

/// `A` is `T` or derived from it, so only a special member (or a reference
/// binding) is involved.
type Special<T, A> = Or<
    Holds<IsSame<RemoveCvRef<A>, RemoveCvRef<T>>>,
    Holds<DerivesPublicly<RemoveCvRef<T>, RemoveCvRef<A>>>,
>;

type NoClassInvolved<T, A> = And<
    Not<<RemoveCvRef<T> as Type>::ClassOrUnion>,
    Not<<RemoveCvRef<A> as Type>::ClassOrUnion>,
>;

/// An argument list, dispatched on its length.
pub trait ConstructArgs: TypeList {
    /// Is `T t(args..)` well-formed, `T` being an object or reference?
    type Constructs<T: Type>: Bool;
    /// ... and calls only trivial operations?
    type Trivially<T: Type>: Bool;
    /// ... and cannot throw?
    type Nothrow<T: Type>: Bool;
}

impl ConstructArgs for HNil {
    type Constructs<T: Type> = And<
        Not<Or<<T as Type>::UnboundedShape, Holds<IsReference<T>>>>,
        <ElementMembers<T> as Members>::DefaultCtor,
    >;
    type Trivially<T: Type> = <ElementMembers<T> as Members>::Trivial;
    type Nothrow<T: Type> = <ElementMembers<T> as Members>::Nothrow;
}

impl<A: Type> ConstructArgs for HCons<A, HNil> {
    type Constructs<T: Type> = Or<
        Holds<IsConvertible<A, T>>,
        And<
            <T as Type>::ClassOrUnion,
            Or<
                <MembersOf<T> as Members>::FromAny,
                <<MembersOf<T> as Members>::Ctors as CtorList>::Accepts<Self>,
            >,
        >,
    >;
    type Trivially<T: Type> = And<
        <ElementMembers<T> as Members>::Trivial,
        Or<Special<T, A>, NoClassInvolved<T, A>>,
    >;
    type Nothrow<T: Type> = And<
        <ElementMembers<T> as Members>::Nothrow,
        Or<Special<T, A>, <MembersOf<RemoveCvRef<A>> as Members>::Nothrow>,
    >;
}

impl<A: Type, B: Type, Rest: TypeList> ConstructArgs for HCons<A, HCons<B, Rest>> {
    type Constructs<T: Type> = And<
        <T as Type>::ClassOrUnion,
        <<MembersOf<T> as Members>::Ctors as CtorList>::Accepts<Self>,
    >;
    type Trivially<T: Type> = False;
    type Nothrow<T: Type> = <MembersOf<T> as Members>::Nothrow;
}

type ObjectOrReference<T> = Or<Holds<IsObject<T>>, Holds<IsReference<T>>>;

/// Can `T` be direct-initialized from arguments of the tuple's types?
pub struct IsConstructible<T, Args = ()>(PhantomData<(T, Args)>);

impl<T: Type, Args: IntoList> Predicate for IsConstructible<T, Args>
where
    Args::List: ConstructArgs,
{
    type Out = And<ObjectOrReference<T>, <Args::List as ConstructArgs>::Constructs<T>>;
}

/// [`IsConstructible`] calling only trivial operations.
pub struct IsTriviallyConstructible<T, Args = ()>(PhantomData<(T, Args)>);

impl<T: Type, Args: IntoList> Predicate for IsTriviallyConstructible<T, Args>
where
    Args::List: ConstructArgs,
{
    type Out = And<Holds<IsConstructible<T, Args>>, <Args::List as ConstructArgs>::Trivially<T>>;
}

/// [`IsConstructible`] that cannot throw.
pub struct IsNothrowConstructible<T, Args = ()>(PhantomData<(T, Args)>);

impl<T: Type, Args: IntoList> Predicate for IsNothrowConstructible<T, Args>
where
    Args::List: ConstructArgs,
{
    type Out = And<Holds<IsConstructible<T, Args>>, <Args::List as ConstructArgs>::Nothrow<T>>;
}

/// `const` form of [`IsConstructible`].
#[inline(always)]
pub const fn is_constructible<T: Type, Args: IntoList>() -> bool
where
    Args::List: ConstructArgs,
{
    <IsConstructible<T, Args> as Predicate>::VALUE
}

/// `const` form of [`IsTriviallyConstructible`].
#[inline(always)]
pub const fn is_trivially_constructible<T: Type, Args: IntoList>() -> bool
where
    Args::List: ConstructArgs,
{
    <IsTriviallyConstructible<T, Args> as Predicate>::VALUE
}

/// `const` form of [`IsNothrowConstructible`].
#[inline(always)]
pub const fn is_nothrow_constructible<T: Type, Args: IntoList>() -> bool
where
    Args::List: ConstructArgs,
{
    <IsNothrowConstructible<T, Args> as Predicate>::VALUE
}

// =============================================================================
// Default / copy / move
// =============================================================================

/// Argument of a copy: `const T&`.
pub type CopySource<T> = AddLvalueReference<AddConst<T>>;

/// Argument of a move: `T&&`.
pub type MoveSource<T> = AddRvalueReference<T>;

predicate! {
    pub IsDefaultConstructible<T> => Holds<IsConstructible<T, ()>>;
    pub IsTriviallyDefaultConstructible<T> => Holds<IsTriviallyConstructible<T, ()>>;
    pub IsNothrowDefaultConstructible<T> => Holds<IsNothrowConstructible<T, ()>>;

    /// Constructible from `const T&`; false for non-referenceable `T`.
    pub IsCopyConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsConstructible<T, (CopySource<T>,)>>,
    >;
    pub IsTriviallyCopyConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsTriviallyConstructible<T, (CopySource<T>,)>>,
    >;
    pub IsNothrowCopyConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsNothrowConstructible<T, (CopySource<T>,)>>,
    >;

    /// Constructible from `T&&`; false for non-referenceable `T`.
    pub IsMoveConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsConstructible<T, (MoveSource<T>,)>>,
    >;
    pub IsTriviallyMoveConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsTriviallyConstructible<T, (MoveSource<T>,)>>,
    >;
    pub IsNothrowMoveConstructible<T> => And<
        <T as Type>::Referenceable,
        Holds<IsNothrowConstructible<T, (MoveSource<T>,)>>,
    >;
}
