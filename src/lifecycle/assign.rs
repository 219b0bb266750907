//! Assignability: is `declval<T>() = declval<U>()` well-formed?
//!
//! Scalar targets need an lvalue of a non-const type and an implicit
//! conversion from `U`. Class targets need a non-const object and one of the
//! copy assignment (`U` binds to `const T&`), the move assignment (`U` binds
//! to `T&&`, converting constructors included) or a declared assignment
//! operator whose parameter accepts `U`.

use core::marker::PhantomData;

use crate::category::composite::IsScalar;
use crate::lifecycle::construct::{CopySource, MoveSource};
use crate::model::{Members, MembersOf, Type};
use crate::primitives::{And, Holds, Not, Or, TypeList, TypeTest};
use crate::relation::convertible::{ArgFits, IsConvertible};
use crate::relation::same::IsSame;
use crate::syntax_macros::predicate;
use crate::transform::cv::RemoveCv;
use crate::transform::reference::{AddLvalueReference, RemoveCvRef, RemoveReference};

/// Does a declared assignment operator taking `P` accept a `U`?
pub struct AssignsFrom<U>(PhantomData<U>);

impl<U: Type> TypeTest for AssignsFrom<U> {
    type Apply<P: Type> = ArgFits<U, P>;
}

type Target<T> = RemoveReference<T>;

type Writable<T> = Not<<Target<T> as Type>::IsConst>;

type ScalarAssign<T, U> = And<
    And<<T as Type>::LRefShape, Holds<IsScalar<Target<T>>>>,
    And<Writable<T>, Holds<IsConvertible<U, RemoveCv<Target<T>>>>>,
>;

type ClassAssign<T, U> = And<
    And<<Target<T> as Type>::ClassOrUnion, Writable<T>>,
    Or<
        Or<
            And<
                <MembersOf<Target<T>> as Members>::CopyAssign,
                Holds<IsConvertible<U, CopySource<RemoveCv<Target<T>>>>>,
            >,
            And<
                <MembersOf<Target<T>> as Members>::MoveAssign,
                Holds<IsConvertible<U, MoveSource<RemoveCv<Target<T>>>>>,
            >,
        >,
        <<MembersOf<Target<T>> as Members>::Assigns as TypeList>::Any<AssignsFrom<U>>,
    >,
>;

/// `U` is the target's own class, so a special member does the work.
type SameClass<T, U> = Holds<IsSame<RemoveCvRef<U>, RemoveCv<Target<T>>>>;

predicate! {
    /// Can a `U` be assigned to a `T`?
    pub IsAssignable<T, U> => Or<ScalarAssign<T, U>, ClassAssign<T, U>>;

    /// [`IsAssignable`] through trivial operations only.
    pub IsTriviallyAssignable<T, U> => And<
        Holds<IsAssignable<T, U>>,
        And<
            <MembersOf<Target<T>> as Members>::Trivial,
            Or<
                SameClass<T, U>,
                And<
                    Not<<Target<T> as Type>::ClassOrUnion>,
                    Not<<RemoveCvRef<U> as Type>::ClassOrUnion>,
                >,
            >,
        >,
    >;

    /// [`IsAssignable`] without a possible exception.
    pub IsNothrowAssignable<T, U> => And<
        Holds<IsAssignable<T, U>>,
        And<
            <MembersOf<Target<T>> as Members>::Nothrow,
            Or<SameClass<T, U>, <MembersOf<RemoveCvRef<U>> as Members>::Nothrow>,
        >,
    >;

    /// `T&` = `const T&`; false for non-referenceable `T`.
    pub IsCopyAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsAssignable<AddLvalueReference<T>, CopySource<T>>>,
    >;
    pub IsTriviallyCopyAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsTriviallyAssignable<AddLvalueReference<T>, CopySource<T>>>,
    >;
    pub IsNothrowCopyAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsNothrowAssignable<AddLvalueReference<T>, CopySource<T>>>,
    >;

    /// `T&` = `T&&`; false for non-referenceable `T`.
    pub IsMoveAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsAssignable<AddLvalueReference<T>, MoveSource<T>>>,
    >;
    pub IsTriviallyMoveAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsTriviallyAssignable<AddLvalueReference<T>, MoveSource<T>>>,
    >;
    pub IsNothrowMoveAssignable<T> => And<
        <T as Type>::Referenceable,
        Holds<IsNothrowAssignable<AddLvalueReference<T>, MoveSource<T>>>,
    >;
}
