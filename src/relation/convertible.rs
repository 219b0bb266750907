//! Implicit convertibility.
//!
//! `IsConvertible<From, To>` asks whether `To f() { return declval<From>(); }`
//! would compile: a value of `From` (an lvalue when `From` is an lvalue
//! reference or a function, an xvalue otherwise) copy-initializes a `To`.
//!
//! ```text
//! To = LRef<Y>        lvalue of a compatible type
//!                     const Y&: also compatible rvalues, or a temporary
//! To = RRef<Y>        rvalue of a compatible type, or a temporary
//! To = U (by value)   standard conversions on the decayed source
//!                     class copy / move from the same or a derived class
//!                     non-explicit converting constructors
//!                     conversion operators
//! ```
//!
//! Only one user-defined conversion is ever applied: constructor parameters
//! and conversion-operator results are matched with standard conversions.

use core::marker::PhantomData;

use crate::category::composite::{IsArithmetic, IsMemberPointer};
use crate::category::primary::{
    IsArray, IsEnum, IsFunction, IsNullPointer, IsPointer, IsVoid,
};
use crate::model::{CtorList, Members, MembersOf, Type};
use crate::primitives::{
    And, AndThen, Bool, HCons, HNil, Holds, Not, Or, Predicate, TypeList, TypeTest,
};
use crate::relation::base_of::DerivesPublicly;
use crate::relation::same::IsSame;
use crate::syntax_macros::predicate;
use crate::transform::cv::RemoveCv;
use crate::transform::decay::Decay;
use crate::transform::pointer::RemovePointer;
use crate::transform::reference::{RemoveCvRef, RemoveReference};

predicate! {
    /// Can a value of `From` implicitly convert to `To`?
    ///
    /// Both void: true. `To` array, function or void: false. `From` void or
    /// not referenceable: false.
    pub IsConvertible<From, To> => Or<
        And<Holds<IsVoid<From>>, Holds<IsVoid<To>>>,
        And<
            Not<Or<Holds<IsArray<To>>, Or<Holds<IsFunction<To>>, Holds<IsVoid<To>>>>>,
            And<
                And<Not<Holds<IsVoid<From>>>, <From as Type>::Referenceable>,
                Initializes<From, To>,
            >,
        >,
    >;
}

// =============================================================================
// Reference binding
// =============================================================================

/// Does `declval<From>()` produce an lvalue?
pub type IsLvalue<From> =
    Or<<From as Type>::LRefShape, Holds<IsFunction<RemoveReference<From>>>>;

/// `Y` carries at least the qualifiers of `X`.
pub type CvAtLeast<Y, X> = And<
    Or<Not<<X as Type>::IsConst>, <Y as Type>::IsConst>,
    Or<Not<<X as Type>::IsVolatile>, <Y as Type>::IsVolatile>,
>;

/// `Y` is `X` or an accessible base of `X`, ignoring cv.
pub type RefRelated<Y, X> = Or<
    Holds<IsSame<RemoveCv<Y>, RemoveCv<X>>>,
    Holds<DerivesPublicly<RemoveCv<Y>, RemoveCv<X>>>,
>;

/// A `Y&` can bind directly to an `X`.
pub type RefCompatible<Y, X> = And<RefRelated<Y, X>, CvAtLeast<Y, X>>;

type BindsTemporary<X, Y, Lv> =
    And<Not<RefRelated<Y, X>>, Holds<ByValue<X, RemoveCv<Y>, Lv>>>;

type BindsLvalueRef<X, Y, Lv> = Or<
    And<Lv, RefCompatible<Y, X>>,
    And<
        And<<Y as Type>::IsConst, Not<<Y as Type>::IsVolatile>>,
        Or<RefCompatible<Y, X>, BindsTemporary<X, Y, Lv>>,
    >,
>;

// A function lvalue binds to an rvalue reference to function as well.
type BindsRvalueRef<X, Y, Lv> = Or<
    Or<And<Not<Lv>, RefCompatible<Y, X>>, BindsTemporary<X, Y, Lv>>,
    And<Holds<IsFunction<Y>>, RefCompatible<Y, X>>,
>;

type Initializes<From, To> = <<To as Type>::LRefShape as Bool>::Elif<
    BindsLvalueRef<RemoveReference<From>, RemoveReference<To>, IsLvalue<From>>,
    <<To as Type>::RRefShape as Bool>::Elif<
        BindsRvalueRef<RemoveReference<From>, RemoveReference<To>, IsLvalue<From>>,
        Holds<ByValue<RemoveReference<From>, RemoveCv<To>, IsLvalue<From>>>,
    >,
>;

// =============================================================================
// Initialization by value
// =============================================================================

/// Standard conversions from decayed `S` to unqualified scalar `U`.
pub type ScalarConversion<S, U> = Or<
    Or<ToArithmetic<S, U>, ToEnum<S, U>>,
    Or<ToNullPointer<S, U>, Or<ToPointer<S, U>, ToMemberPointer<S, U>>>,
>;

type ToArithmetic<S, U> = And<
    Holds<IsArithmetic<U>>,
    Or<
        Or<Holds<IsArithmetic<S>>, <S as Type>::UnscopedEnum>,
        And<Holds<IsSame<U, bool>>, Or<Holds<IsPointer<S>>, Holds<IsMemberPointer<S>>>>,
    >,
>;

type ToEnum<S, U> = And<Holds<IsEnum<U>>, Holds<IsSame<S, U>>>;

type ToNullPointer<S, U> = And<Holds<IsNullPointer<U>>, Holds<IsNullPointer<S>>>;

type ToPointer<S, U> = And<
    Holds<IsPointer<U>>,
    Or<
        Holds<IsNullPointer<S>>,
        And<Holds<IsPointer<S>>, PointeeConverts<RemovePointer<S>, RemovePointer<U>>>,
    >,
>;

// Qualification, `void*` and derived-to-base pointer conversions.
type PointeeConverts<Z, W> = And<
    CvAtLeast<W, Z>,
    Or<
        Or<
            Holds<IsSame<RemoveCv<Z>, RemoveCv<W>>>,
            DeeperQualification<Z, W>,
        >,
        Or<
            And<Holds<IsVoid<W>>, Not<Holds<IsFunction<Z>>>>,
            Holds<DerivesPublicly<RemoveCv<W>, RemoveCv<Z>>>,
        >,
    >,
>;

// Pointees that are themselves pointers may gain qualifiers further down
// (`int**` to `const int* const*`), but then this level must be const.
type DeeperQualification<Z, W> = And<
    <W as Type>::IsConst,
    AndThen<<RemoveCv<Z> as Type>::PointerShape, SimilarPointers<Z, W>>,
>;

/// `Z` and `W` are pointers whose pointees differ at most in qualifiers,
/// with `W`'s at least as qualified at every level.
pub struct SimilarPointers<Z, W>(PhantomData<(Z, W)>);

impl<Z: Type, W: Type> Predicate for SimilarPointers<Z, W> {
    type Out = And<
        <RemoveCv<W> as Type>::PointerShape,
        And<
            CvAtLeast<RemovePointer<W>, RemovePointer<Z>>,
            Or<
                Holds<IsSame<RemoveCv<RemovePointer<Z>>, RemoveCv<RemovePointer<W>>>>,
                DeeperQualification<RemovePointer<Z>, RemovePointer<W>>,
            >,
        >,
    >;
}

type ToMemberPointer<S, U> =
    And<Holds<IsMemberPointer<U>>, Or<Holds<IsNullPointer<S>>, Holds<IsSame<S, U>>>>;

/// Initialization of a parameter of type `P` from an argument of type `A`
/// without user-defined conversions.
pub type ArgFits<A, P> = StandardInit<Decay<A>, RemoveCvRef<P>>;

type StandardInit<S, Q> = Or<
    ScalarConversion<S, Q>,
    And<<Q as Type>::ClassOrUnion, Or<Holds<IsSame<S, Q>>, Holds<DerivesPublicly<Q, S>>>>,
>;

type Copyable<X, U, Lv> = Or<
    <MembersOf<U> as Members>::CopyCtor,
    And<And<Not<Lv>, Not<<X as Type>::IsConst>>, <MembersOf<U> as Members>::MoveCtor>,
>;

type ClassInit<X, U, Lv> = And<
    <U as Type>::ClassOrUnion,
    Or<
        And<
            Or<Holds<IsSame<RemoveCv<X>, U>>, Holds<DerivesPublicly<U, RemoveCv<X>>>>,
            Copyable<X, U, Lv>,
        >,
        Or<
            <MembersOf<U> as Members>::FromAny,
            <<MembersOf<U> as Members>::Converting as CtorList>::Accepts<HCons<X, HNil>>,
        >,
    >,
>;

/// Does a conversion operator result `C` reach `U` by a standard conversion?
pub struct Yields<U>(PhantomData<U>);

impl<U: Type> TypeTest for Yields<U> {
    type Apply<C: Type> = Or<
        Holds<IsSame<RemoveCvRef<C>, U>>,
        Or<ScalarConversion<Decay<C>, U>, Holds<DerivesPublicly<U, RemoveCvRef<C>>>>,
    >;
}

type ConversionOperator<X, U> = And<
    <X as Type>::ClassOrUnion,
    <<MembersOf<X> as Members>::Conversions as TypeList>::Any<Yields<U>>,
>;

/// Copy-initialization of unqualified, non-reference `U` from a value of
/// non-reference type `X`; `Lv` tells whether that value is an lvalue.
pub struct ByValue<X, U, Lv>(PhantomData<(X, U, Lv)>);

impl<X: Type, U: Type, Lv: Bool> Predicate for ByValue<X, U, Lv> {
    type Out = Or<
        ScalarConversion<Decay<X>, U>,
        Or<ClassInit<X, U, Lv>, ConversionOperator<X, U>>,
    >;
}
