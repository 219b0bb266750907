//! Common type.
//!
//! The common type of two types is the type of a conditional expression
//! `b ? x : y` with operands of the two decayed types, decayed again. The
//! operand rules are tried in order, the first that applies wins:
//!
//! ```text
//! same type                       -> that type
//! arithmetic / unscoped enums     -> usual arithmetic conversions
//! null pointer + (member) pointer -> the pointer
//! two pointers                    -> composite pointer type (merged cv,
//!                                    void*, base of the other)
//! class involved                  -> the side the other converts to,
//!                                    when conversion goes one way only
//! otherwise                       -> no common type
//! ```
//!
//! More than two types fold from the left; an absent result anywhere makes
//! the whole result absent.

use core::marker::PhantomData;

use crate::category::composite::{IsArithmetic, IsMemberPointer};
use crate::category::primary::{IsFunction, IsNullPointer, IsPointer, IsVoid};
use crate::category::property::IsUnscopedEnum;
use crate::model::{Type, UsualArithmetic, Void};
use crate::primitives::{
    And, Bool, HCons, HNil, Holds, IntoList, Just, Maybe, MaybeFn, Not, Nothing, Or, Predicate,
    Resolve,
};
use crate::relation::base_of::DerivesPublicly;
use crate::relation::convertible::IsConvertible;
use crate::relation::same::IsSame;
use crate::transform::cv::{AddConst, AddVolatile, RemoveCv};
use crate::transform::decay::Decay;
use crate::transform::pointer::{AddPointer, RemovePointer};

type Else<First, Second> = <First as Maybe>::OrElse<Second>;

type When<C, T> = <C as Bool>::PickMaybe<Just<T>, Nothing>;

// =============================================================================
// Operand rules (decayed operands)
// =============================================================================

type ArithLike<D> = Or<Holds<IsArithmetic<D>>, Holds<IsUnscopedEnum<D>>>;

type PtrLike<D> = Or<Holds<IsPointer<D>>, Holds<IsMemberPointer<D>>>;

type SameRule<D1, D2> = When<Holds<IsSame<D1, D2>>, D1>;

type ArithmeticRule<D1, D2> = When<
    And<ArithLike<D1>, ArithLike<D2>>,
    UsualArithmetic<<D1 as Type>::Arith, <D2 as Type>::Arith>,
>;

type NullRule<D1, D2> = Else<
    When<And<Holds<IsNullPointer<D1>>, PtrLike<D2>>, D2>,
    When<And<PtrLike<D1>, Holds<IsNullPointer<D2>>>, D1>,
>;

/// `Base` with the union of the qualifiers of `Z` and `W`.
type MergeCv<Base, Z, W> = <Or<<Z as Type>::IsConst, <W as Type>::IsConst> as Bool>::Pick<
    AddConst<MergeVolatile<Base, Z, W>>,
    MergeVolatile<Base, Z, W>,
>;

type MergeVolatile<Base, Z, W> = <Or<<Z as Type>::IsVolatile, <W as Type>::IsVolatile> as Bool>::Pick<
    AddVolatile<Base>,
    Base,
>;

/// Pointer to `Base` carrying the qualifiers of both pointees.
type MergedPtr<Base, Z, W> = AddPointer<MergeCv<Base, Z, W>>;

type CompositePointee<Z, W> = Else<
    Else<
        When<Holds<IsSame<RemoveCv<Z>, RemoveCv<W>>>, MergedPtr<RemoveCv<Z>, Z, W>>,
        Else<
            When<And<Holds<IsVoid<Z>>, Not<Holds<IsFunction<W>>>>, MergedPtr<Void, Z, W>>,
            When<And<Holds<IsVoid<W>>, Not<Holds<IsFunction<Z>>>>, MergedPtr<Void, Z, W>>,
        >,
    >,
    Else<
        When<Holds<DerivesPublicly<RemoveCv<Z>, RemoveCv<W>>>, MergedPtr<RemoveCv<Z>, Z, W>>,
        When<Holds<DerivesPublicly<RemoveCv<W>, RemoveCv<Z>>>, MergedPtr<RemoveCv<W>, Z, W>>,
    >,
>;

type PointerRule<D1, D2> = <And<Holds<IsPointer<D1>>, Holds<IsPointer<D2>>> as Bool>::PickMaybe<
    CompositePointee<RemovePointer<D1>, RemovePointer<D2>>,
    Nothing,
>;

type ClassRule<D1, D2> = <Or<<D1 as Type>::ClassOrUnion, <D2 as Type>::ClassOrUnion> as Bool>::PickMaybe<
    Else<
        When<And<Holds<IsConvertible<D2, D1>>, Not<Holds<IsConvertible<D1, D2>>>>, D1>,
        When<And<Holds<IsConvertible<D1, D2>>, Not<Holds<IsConvertible<D2, D1>>>>, D2>,
    >,
    Nothing,
>;

type ConditionalOf<D1, D2> = Else<
    Else<SameRule<D1, D2>, ArithmeticRule<D1, D2>>,
    Else<NullRule<D1, D2>, Else<PointerRule<D1, D2>, ClassRule<D1, D2>>>,
>;

/// Common type of exactly two types, if any.
pub type CommonPair<A, B> = ConditionalOf<Decay<A>, Decay<B>>;

// =============================================================================
// Folding over lists
// =============================================================================

/// `CommonPair<_, N>` as a [`MaybeFn`].
pub struct CommonWith<N>(PhantomData<N>);

impl<N: Type> MaybeFn for CommonWith<N> {
    type Apply<T: Type> = CommonPair<T, N>;
}

/// Left fold of the remaining elements into an accumulated result.
pub trait FoldRest: 'static {
    type Fold<Acc: Maybe>: Maybe;
}

impl FoldRest for HNil {
    type Fold<Acc: Maybe> = Acc;
}

impl<H: Type, T: FoldRest> FoldRest for HCons<H, T> {
    type Fold<Acc: Maybe> = T::Fold<Acc::Bind<CommonWith<H>>>;
}

/// Common type of a whole list.
pub trait CommonFold: 'static {
    type Out: Maybe;
}

impl CommonFold for HNil {
    type Out = Nothing;
}

impl<T: Type> CommonFold for HCons<T, HNil> {
    type Out = CommonPair<T, T>;
}

impl<A: Type, B: Type, T: FoldRest> CommonFold for HCons<A, HCons<B, T>> {
    type Out = T::Fold<CommonPair<A, B>>;
}

/// Common type of a tuple of types, as an optional result.
pub trait CommonTypeOf {
    type Out: Maybe;
}

impl<Tuple: IntoList> CommonTypeOf for Tuple
where
    Tuple::List: CommonFold,
{
    type Out = <Tuple::List as CommonFold>::Out;
}

/// The common type of the tuple's types. Naming it when there is none is a
/// compile error; probe with [`HasCommonType`] first.
pub type CommonType<Tuple> = <<Tuple as CommonTypeOf>::Out as Resolve>::Out;

/// Do the tuple's types have a common type?
pub struct HasCommonType<Tuple>(PhantomData<Tuple>);

impl<Tuple: CommonTypeOf> Predicate for HasCommonType<Tuple> {
    type Out = <Tuple::Out as Maybe>::IsJust;
}

/// `const` form of [`HasCommonType`].
#[inline(always)]
pub const fn has_common_type<Tuple: CommonTypeOf>() -> bool {
    <HasCommonType<Tuple> as Predicate>::VALUE
}
