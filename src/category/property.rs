//! Type properties.

use core::marker::PhantomData;

use crate::category::primary::IsEnum;
use crate::model::{Type, MAX_RANK};
use crate::primitives::{And, Constant, Holds, Not};
use crate::syntax_macros::predicate;

predicate! {
    /// Top-level `const`; an array is const when its element is.
    pub IsConst<T> => <T as Type>::IsConst;

    /// Top-level `volatile`; an array is volatile when its element is.
    pub IsVolatile<T> => <T as Type>::IsVolatile;

    /// Can `T&` be formed? False for `void` and qualified functions.
    pub IsReferenceable<T> => <T as Type>::Referenceable;

    pub IsBoundedArray<T> => And<<T as Type>::ArrayShape, Not<<T as Type>::UnboundedShape>>;

    pub IsUnboundedArray<T> => <T as Type>::UnboundedShape;

    /// Enumeration whose enumerators convert implicitly to integers.
    pub IsUnscopedEnum<T> => And<Holds<IsEnum<T>>, <T as Type>::UnscopedEnum>;

    pub IsScopedEnum<T> => And<Holds<IsEnum<T>>, Not<<T as Type>::UnscopedEnum>>;
}

/// Number of array dimensions.
pub struct Rank<T>(PhantomData<T>);

impl<T: Type> Constant for Rank<T> {
    type Value = usize;
    const VALUE: usize = T::RANK;
}

/// Extent of dimension `I`; `0` for non-arrays, unknown bounds and
/// dimensions past the rank.
pub struct Extent<T, const I: usize = 0>(PhantomData<T>);

impl<T: Type, const I: usize> Constant for Extent<T, I> {
    type Value = usize;
    const VALUE: usize = extent::<T>(I);
}

/// Alignment requirement in bytes; `0` for `void` and functions.
pub struct AlignmentOf<T>(PhantomData<T>);

impl<T: Type> Constant for AlignmentOf<T> {
    type Value = usize;
    const VALUE: usize = T::ALIGN;
}

/// `const` form of [`Rank`].
#[inline(always)]
pub const fn rank<T: Type>() -> usize {
    T::RANK
}

/// `const` form of [`Extent`].
#[inline(always)]
pub const fn extent<T: Type>(dim: usize) -> usize {
    if dim < MAX_RANK && dim < T::RANK { T::EXTENTS[dim] } else { 0 }
}

/// `const` form of [`AlignmentOf`].
#[inline(always)]
pub const fn alignment_of<T: Type>() -> usize {
    T::ALIGN
}
