//! Primary type categories.
//!
//! Every modeled type falls in exactly one of the fourteen categories below.
//! Each predicate is computed on its own; `IsEnum` is the residual category
//! and is true exactly when all the others are false.

use crate::category::composite::IsReference;
use crate::model::{NullPtr, Type, Void};
use crate::primitives::{And, Holds, Not, Or};
use crate::relation::same::{IsAnyOf, IsSame};
use crate::syntax_macros::predicate;
use crate::transform::cv::{AddConst, RemoveCv};

predicate! {
    /// `void`, with any cv-qualification.
    pub IsVoid<T> => Holds<IsSame<RemoveCv<T>, Void>>;

    /// The null pointer type, with any cv-qualification.
    pub IsNullPointer<T> => Holds<IsSame<RemoveCv<T>, NullPtr>>;

    /// `bool`, `char` or an integer type, with any cv-qualification.
    pub IsIntegral<T> => Holds<IsAnyOf<
        RemoveCv<T>,
        (bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize),
    >>;

    /// `f32` or `f64`, with any cv-qualification.
    pub IsFloatingPoint<T> => Holds<IsAnyOf<RemoveCv<T>, (f32, f64)>>;

    /// Bounded or unbounded array.
    pub IsArray<T> => <T as Type>::ArrayShape;

    pub IsUnion<T> => <T as Type>::UnionShape;

    /// Class or union: the registry answer to "can `T` have members".
    pub IsClassOrUnion<T> => <T as Type>::ClassOrUnion;

    /// A class that is not a union.
    pub IsClass<T> => And<<T as Type>::ClassOrUnion, Not<<T as Type>::UnionShape>>;

    /// Object or function pointer, with any cv-qualification of the pointer.
    pub IsPointer<T> => <RemoveCv<T> as Type>::PointerShape;

    pub IsLvalueReference<T> => <T as Type>::LRefShape;

    pub IsRvalueReference<T> => <T as Type>::RRefShape;

    /// Only functions and references stay non-const when `const` is added,
    /// so a function is a type that does so and is not a reference.
    pub IsFunction<T> => And<
        Not<<AddConst<T> as Type>::IsConst>,
        Not<Or<<T as Type>::LRefShape, <T as Type>::RRefShape>>,
    >;

    /// Member pointer whose member type is a function.
    pub IsMemberFunctionPointer<T> => And<
        <RemoveCv<T> as Type>::MemberPointerShape,
        Holds<IsFunction<<RemoveCv<T> as Type>::MemberType>>,
    >;

    /// Member pointer whose member type is not a function.
    pub IsMemberObjectPointer<T> => And<
        <RemoveCv<T> as Type>::MemberPointerShape,
        Not<Holds<IsFunction<<RemoveCv<T> as Type>::MemberType>>>,
    >;

    /// Whatever is none of the other primary categories.
    pub IsEnum<T> => Not<Or<
        Or<
            Or<Holds<IsVoid<T>>, Holds<IsNullPointer<T>>>,
            Or<Holds<IsIntegral<T>>, Holds<IsFloatingPoint<T>>>,
        >,
        Or<
            Or<Holds<IsArray<T>>, <T as Type>::ClassOrUnion>,
            Or<
                Or<Holds<IsPointer<T>>, Holds<IsReference<T>>>,
                Or<Holds<IsFunction<T>>, <RemoveCv<T> as Type>::MemberPointerShape>,
            >,
        >,
    >>;
}
