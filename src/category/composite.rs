//! Composite type categories, each a combination of primary ones.

use crate::category::primary::{
    IsArray, IsClassOrUnion, IsEnum, IsFloatingPoint, IsIntegral, IsLvalueReference,
    IsMemberFunctionPointer, IsMemberObjectPointer, IsNullPointer, IsPointer, IsRvalueReference,
    IsVoid,
};
use crate::primitives::{Holds, Not, Or};
use crate::syntax_macros::predicate;

predicate! {
    pub IsArithmetic<T> => Or<Holds<IsIntegral<T>>, Holds<IsFloatingPoint<T>>>;

    pub IsFundamental<T> => Or<
        Holds<IsArithmetic<T>>,
        Or<Holds<IsVoid<T>>, Holds<IsNullPointer<T>>>,
    >;

    pub IsReference<T> => Or<Holds<IsLvalueReference<T>>, Holds<IsRvalueReference<T>>>;

    pub IsMemberPointer<T> => Or<
        Holds<IsMemberObjectPointer<T>>,
        Holds<IsMemberFunctionPointer<T>>,
    >;

    pub IsScalar<T> => Or<
        Or<Holds<IsArithmetic<T>>, Holds<IsEnum<T>>>,
        Or<
            Or<Holds<IsPointer<T>>, Holds<IsMemberPointer<T>>>,
            Holds<IsNullPointer<T>>,
        >,
    >;

    /// Anything but functions, references and void.
    pub IsObject<T> => Or<
        Or<Holds<IsScalar<T>>, Holds<IsArray<T>>>,
        Holds<IsClassOrUnion<T>>,
    >;

    pub IsCompound<T> => Not<Holds<IsFundamental<T>>>;
}
