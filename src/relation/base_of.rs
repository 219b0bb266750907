//! Inheritance.
//!
//! Bases are declared with `#[shape(bases(..))]` and walked transitively.
//! Access is recorded per edge: [`IsBaseOf`] follows every edge (private,
//! protected and repeated bases included), while conversions only follow
//! public ones through [`DerivesPublicly`].

use core::marker::PhantomData;

use crate::category::primary::IsClass;
use crate::model::Type;
use crate::primitives::{And, Holds, Or, TypeList, TypeTest};
use crate::relation::same::IsSame;
use crate::syntax_macros::predicate;
use crate::transform::cv::RemoveCv;

/// Does a declared base (or one of its bases) equal `B`?
pub struct Reaches<B>(PhantomData<B>);

impl<B: Type> TypeTest for Reaches<B> {
    type Apply<H: Type> = Or<Holds<IsSame<H, B>>, <<H as Type>::Bases as TypeList>::Any<Reaches<B>>>;
}

/// [`Reaches`] restricted to public edges.
pub struct ReachesPublicly<B>(PhantomData<B>);

impl<B: Type> TypeTest for ReachesPublicly<B> {
    type Apply<H: Type> =
        Or<Holds<IsSame<H, B>>, <<H as Type>::PublicBases as TypeList>::Any<ReachesPublicly<B>>>;
}

predicate! {
    /// Is `Base` a base class of `Derived`, or the same class?
    ///
    /// False whenever either side is not a class (unions included).
    pub IsBaseOf<Base, Derived> => And<
        And<Holds<IsClass<Base>>, Holds<IsClass<Derived>>>,
        Or<
            Holds<IsSame<RemoveCv<Base>, RemoveCv<Derived>>>,
            <<Derived as Type>::Bases as TypeList>::Any<Reaches<RemoveCv<Base>>>,
        >,
    >;

    /// Is `Base` a proper base of `Derived` reachable through public edges only?
    pub DerivesPublicly<Base, Derived> => And<
        And<Holds<IsClass<Base>>, Holds<IsClass<Derived>>>,
        <<Derived as Type>::PublicBases as TypeList>::Any<ReachesPublicly<RemoveCv<Base>>>,
    >;
}
