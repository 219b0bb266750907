//! Type identity and membership.

use core::marker::PhantomData;

use crate::model::Type;
use crate::primitives::{IdentityEq, IntoList, Predicate, TypeList};
use crate::syntax_macros::predicate;

predicate! {
    /// Are `A` and `B` exactly the same type, cv and reference-ness included?
    pub IsSame<A, B> => IdentityEq<<A as Type>::Identity, <B as Type>::Identity>;
}

/// Is `T` the same as any type of the tuple `List`?
///
/// `IsAnyOf<T, ()>` is false.
pub struct IsAnyOf<T, List>(PhantomData<(T, List)>);

impl<T: Type, List: IntoList> Predicate for IsAnyOf<T, List>
where
    List::List: TypeList,
{
    type Out = <List::List as TypeList>::Contains<T>;
}

/// `const` form of [`IsAnyOf`].
#[inline(always)]
pub const fn is_any_of<T: Type, List: IntoList>() -> bool
where
    List::List: TypeList,
{
    <IsAnyOf<T, List> as Predicate>::VALUE
}
