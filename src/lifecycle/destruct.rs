//! Destructibility.

use crate::category::composite::{IsObject, IsReference};
use crate::model::{Members, MembersOf, Type};
use crate::primitives::{And, Holds, Not, Or};
use crate::syntax_macros::predicate;
use crate::transform::extent::RemoveAllExtents;

type ElementMembers<T> = MembersOf<RemoveAllExtents<T>>;

predicate! {
    /// References: always. `void`, functions and arrays of unknown bound:
    /// never. Other objects: when the element type has a destructor.
    pub IsDestructible<T> => Or<
        Holds<IsReference<T>>,
        And<
            And<Holds<IsObject<T>>, Not<<T as Type>::UnboundedShape>>,
            <ElementMembers<T> as Members>::Destructor,
        >,
    >;

    pub IsTriviallyDestructible<T> => And<
        Holds<IsDestructible<T>>,
        <ElementMembers<T> as Members>::Trivial,
    >;

    pub IsNothrowDestructible<T> => And<
        Holds<IsDestructible<T>>,
        <ElementMembers<T> as Members>::Nothrow,
    >;
}
