//! Special members and declared conversions of class types.
//!
//! The registry stands in for the compiler's knowledge of a class: which
//! special members exist, which constructors and conversion operators are
//! declared, and whether its special members are trivial or non-throwing.
//! `#[derive(TypeShape)]` fills it from `#[shape(...)]`; every non-class type
//! uses [`Builtin`].

use crate::model::Type;
use crate::primitives::{And, Bool, False, HCons, HNil, Not, Or, True, TypeList};
use crate::relation::convertible::ArgFits;

/// What a class declares.
pub trait Members: 'static {
    type DefaultCtor: Bool;
    type CopyCtor: Bool;
    type MoveCtor: Bool;
    type CopyAssign: Bool;
    type MoveAssign: Bool;
    type Destructor: Bool;

    /// Special members are trivial.
    type Trivial: Bool;
    /// Special members and declared constructors do not throw.
    type Nothrow: Bool;

    /// A constructor template accepting any single argument.
    type FromAny: Bool;
    /// Every declared constructor, one parameter list each.
    type Ctors: CtorList;
    /// The non-explicit subset of `Ctors`.
    type Converting: CtorList;
    /// Targets of conversion operators.
    type Conversions: TypeList;
    /// Parameter types of declared assignment operators.
    type Assigns: TypeList;
}

/// Registry of every type that is not a class.
#[derive(Debug)]
pub struct Builtin;

impl Members for Builtin {
    type DefaultCtor = True;
    type CopyCtor = True;
    type MoveCtor = True;
    type CopyAssign = True;
    type MoveAssign = True;
    type Destructor = True;
    type Trivial = True;
    type Nothrow = True;
    type FromAny = False;
    type Ctors = HNil;
    type Converting = HNil;
    type Conversions = HNil;
    type Assigns = HNil;
}

/// Shorthand for the registry of a modeled type.
pub type MembersOf<T> = <T as Type>::Members;

// =============================================================================
// Constructor lists
// =============================================================================

/// A parameter list, matched against an argument list.
pub trait ParamList: 'static {
    /// Same length, and every argument initializes its parameter.
    type Accepts<Args: TypeList>: Bool;
}

impl ParamList for HNil {
    type Accepts<Args: TypeList> = Args::IsEmpty;
}

impl<P: Type, Rest: ParamList> ParamList for HCons<P, Rest> {
    type Accepts<Args: TypeList> = And<
        Not<Args::IsEmpty>,
        And<ArgFits<Args::Head, P>, Rest::Accepts<Args::Tail>>,
    >;
}

/// A list of constructors, each a [`ParamList`].
pub trait CtorList: 'static {
    /// Does any constructor accept `Args`?
    type Accepts<Args: TypeList>: Bool;
}

impl CtorList for HNil {
    type Accepts<Args: TypeList> = False;
}

impl<P: ParamList, T: CtorList> CtorList for HCons<P, T> {
    type Accepts<Args: TypeList> = Or<P::Accepts<Args>, T::Accepts<Args>>;
}
