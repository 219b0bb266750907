//! The schema every modeled type implements.

use crate::model::arith::Arithmetic;
use crate::model::compound::{PointerForm, ReferenceForm};
use crate::model::members::Members;
use crate::primitives::{Bool, Identity, TypeList};

/// Number of array dimensions recorded in [`Type::EXTENTS`].
pub const MAX_RANK: usize = 8;

/// A modeled type.
///
/// Each shape (leaf, cv-wrapper, pointer, reference, array, function, member
/// pointer, user class) has exactly one impl of this trait, and that impl is
/// the "specialization" answering every structural question for the shape.
/// Inapplicable questions still get an answer (`Void`, `False`, `0`) so that
/// every derived rule is total over modeled types.
pub trait Type: 'static {
    /// Structural spelling, used for type equality.
    type Identity: Identity;

    // --- shape probes -------------------------------------------------------

    /// Bounded or unbounded array.
    type ArrayShape: Bool;
    /// Array of unknown bound.
    type UnboundedShape: Bool;
    /// Object or function pointer, not cv-qualified.
    type PointerShape: Bool;
    type LRefShape: Bool;
    type RRefShape: Bool;
    /// Member pointer, not cv-qualified.
    type MemberPointerShape: Bool;
    /// Class or union, possibly cv-qualified.
    type ClassOrUnion: Bool;
    type UnionShape: Bool;
    /// Enumeration whose enumerators convert implicitly to integers.
    type UnscopedEnum: Bool;
    /// Can a reference to this type be formed.
    type Referenceable: Bool;
    /// Can be the referee of `LRef`/`RRef`: an object or function type, not
    /// a reference.
    type Referent: ReferenceForm;
    /// Can be the pointee of `Ptr`: a referent or `void`.
    type Pointee: PointerForm;
    /// Can be the element of an array: a complete object type.
    type CompleteObject: Bool;

    // --- cv -----------------------------------------------------------------

    type IsConst: Bool;
    type IsVolatile: Bool;
    type RemoveConst: Type<CompleteObject = Self::CompleteObject>;
    type RemoveVolatile: Type<CompleteObject = Self::CompleteObject>;
    type AddConst: Type<CompleteObject = Self::CompleteObject>;
    type AddVolatile: Type<CompleteObject = Self::CompleteObject>;

    // --- structure ----------------------------------------------------------

    type RemoveReference: Type;
    /// Pointee of a (possibly cv-qualified) pointer, otherwise `Self`.
    type RemovePointer: Type;
    type RemoveExtent: Type;
    type RemoveAllExtents: Type;
    /// Member type of a member pointer, otherwise `Void`.
    type MemberType: Type;
    /// Class of a member pointer, otherwise `Void`.
    type MemberClass: Type;

    // --- registry -----------------------------------------------------------

    /// Direct bases, whatever their access.
    type Bases: TypeList;
    /// Direct public bases.
    type PublicBases: TypeList;
    /// Special members and declared conversions.
    type Members: Members;
    /// Arithmetic conversion profile.
    type Arith: Arithmetic;

    const RANK: usize;
    const EXTENTS: [usize; MAX_RANK];
    /// Alignment in bytes; `0` where alignment is not defined (void, functions).
    const ALIGN: usize;
}

/// A type that may carry cv-qualifiers directly: leaves, pointers and member
/// pointers. Arrays, functions and references never wrap in `Const`.
pub trait Unqualified: Type {}
