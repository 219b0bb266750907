//! # Layer 1: Type Model
//!
//! Modeled types and the schema they implement.
//!
//! ```text
//! Leaves        Void, NullPtr, bool, char, i8..i128, isize, u8..u128, usize, f32, f64,
//!               #[derive(TypeShape)] classes / unions / enums
//! cv            Const<T>, Volatile<T>, ConstVolatile<T>        (T: Unqualified)
//! Compound      Ptr<T>, LRef<T>, RRef<T>, Array<T, N>, Unbounded<T>, MemPtr<M, C>
//! Functions     Func<R, (A..)>, QualFn<R, (A..), Q>
//! ```
//!
//! - `ty.rs`: The `Type` schema trait.
//! - `builtin.rs`: Leaves and the leaf impl macro shared with the derive.
//! - `qualified.rs`, `compound.rs`, `function.rs`: One impl per shape.
//! - `arith.rs`: Arithmetic conversion profiles.
//! - `members.rs`: Special members of classes.

pub mod arith;
pub mod builtin;
pub mod compound;
pub mod function;
pub mod members;
pub mod qualified;
pub mod ty;

pub use arith::{Arithmetic, NotArithmetic, UsualArithmetic};
pub use builtin::{NullPtr, Void};
pub use compound::{Array, LRef, MemPtr, PointerForm, Ptr, RRef, ReferenceForm, Unbounded};
pub use function::{
    FnConst, FnConstLRef, FnConstRRef, FnConstVolatile, FnLRef, FnQualifier, FnRRef, FnVolatile,
    Func, Params, QualFn,
};
pub use members::{Builtin, CtorList, Members, MembersOf, ParamList};
pub use qualified::{Const, ConstVolatile, Volatile};
pub use ty::{Type, Unqualified, MAX_RANK};
