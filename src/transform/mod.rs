//! # Layer 2: Transformations
//!
//! Type aliases mapping a modeled type to another.
//!
//! - `cv.rs`: Add / remove top-level const and volatile.
//! - `reference.rs`: Add / remove references, with collapsing.
//! - `pointer.rs`: Add / remove pointers.
//! - `extent.rs`: Remove array dimensions.
//! - `decay.rs`: By-value decay.
//! - `common.rs`: Common type of a list of types.

pub mod common;
pub mod cv;
pub mod decay;
pub mod extent;
pub mod pointer;
pub mod reference;

pub use common::{has_common_type, CommonType, CommonTypeOf, HasCommonType};
pub use cv::{AddConst, AddCv, AddVolatile, RemoveConst, RemoveCv, RemoveVolatile};
pub use decay::Decay;
pub use extent::{RemoveAllExtents, RemoveExtent};
pub use pointer::{AddPointer, RemovePointer};
pub use reference::{AddLvalueReference, AddRvalueReference, RemoveCvRef, RemoveReference};
