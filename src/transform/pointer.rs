//! Pointer transformations.

use crate::model::{PointerForm, Type};
use crate::transform::reference::RemoveReference;

/// Pointee of a pointer, cv-qualified pointers included; otherwise `T`.
pub type RemovePointer<T> = <T as Type>::RemovePointer;

/// Pointer to `T`, or to its referee when `T` is a reference. Types that
/// can be neither referenced nor are void (qualified functions) come back
/// unchanged.
pub type AddPointer<T> =
    <<RemoveReference<T> as Type>::Pointee as PointerForm>::To<RemoveReference<T>>;
