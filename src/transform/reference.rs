//! Reference transformations with reference collapsing.
//!
//! ```text
//! AddLvalueReference<RRef<T>> = LRef<T>     (&& + &  -> &)
//! AddRvalueReference<LRef<T>> = LRef<T>     (&  + && -> &)
//! AddRvalueReference<RRef<T>> = RRef<T>     (&& + && -> &&)
//! AddLvalueReference<Void>    = Void        (not referenceable)
//! ```

use crate::model::{ReferenceForm, Type};
use crate::primitives::Bool;
use crate::transform::cv::RemoveCv;

pub type RemoveReference<T> = <T as Type>::RemoveReference;

/// `U&` for the referee `U` of `T`, or `T` when no reference to it exists.
pub type AddLvalueReference<T> = <<RemoveReference<T> as Type>::Referent as ReferenceForm>::Lvalue<
    RemoveReference<T>,
>;

pub type AddRvalueReference<T> = <<T as Type>::LRefShape as Bool>::Pick<
    T,
    <<RemoveReference<T> as Type>::Referent as ReferenceForm>::Rvalue<RemoveReference<T>>,
>;

/// Strip a reference, then top-level cv.
pub type RemoveCvRef<T> = RemoveCv<RemoveReference<T>>;
