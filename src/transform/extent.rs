//! Array extent transformations.

use crate::model::Type;

/// Drop the first (leftmost) dimension: `Array<Array<i32, D3>, D2>` becomes
/// `Array<i32, D3>`. Non-arrays are unchanged.
pub type RemoveExtent<T> = <T as Type>::RemoveExtent;

/// Drop every dimension.
pub type RemoveAllExtents<T> = <T as Type>::RemoveAllExtents;
