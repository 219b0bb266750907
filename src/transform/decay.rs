//! By-value decay.
//!
//! ```text
//! Decay<LRef<Const<i32>>>         = i32
//! Decay<Array<Array<i32, D2>, D4>> = Ptr<Array<i32, D2>>
//! Decay<LRef<Func<i32, (u8,)>>>   = Ptr<Func<i32, (u8,)>>
//! ```

use crate::category::primary::IsFunction;
use crate::model::Type;
use crate::primitives::{Bool, Holds};
use crate::transform::cv::RemoveCv;
use crate::transform::extent::RemoveExtent;
use crate::transform::pointer::AddPointer;
use crate::transform::reference::RemoveReference;

/// The type a value of `T` has after being passed by value.
pub type Decay<T> = DecayReferee<RemoveReference<T>>;

type DecayReferee<U> = <<U as Type>::ArrayShape as Bool>::Pick<
    AddPointer<RemoveExtent<U>>,
    <Holds<IsFunction<U>> as Bool>::Pick<AddPointer<U>, RemoveCv<U>>,
>;
