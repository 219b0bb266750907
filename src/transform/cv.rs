//! Top-level cv-qualifier transformations.
//!
//! Qualifiers are only ever added or removed at the top level: the pointee
//! of a pointer and the referee of a reference are untouched.
//!
//! ```text
//! RemoveCv<ConstVolatile<i32>>   = i32
//! RemoveCv<Ptr<Const<i32>>>      = Ptr<Const<i32>>
//! RemoveConst<Array<Const<i32>, D3>> = Array<i32, D3>
//! AddConst<LRef<i32>>            = LRef<i32>
//! ```

use crate::model::Type;

pub type RemoveConst<T> = <T as Type>::RemoveConst;

pub type RemoveVolatile<T> = <T as Type>::RemoveVolatile;

pub type RemoveCv<T> = RemoveConst<RemoveVolatile<T>>;

pub type AddConst<T> = <T as Type>::AddConst;

pub type AddVolatile<T> = <T as Type>::AddVolatile;

pub type AddCv<T> = AddConst<AddVolatile<T>>;
