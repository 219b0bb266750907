//! Compile-time constant wrappers.
//!
//! `BoolConstant<V>`, `I32Constant<V>`, ... carry a single value of one scalar
//! type in the type itself. Two wrappers are the same type exactly when the
//! value type and the value agree. Every wrapper offers three reads of the
//! same number: the associated `VALUE`, the call-like [`get`](BoolConstant::get),
//! and an implicit `From` conversion into the value type.

/// A type carrying one compile-time value.
pub trait Constant: 'static {
    type Value: Copy + 'static;
    const VALUE: Self::Value;
}

macro_rules! integral_constant {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name<const V: $ty>;

            impl<const V: $ty> $name<V> {
                pub const VALUE: $ty = V;

                /// Read the carried value.
                #[inline(always)]
                pub const fn get(self) -> $ty {
                    V
                }
            }

            impl<const V: $ty> Constant for $name<V> {
                type Value = $ty;
                const VALUE: $ty = V;
            }

            impl<const V: $ty> From<$name<V>> for $ty {
                #[inline(always)]
                fn from(_: $name<V>) -> $ty {
                    V
                }
            }
        )*
    };
}

integral_constant! {
    /// Boolean constant; `True` and `False` are its two instantiations.
    BoolConstant => bool,
    CharConstant => char,
    I8Constant => i8,
    I16Constant => i16,
    I32Constant => i32,
    I64Constant => i64,
    I128Constant => i128,
    IsizeConstant => isize,
    U8Constant => u8,
    U16Constant => u16,
    U32Constant => u32,
    U64Constant => u64,
    U128Constant => u128,
    UsizeConstant => usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_reads_agree() {
        let two = I32Constant::<2>;
        let as_int: i32 = two.into();
        assert_eq!(I32Constant::<2>::VALUE, 2);
        assert_eq!(two.get(), 2);
        assert_eq!(as_int, 2);
        assert_eq!(<I32Constant<2> as Constant>::VALUE, 2);
    }

    #[test]
    fn wrappers_are_values() {
        assert_eq!(UsizeConstant::<4>, UsizeConstant::<4>::default());
        assert!(bool::from(BoolConstant::<true>));
    }
}
