//! Declaration macros for predicates.
//!
//! Every trait with a boolean answer is declared the same way: a zero-sized
//! struct implementing [`Predicate`](crate::Predicate) plus a same-named
//! snake-case `const fn` reading its value.

// =============================================================================
// predicate! - struct + Predicate impl + const fn
// =============================================================================

/// Declare a predicate over modeled types.
///
/// # Example
///
/// ```ignore
/// predicate! {
///     /// Is `T` a pointer?
///     pub IsPointer<T> => <RemoveCv<T> as Type>::PointerShape;
/// }
///
/// // Expands to:
/// pub struct IsPointer<T>(PhantomData<(T,)>);
/// impl<T: Type> Predicate for IsPointer<T> { type Out = ...; }
/// pub const fn is_pointer<T: Type>() -> bool { ... }
/// ```
macro_rules! predicate {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident<$($param:ident),+> => $out:ty;
    )*) => {
        $(
            $(#[$meta])*
            $vis struct $name<$($param),+>(::core::marker::PhantomData<($($param,)+)>);

            impl<$($param: $crate::model::Type),+> $crate::primitives::Predicate for $name<$($param),+> {
                type Out = $out;
            }

            $crate::paste::paste! {
                #[doc = concat!("`const` form of [`", stringify!($name), "`].")]
                #[inline(always)]
                $vis const fn [<$name:snake>]<$($param: $crate::model::Type),+>() -> bool {
                    <$name<$($param),+> as $crate::primitives::Predicate>::VALUE
                }
            }
        )*
    };
}

pub(crate) use predicate;
