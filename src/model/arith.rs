//! Arithmetic conversion profiles.
//!
//! Every modeled type names an [`Arithmetic`] profile: the arithmetic leaves
//! are their own profile, unscoped enumerations borrow the profile of their
//! underlying type, and everything else is [`NotArithmetic`].
//!
//! The usual arithmetic conversions are computed from the profile bits alone,
//! so the rule is one generic type alias instead of a table of pairs:
//!
//! ```text
//! either f64?  -> f64
//! either f32?  -> f32
//! promote both (bool, i8, u8, i16, u16 -> i32; char -> u32)
//! same sign    -> higher rank
//! mixed sign   -> unsigned if its rank is not lower,
//!                 else signed if strictly wider,
//!                 else unsigned counterpart of the signed one
//! ```
//!
//! Integer ranks after promotion: `i32/u32` < `isize/usize` < `i64/u64` <
//! `i128/u128`, with `isize` playing the role of `long` on an LP64 target.

use crate::model::{Type, Void};
use crate::primitives::{And, Bool, False, Iff, Not, Or, True};

/// Conversion profile of an arithmetic type.
pub trait Arithmetic: 'static {
    /// The modeled type this profile describes (`Void` for [`NotArithmetic`]).
    type Ty: Type;
    type IsFloat: Bool;
    type IsDouble: Bool;
    type Signed: Bool;
    /// Integer conversion rank after promotion, two bits.
    type RankHi: Bool;
    type RankLo: Bool;
    /// Bit width after promotion: 32 = 00, 64 = 01, 128 = 10.
    type WideHi: Bool;
    type WideLo: Bool;
    /// Result of integral promotion.
    type Promoted: Arithmetic;
    /// Unsigned counterpart of a promoted integer.
    type Unsigned: Arithmetic;
}

/// Profile of every non-arithmetic type.
#[derive(Debug)]
pub struct NotArithmetic;

impl Arithmetic for NotArithmetic {
    type Ty = Void;
    type IsFloat = False;
    type IsDouble = False;
    type Signed = False;
    type RankHi = False;
    type RankLo = False;
    type WideHi = False;
    type WideLo = False;
    type Promoted = NotArithmetic;
    type Unsigned = NotArithmetic;
}

macro_rules! arithmetic {
    ($(
        $ty:ty => float: $f:ident, double: $d:ident, signed: $s:ident,
                  rank: [$rh:ident, $rl:ident], width: [$wh:ident, $wl:ident],
                  promoted: $p:ty, unsigned: $u:ty;
    )*) => {
        $(
            impl Arithmetic for $ty {
                type Ty = $ty;
                type IsFloat = $f;
                type IsDouble = $d;
                type Signed = $s;
                type RankHi = $rh;
                type RankLo = $rl;
                type WideHi = $wh;
                type WideLo = $wl;
                type Promoted = $p;
                type Unsigned = $u;
            }
        )*
    };
}

// Types below `i32` only ever appear through `Promoted`, so their rank and
// width bits are never read.
arithmetic! {
    bool  => float: False, double: False, signed: False, rank: [False, False], width: [False, False], promoted: i32, unsigned: bool;
    i8    => float: False, double: False, signed: True,  rank: [False, False], width: [False, False], promoted: i32, unsigned: u8;
    u8    => float: False, double: False, signed: False, rank: [False, False], width: [False, False], promoted: i32, unsigned: u8;
    i16   => float: False, double: False, signed: True,  rank: [False, False], width: [False, False], promoted: i32, unsigned: u16;
    u16   => float: False, double: False, signed: False, rank: [False, False], width: [False, False], promoted: i32, unsigned: u16;
    char  => float: False, double: False, signed: False, rank: [False, False], width: [False, False], promoted: u32, unsigned: u32;
    i32   => float: False, double: False, signed: True,  rank: [False, False], width: [False, False], promoted: i32, unsigned: u32;
    u32   => float: False, double: False, signed: False, rank: [False, False], width: [False, False], promoted: u32, unsigned: u32;
    isize => float: False, double: False, signed: True,  rank: [False, True],  width: [False, True],  promoted: isize, unsigned: usize;
    usize => float: False, double: False, signed: False, rank: [False, True],  width: [False, True],  promoted: usize, unsigned: usize;
    i64   => float: False, double: False, signed: True,  rank: [True, False],  width: [False, True],  promoted: i64, unsigned: u64;
    u64   => float: False, double: False, signed: False, rank: [True, False],  width: [False, True],  promoted: u64, unsigned: u64;
    i128  => float: False, double: False, signed: True,  rank: [True, True],   width: [True, False],  promoted: i128, unsigned: u128;
    u128  => float: False, double: False, signed: False, rank: [True, True],   width: [True, False],  promoted: u128, unsigned: u128;
    f32   => float: True,  double: False, signed: True,  rank: [False, False], width: [False, False], promoted: f32, unsigned: f32;
    f64   => float: True,  double: True,  signed: True,  rank: [False, False], width: [False, False], promoted: f64, unsigned: f64;
}

/// `rank(P) >= rank(Q)` for promoted integers.
pub type RankAtLeast<P, Q> = Or<
    And<<P as Arithmetic>::RankHi, Not<<Q as Arithmetic>::RankHi>>,
    And<
        Iff<<P as Arithmetic>::RankHi, <Q as Arithmetic>::RankHi>,
        Or<<P as Arithmetic>::RankLo, Not<<Q as Arithmetic>::RankLo>>,
    >,
>;

/// `width(P) > width(Q)` for promoted integers.
pub type WiderThan<P, Q> = Or<
    And<<P as Arithmetic>::WideHi, Not<<Q as Arithmetic>::WideHi>>,
    And<
        Iff<<P as Arithmetic>::WideHi, <Q as Arithmetic>::WideHi>,
        And<<P as Arithmetic>::WideLo, Not<<Q as Arithmetic>::WideLo>>,
    >,
>;

/// Result of mixing unsigned `U` with signed `S`, both promoted.
pub type MixedSign<U, S> = <RankAtLeast<U, S> as Bool>::Pick<
    <U as Arithmetic>::Ty,
    <WiderThan<S, U> as Bool>::Pick<
        <S as Arithmetic>::Ty,
        <<S as Arithmetic>::Unsigned as Arithmetic>::Ty,
    >,
>;

/// Common type of two promoted integers.
pub type IntegerConversion<P, Q> = <Iff<<P as Arithmetic>::Signed, <Q as Arithmetic>::Signed> as Bool>::Pick<
    <RankAtLeast<P, Q> as Bool>::Pick<<P as Arithmetic>::Ty, <Q as Arithmetic>::Ty>,
    <<P as Arithmetic>::Signed as Bool>::Pick<MixedSign<Q, P>, MixedSign<P, Q>>,
>;

/// The usual arithmetic conversions applied to two profiles.
pub type UsualArithmetic<A, B> = <Or<<A as Arithmetic>::IsDouble, <B as Arithmetic>::IsDouble> as Bool>::Pick<
    f64,
    <Or<<A as Arithmetic>::IsFloat, <B as Arithmetic>::IsFloat> as Bool>::Pick<
        f32,
        IntegerConversion<<A as Arithmetic>::Promoted, <B as Arithmetic>::Promoted>,
    >,
>;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(UsualArithmetic<i8, u8>, i32);
    assert_type_eq_all!(UsualArithmetic<bool, bool>, i32);
    assert_type_eq_all!(UsualArithmetic<i32, u32>, u32);
    assert_type_eq_all!(UsualArithmetic<u32, i64>, i64);
    assert_type_eq_all!(UsualArithmetic<isize, u64>, u64);
    assert_type_eq_all!(UsualArithmetic<i64, usize>, u64);
    assert_type_eq_all!(UsualArithmetic<u128, i64>, u128);
    assert_type_eq_all!(UsualArithmetic<char, i16>, u32);
    assert_type_eq_all!(UsualArithmetic<i64, f32>, f32);
    assert_type_eq_all!(UsualArithmetic<f32, f64>, f64);

    #[test]
    fn promotion_is_symmetric() {
        fn same<A: 'static, B: 'static>() -> bool {
            core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
        }
        assert!(same::<UsualArithmetic<u16, i128>, UsualArithmetic<i128, u16>>());
        assert!(same::<UsualArithmetic<usize, i32>, UsualArithmetic<i32, usize>>());
    }
}
