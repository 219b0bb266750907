//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the alphabet of structural identities: every modeled type
//! spells itself as a stream of nibbles, and equality of types is equality of
//! those streams.

use super::bool::{And, Bool, False, True};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF) together with their bit pattern.
#[macro_export]
#[doc(hidden)]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0, [False, False, False, False]);
        $mac!(X1, 1, [False, False, False, True]);
        $mac!(X2, 2, [False, False, True, False]);
        $mac!(X3, 3, [False, False, True, True]);
        $mac!(X4, 4, [False, True, False, False]);
        $mac!(X5, 5, [False, True, False, True]);
        $mac!(X6, 6, [False, True, True, False]);
        $mac!(X7, 7, [False, True, True, True]);
        $mac!(X8, 8, [True, False, False, False]);
        $mac!(X9, 9, [True, False, False, True]);
        $mac!(XA, 10, [True, False, True, False]);
        $mac!(XB, 11, [True, False, True, True]);
        $mac!(XC, 12, [True, True, False, False]);
        $mac!(XD, 13, [True, True, False, True]);
        $mac!(XE, 14, [True, True, True, False]);
        $mac!(XF, 15, [True, True, True, True]);
    };
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15), stored as four type-level bits.
pub trait Nibble: 'static {
    const VALUE: u8;
    type B3: Bool;
    type B2: Bool;
    type B1: Bool;
    type B0: Bool;

    /// Bitwise equality with another nibble.
    type Matches<Other: Nibble>: Bool;
}

macro_rules! define_nibble {
    ($n:ident, $v:literal, [$b3:ident, $b2:ident, $b1:ident, $b0:ident]) => {
        #[derive(Debug)]
        pub struct $n;

        impl Nibble for $n {
            const VALUE: u8 = $v;
            type B3 = $b3;
            type B2 = $b2;
            type B1 = $b1;
            type B0 = $b0;

            type Matches<Other: Nibble> = And<
                And<<$b3 as Bool>::Iff<Other::B3>, <$b2 as Bool>::Iff<Other::B2>>,
                And<<$b1 as Bool>::Iff<Other::B1>, <$b0 as Bool>::Iff<Other::B0>>,
            >;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Const to Type Mapping (Map<N> -> Xn)
// =============================================================================

pub trait ToNibble {
    type Out: Nibble;
}

pub struct Map<const N: u8>;

macro_rules! map_nibble {
    ($n:ident, $v:literal, [$($bit:ident),*]) => {
        impl ToNibble for Map<$v> {
            type Out = $n;
        }
    };
}
for_each_nibble!(map_nibble);
