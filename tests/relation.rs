//! Relations between two modeled types: identity, base-of and
//! implicit convertibility.
//!
//! 1. Helper macros
//! 2. Class hierarchy fixtures
//! 3. Tests grouped by relation

#![recursion_limit = "256"]

use tola_traits::prelude::*;

// ============================================================================
// PART 1: HELPER MACROS
// ============================================================================

/// Assert that a predicate holds.
macro_rules! assert_holds {
    ($pred:ty) => {
        assert!(
            <$pred as Predicate>::VALUE,
            "Expected `{}` to hold",
            stringify!($pred)
        );
    };
}

/// Assert that a predicate does NOT hold.
macro_rules! assert_not_holds {
    ($pred:ty) => {
        assert!(
            !<$pred as Predicate>::VALUE,
            "Expected `{}` NOT to hold",
            stringify!($pred)
        );
    };
}

// ============================================================================
// PART 2: FIXTURES
// ============================================================================

#[derive(TypeShape)]
struct Animal;

#[derive(TypeShape)]
#[shape(bases(Animal))]
struct Mammal;

#[derive(TypeShape)]
#[shape(bases(Mammal))]
struct Whale;

#[derive(TypeShape)]
struct Engine;

#[derive(TypeShape)]
#[shape(bases(private Engine))]
struct Car;

#[derive(TypeShape)]
#[shape(into(Whale, f64))]
struct Fraction;

#[derive(TypeShape)]
struct Creature;

#[derive(TypeShape)]
#[shape(bases(Creature))]
struct Swimmer;

#[derive(TypeShape)]
#[shape(bases(Creature))]
struct Walker;

/// Reaches `Creature` along two public paths.
#[derive(TypeShape)]
#[shape(bases(Swimmer, Walker))]
struct Frog;

#[derive(TypeShape)]
#[shape(from_any)]
struct Sink;

#[derive(TypeShape)]
#[shape(from(i32))]
struct Meters;

#[derive(TypeShape)]
#[shape(explicit(i32))]
struct Seconds;

#[derive(TypeShape)]
#[allow(dead_code)]
union Bits {
    int: u32,
    float: f32,
}

mod left {
    use tola_traits::TypeShape;

    #[derive(TypeShape)]
    pub struct Widget;
}

mod right {
    use tola_traits::TypeShape;

    #[derive(TypeShape)]
    pub struct Widget;
}

// ============================================================================
// PART 3: TESTS
// ============================================================================

mod same {
    use super::*;

    #[test]
    fn identical_spellings_are_same() {
        assert_holds!(IsSame<i32, i32>);
        assert_holds!(IsSame<Ptr<Const<u8>>, Ptr<Const<u8>>>);
        assert_holds!(IsSame<Array<i32, D4>, Array<i32, D4>>);
        assert_holds!(IsSame<Func<Void, (i32, f64)>, Func<Void, (i32, f64)>>);
        assert_holds!(IsSame<Animal, Animal>);
    }

    #[test]
    fn cv_and_references_are_distinct() {
        assert_not_holds!(IsSame<i32, Const<i32>>);
        assert_not_holds!(IsSame<Const<i32>, Volatile<i32>>);
        assert_not_holds!(IsSame<i32, LRef<i32>>);
        assert_not_holds!(IsSame<LRef<i32>, RRef<i32>>);
        assert_not_holds!(IsSame<Ptr<Const<i32>>, Const<Ptr<i32>>>);
    }

    #[test]
    fn structure_takes_part_in_identity() {
        assert_not_holds!(IsSame<Array<i32, D3>, Array<i32, D4>>);
        assert_not_holds!(IsSame<Array<i32, D3>, Unbounded<i32>>);
        assert_not_holds!(IsSame<Func<Void, (i32,)>, Func<Void, (i32, i32)>>);
        assert_not_holds!(IsSame<Func<Void, (i32,)>, QualFn<Void, (i32,), FnConst>>);
        assert_not_holds!(IsSame<MemPtr<i32, Animal>, MemPtr<i32, Mammal>>);
        assert_not_holds!(IsSame<bool, u8>);
        assert_not_holds!(IsSame<isize, i64>);
    }

    #[test]
    fn user_types_are_keyed_by_path() {
        assert_not_holds!(IsSame<left::Widget, right::Widget>);
        assert_not_holds!(IsSame<Animal, Mammal>);
        assert_holds!(IsSame<left::Widget, left::Widget>);
    }

    #[test]
    fn any_of_scans_the_whole_list() {
        assert!(is_any_of::<f64, (i32, u8, f64)>());
        assert!(!is_any_of::<Const<f64>, (i32, u8, f64)>());
        assert!(!is_any_of::<i32, ()>());
    }
}

mod base_of {
    use super::*;

    #[test]
    fn direct_and_indirect_bases() {
        assert_holds!(IsBaseOf<Animal, Mammal>);
        assert_holds!(IsBaseOf<Mammal, Whale>);
        assert_holds!(IsBaseOf<Animal, Whale>);
        assert_not_holds!(IsBaseOf<Whale, Animal>);
    }

    #[test]
    fn a_class_is_its_own_base() {
        assert_holds!(IsBaseOf<Animal, Animal>);
        assert_holds!(IsBaseOf<Const<Animal>, Volatile<Animal>>);
    }

    #[test]
    fn non_classes_have_no_bases() {
        assert!(!is_base_of::<i32, i32>());
        assert!(!is_base_of::<Bits, Bits>());
        assert!(!is_base_of::<Ptr<Animal>, Ptr<Whale>>());
        assert!(!is_base_of::<Engine, Animal>());
    }

    #[test]
    fn private_bases_count_but_do_not_convert() {
        assert_holds!(IsBaseOf<Engine, Car>);
        assert_not_holds!(DerivesPublicly<Engine, Car>);
        assert_not_holds!(IsConvertible<Ptr<Car>, Ptr<Engine>>);
        assert_not_holds!(IsConvertible<LRef<Car>, LRef<Engine>>);
    }

    #[test]
    fn repeated_public_bases_still_convert() {
        // paths are not counted, so the repeated base is not ambiguous
        assert_holds!(IsBaseOf<Creature, Frog>);
        assert_holds!(DerivesPublicly<Creature, Frog>);
        assert_holds!(IsConvertible<Ptr<Frog>, Ptr<Creature>>);
        assert_holds!(IsConvertible<LRef<Frog>, LRef<Creature>>);
        assert_holds!(IsConvertible<Frog, Creature>);
    }
}

mod convertible {
    use super::*;

    #[test]
    fn arithmetic_converts_both_ways() {
        assert_holds!(IsConvertible<i32, f64>);
        assert_holds!(IsConvertible<f64, i32>);
        assert_holds!(IsConvertible<Const<u8>, i64>);
        assert_holds!(IsConvertible<Ptr<i32>, bool>);
        assert_not_holds!(IsConvertible<i32, Ptr<i32>>);
    }

    #[test]
    fn arrays_and_functions_decay() {
        assert_holds!(IsConvertible<Unbounded<i32>, Ptr<i32>>);
        assert_holds!(IsConvertible<Array<i32, D4>, Ptr<Const<i32>>>);
        assert_holds!(IsConvertible<Func<i32, (i32,)>, Ptr<Func<i32, (i32,)>>>);
        assert_not_holds!(IsConvertible<Ptr<i32>, Array<i32, D42>>);
    }

    #[test]
    fn arrays_functions_and_void_are_never_targets() {
        assert_not_holds!(IsConvertible<Func<Void, (i32,)>, Func<Void, (i32,)>>);
        assert_not_holds!(IsConvertible<Array<i32, D2>, Array<i32, D2>>);
        assert_not_holds!(IsConvertible<i32, Void>);
        assert_not_holds!(IsConvertible<Void, i32>);
        assert_holds!(IsConvertible<Void, Const<Void>>);
    }

    #[test]
    fn pointer_conversions() {
        assert_holds!(IsConvertible<Ptr<i32>, Ptr<Const<i32>>>);
        assert_not_holds!(IsConvertible<Ptr<Const<i32>>, Ptr<i32>>);
        assert_holds!(IsConvertible<Ptr<Whale>, Ptr<Animal>>);
        assert_not_holds!(IsConvertible<Ptr<Animal>, Ptr<Whale>>);
        assert_holds!(IsConvertible<Ptr<Whale>, Ptr<Void>>);
        assert_not_holds!(IsConvertible<Ptr<Func<Void>>, Ptr<Void>>);
        assert_holds!(IsConvertible<NullPtr, Ptr<u8>>);
        assert_holds!(IsConvertible<NullPtr, MemPtr<i32, Animal>>);
        assert_not_holds!(IsConvertible<Ptr<u8>, NullPtr>);
    }

    #[test]
    fn qualification_reaches_every_level() {
        assert_holds!(IsConvertible<Ptr<Ptr<i32>>, Ptr<Const<Ptr<Const<i32>>>>>);
        assert_holds!(IsConvertible<Ptr<Ptr<i32>>, Ptr<Const<Ptr<i32>>>>);
        assert_holds!(IsConvertible<
            Ptr<Ptr<Ptr<i32>>>,
            Ptr<Const<Ptr<Const<Ptr<Volatile<i32>>>>>>,
        >);
        // a non-const level above an added qualifier would let `const int*` in
        assert_not_holds!(IsConvertible<Ptr<Ptr<i32>>, Ptr<Ptr<Const<i32>>>>);
        assert_not_holds!(IsConvertible<
            Ptr<Ptr<Ptr<i32>>>,
            Ptr<Const<Ptr<Ptr<Const<i32>>>>>,
        >);
        // only the first level may change the pointee type
        assert_not_holds!(IsConvertible<Ptr<Ptr<Whale>>, Ptr<Const<Ptr<Animal>>>>);
        assert_not_holds!(IsConvertible<Ptr<Ptr<i32>>, Ptr<Const<Ptr<Void>>>>);
        assert_not_holds!(IsConvertible<Ptr<Const<Ptr<i32>>>, Ptr<Ptr<i32>>>);
    }

    #[test]
    fn reference_binding() {
        assert_holds!(IsConvertible<LRef<i32>, LRef<i32>>);
        assert_holds!(IsConvertible<LRef<i32>, LRef<Const<i32>>>);
        assert_not_holds!(IsConvertible<i32, LRef<i32>>);
        assert_holds!(IsConvertible<i32, LRef<Const<i32>>>);
        assert_holds!(IsConvertible<i32, RRef<i32>>);
        assert_not_holds!(IsConvertible<LRef<i32>, RRef<i32>>);
        assert_holds!(IsConvertible<LRef<Whale>, LRef<Animal>>);
        assert_holds!(IsConvertible<RRef<Whale>, RRef<Animal>>);
    }

    #[test]
    fn function_lvalues_bind_to_rvalue_references() {
        assert_holds!(IsConvertible<Func<Void>, RRef<Func<Void>>>);
        assert_holds!(IsConvertible<LRef<Func<i32, (i32,)>>, RRef<Func<i32, (i32,)>>>);
        assert_not_holds!(IsConvertible<Func<Void>, RRef<Func<i32>>>);
    }

    #[test]
    fn derived_objects_slice_into_bases() {
        assert_holds!(IsConvertible<Whale, Animal>);
        assert_not_holds!(IsConvertible<Animal, Whale>);
    }

    #[test]
    fn converting_constructors() {
        assert_holds!(IsConvertible<i32, Meters>);
        assert_holds!(IsConvertible<f64, Meters>);
        assert_not_holds!(IsConvertible<Ptr<i32>, Meters>);
        // explicit constructors never take part in implicit conversion
        assert_not_holds!(IsConvertible<i32, Seconds>);
    }

    #[test]
    fn conversion_operators() {
        assert_holds!(IsConvertible<Fraction, f64>);
        assert_holds!(IsConvertible<Fraction, Whale>);
        assert_not_holds!(IsConvertible<Fraction, Ptr<f64>>);
    }

    #[test]
    fn from_any_accepts_everything_but_void() {
        assert_holds!(IsConvertible<i32, Sink>);
        assert_holds!(IsConvertible<Ptr<Animal>, Sink>);
        assert_not_holds!(IsConvertible<Void, Sink>);
    }
}
