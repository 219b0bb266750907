//! Construction, assignment and destruction.
//!
//! 1. Helper macros
//! 2. Class fixtures, one registry feature each
//! 3. Tests grouped by operation

#![recursion_limit = "256"]

use tola_traits::prelude::*;

// ============================================================================
// PART 1: HELPER MACROS
// ============================================================================

/// Assert each `const fn` query holds for the type.
macro_rules! assert_all {
    ($ty:ty : $($query:ident),+ $(,)?) => {
        $(
            assert!(
                $query::<$ty>(),
                "Expected `{}` for `{}`",
                stringify!($query),
                stringify!($ty)
            );
        )+
    };
}

/// Assert no `const fn` query holds for the type.
macro_rules! assert_none {
    ($ty:ty : $($query:ident),+ $(,)?) => {
        $(
            assert!(
                !$query::<$ty>(),
                "Expected NOT `{}` for `{}`",
                stringify!($query),
                stringify!($ty)
            );
        )+
    };
}

// ============================================================================
// PART 2: FIXTURES
// ============================================================================

#[derive(TypeShape)]
#[shape(from(i32), explicit(f64, f64))]
struct Point;

#[derive(TypeShape)]
#[shape(explicit(i32))]
struct Seconds;

#[derive(TypeShape)]
#[shape(delete(default))]
struct NoDefault;

#[derive(TypeShape)]
#[shape(delete(copy, copy_assign))]
struct MoveOnly;

#[derive(TypeShape)]
#[shape(non_trivial)]
struct Managed;

#[derive(TypeShape)]
#[shape(throwing)]
struct Risky;

#[derive(TypeShape)]
#[shape(delete(destructor))]
struct Immortal;

#[derive(TypeShape)]
#[shape(assign(i32))]
struct Counter;

#[derive(TypeShape)]
#[shape(from_any)]
struct Sink;

#[derive(TypeShape)]
struct Parent;

#[derive(TypeShape)]
#[shape(bases(Parent))]
struct Child;

// ============================================================================
// PART 3: TESTS
// ============================================================================

mod construct {
    use super::*;

    #[test]
    fn scalars() {
        assert!(is_constructible::<i32, ()>());
        assert!(is_constructible::<i32, (f64,)>());
        assert!(is_constructible::<Ptr<Const<u8>>, (Ptr<u8>,)>());
        assert!(!is_constructible::<Ptr<u8>, (Ptr<Const<u8>>,)>());
        assert!(!is_constructible::<i32, (i32, i32)>());
    }

    #[test]
    fn void_functions_and_unknown_bounds() {
        assert!(!is_constructible::<Void, ()>());
        assert!(!is_constructible::<Func<i32>, ()>());
        assert!(!is_constructible::<Unbounded<i32>, ()>());
        assert!(is_constructible::<Array<i32, D3>, ()>());
        assert!(!is_constructible::<Array<i32, D3>, (Array<i32, D3>,)>());
    }

    #[test]
    fn references() {
        assert!(!is_constructible::<LRef<i32>, ()>());
        assert!(is_constructible::<LRef<i32>, (LRef<i32>,)>());
        assert!(!is_constructible::<LRef<i32>, (i32,)>());
        assert!(is_constructible::<LRef<Const<i32>>, (i32,)>());
        assert!(is_constructible::<RRef<i32>, (i32,)>());
        assert!(!is_constructible::<RRef<i32>, (LRef<i32>,)>());
        assert!(is_constructible::<LRef<Parent>, (LRef<Child>,)>());
    }

    #[test]
    fn declared_constructors() {
        assert!(is_constructible::<Point, (i32,)>());
        assert!(is_constructible::<Point, (f64, f64)>());
        assert!(is_constructible::<Point, (i32, i32)>());
        assert!(!is_constructible::<Point, (f64, Ptr<i32>)>());
        assert!(!is_constructible::<Point, (f64, f64, f64)>());
        assert!(!is_constructible::<Point, (Ptr<i32>,)>());
    }

    #[test]
    fn explicit_constructors_construct_but_do_not_convert() {
        assert!(is_constructible::<Seconds, (i32,)>());
        assert!(!is_convertible::<i32, Seconds>());
    }

    #[test]
    fn slicing_and_from_any() {
        assert!(is_constructible::<Parent, (Child,)>());
        assert!(!is_constructible::<Child, (Parent,)>());
        assert!(is_constructible::<Sink, (Ptr<Risky>,)>());
        assert!(!is_constructible::<Sink, (i32, i32)>());
    }

    #[test]
    fn special_constructors() {
        assert_all!(Point: is_default_constructible, is_copy_constructible, is_move_constructible);
        assert_none!(NoDefault: is_default_constructible);
        assert_all!(NoDefault: is_copy_constructible, is_move_constructible);
        assert_none!(Array<NoDefault, D2>: is_default_constructible);
        assert_none!(MoveOnly: is_copy_constructible);
        assert_all!(MoveOnly: is_move_constructible);
    }

    #[test]
    fn special_constructors_of_references() {
        assert_all!(LRef<i32>: is_copy_constructible, is_move_constructible);
        assert_none!(RRef<i32>: is_copy_constructible);
        assert_all!(RRef<i32>: is_move_constructible);
        assert_none!(Void: is_copy_constructible, is_move_constructible, is_default_constructible);
        assert_none!(QualFn<Void, (), FnConst>: is_copy_constructible);
    }

    #[test]
    fn trivial_construction() {
        assert_all!(i32: is_trivially_default_constructible, is_trivially_copy_constructible);
        assert_all!(Point: is_trivially_copy_constructible, is_trivially_move_constructible);
        assert_all!(Array<i32, D2>: is_trivially_default_constructible);
        assert_none!(Managed: is_trivially_copy_constructible, is_trivially_default_constructible);
        assert_none!(Array<Managed, D2>: is_trivially_default_constructible);
        assert_all!(Managed: is_copy_constructible);

        assert!(is_trivially_constructible::<f64, (i32,)>());
        assert!(!is_trivially_constructible::<Point, (i32,)>());
        assert!(!is_trivially_constructible::<Point, (f64, f64)>());
        assert!(is_trivially_constructible::<Parent, (LRef<Child>,)>());
        assert!(is_trivially_constructible::<LRef<i32>, (LRef<i32>,)>());
    }

    #[test]
    fn nothrow_construction() {
        assert_all!(Risky: is_default_constructible, is_copy_constructible);
        assert_none!(Risky: is_nothrow_default_constructible, is_nothrow_copy_constructible);
        assert_all!(i32: is_nothrow_default_constructible, is_nothrow_move_constructible);

        assert!(is_nothrow_constructible::<Point, (i32,)>());
        assert!(is_nothrow_constructible::<Point, (f64, f64)>());
        // a throwing argument type taints the conversion
        assert!(!is_nothrow_constructible::<Sink, (Risky,)>());
        assert!(is_constructible::<Sink, (Risky,)>());
    }
}

mod assign {
    use super::*;

    #[test]
    fn scalar_targets_must_be_lvalues() {
        assert!(is_assignable::<LRef<i32>, f64>());
        assert!(!is_assignable::<i32, i32>());
        assert!(!is_assignable::<RRef<i32>, i32>());
        assert!(!is_assignable::<LRef<Const<i32>>, i32>());
        assert!(!is_assignable::<LRef<Ptr<i32>>, Ptr<Const<i32>>>());
    }

    #[test]
    fn copy_and_move_assignment() {
        assert_all!(i32: is_copy_assignable, is_move_assignable);
        assert_all!(Ptr<i32>: is_copy_assignable);
        assert_none!(Const<i32>: is_copy_assignable, is_move_assignable);
        assert_none!(Array<i32, D2>: is_copy_assignable);
        assert_none!(Void: is_copy_assignable);
        assert_all!(Point: is_copy_assignable, is_move_assignable);
        assert_none!(MoveOnly: is_copy_assignable);
        assert_all!(MoveOnly: is_move_assignable);
    }

    #[test]
    fn declared_assignment_operators() {
        assert!(is_assignable::<LRef<Counter>, i32>());
        assert!(!is_assignable::<LRef<Counter>, Ptr<i32>>());
        assert!(is_assignable::<Counter, Counter>());
        assert!(!is_assignable::<LRef<Const<Counter>>, Counter>());
        assert!(is_assignable::<LRef<Parent>, Child>());
    }

    #[test]
    fn trivial_and_nothrow_assignment() {
        assert!(is_trivially_assignable::<LRef<i32>, f64>());
        assert!(!is_trivially_assignable::<LRef<Counter>, i32>());
        assert_all!(Point: is_trivially_copy_assignable, is_nothrow_move_assignable);
        assert_none!(Managed: is_trivially_copy_assignable, is_trivially_move_assignable);
        assert_all!(Managed: is_nothrow_copy_assignable);
        assert_none!(Risky: is_nothrow_copy_assignable, is_nothrow_move_assignable);
        assert!(is_nothrow_assignable::<LRef<Counter>, i32>());
    }
}

mod destruct {
    use super::*;

    #[test]
    fn destructible() {
        assert_all!(i32: is_destructible, is_trivially_destructible, is_nothrow_destructible);
        assert_all!(LRef<i32>: is_destructible);
        assert_all!(Array<i32, D2>: is_destructible);
        assert_none!(Void: is_destructible);
        assert_none!(Func<i32>: is_destructible);
        assert_none!(Unbounded<i32>: is_destructible);
    }

    #[test]
    fn deleted_destructors_reach_arrays() {
        assert_none!(Immortal: is_destructible);
        assert_none!(Array<Immortal, D2>: is_destructible);
        assert_all!(Ptr<Immortal>: is_destructible);
    }

    #[test]
    fn trivial_and_nothrow_destruction() {
        assert_all!(Managed: is_destructible);
        assert_none!(Managed: is_trivially_destructible);
        assert_none!(Array<Managed, D3>: is_trivially_destructible);
        assert_none!(Risky: is_nothrow_destructible);
        assert_all!(LRef<Risky>: is_nothrow_destructible);
    }
}
