//! `type_check!`: boolean expressions over predicates about one type.

#![recursion_limit = "256"]

use tola_traits::prelude::*;

macro_rules! assert_check {
    ($ty:ty : $($expr:tt)+) => {
        assert!(
            type_check!($ty: $($expr)+),
            "Expected `{}` to satisfy: {}",
            stringify!($ty),
            stringify!($($expr)+)
        );
    };
}

macro_rules! assert_not_check {
    ($ty:ty : $($expr:tt)+) => {
        assert!(
            !type_check!($ty: $($expr)+),
            "Expected `{}` NOT to satisfy: {}",
            stringify!($ty),
            stringify!($($expr)+)
        );
    };
}

#[derive(TypeShape)]
struct Handle;

#[derive(TypeShape)]
#[shape(bases(Handle), into(u64))]
struct FileHandle;

#[test]
fn single_predicates() {
    assert_check!(i32: IsIntegral);
    assert_not_check!(f64: IsIntegral);
    assert_check!(FileHandle: IsClass);
}

#[test]
fn operators_and_precedence() {
    assert_check!(i32: IsIntegral & !IsConst);
    assert_not_check!(Const<i32>: IsIntegral & !IsConst);
    assert_check!(Ptr<u8>: IsScalar & (IsPointer | IsArray));
    // `&` binds tighter than `|`
    assert_check!(f32: IsPointer & IsConst | IsFloatingPoint);
    assert_not_check!(f32: IsPointer & (IsConst | IsFloatingPoint));
    assert_check!(Void: !!IsVoid);
}

#[test]
fn placeholder_marks_the_subject() {
    assert_check!(i32: IsConvertible<_, f64>);
    assert_check!(FileHandle: IsConvertible<_, u64> & IsBaseOf<Handle, _>);
    assert_not_check!(Handle: IsBaseOf<FileHandle, _>);
    assert_check!(Ptr<FileHandle>: IsConvertible<_, Ptr<Handle>>);
    assert_check!(Point3: IsConstructible<_, (f64, f64, f64)>);
}

#[test]
fn operands_after_the_decision_are_not_evaluated() {
    // `String` is not a modeled type, so the second operand is no predicate.
    assert_not_check!(i32: IsPointer & IsConstructible<_, (String,)>);
    assert_check!(i32: IsIntegral | IsConstructible<_, (String,)>);
}

#[test]
fn usable_in_const_context() {
    const PLAIN_INT: bool = type_check!(u8: IsArithmetic & !IsVolatile);
    const _: () = assert!(PLAIN_INT);
}

#[derive(TypeShape)]
#[shape(explicit(f64, f64, f64))]
struct Point3;
