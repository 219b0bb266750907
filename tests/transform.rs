//! Type transformations: cv, references, pointers, extents and decay.

#![recursion_limit = "256"]

use static_assertions::assert_type_eq_all;
use tola_traits::prelude::*;

#[derive(TypeShape)]
struct Gadget;

type Matrix = Array<Array<i32, D2>, D4>;

// ============================================================================
// cv-qualifiers
// ============================================================================

mod cv {
    use super::*;

    #[test]
    fn add_and_remove_const() {
        assert_type_eq_all!(AddConst<i32>, Const<i32>);
        assert_type_eq_all!(AddConst<Const<i32>>, Const<i32>);
        assert_type_eq_all!(AddConst<Volatile<i32>>, ConstVolatile<i32>);
        assert_type_eq_all!(RemoveConst<Const<i32>>, i32);
        assert_type_eq_all!(RemoveConst<ConstVolatile<i32>>, Volatile<i32>);
        assert_type_eq_all!(RemoveConst<i32>, i32);
    }

    #[test]
    fn add_and_remove_volatile() {
        assert_type_eq_all!(AddVolatile<Const<u8>>, ConstVolatile<u8>);
        assert_type_eq_all!(RemoveVolatile<ConstVolatile<u8>>, Const<u8>);
        assert_type_eq_all!(RemoveCv<ConstVolatile<u8>>, u8);
        assert_type_eq_all!(AddCv<Gadget>, ConstVolatile<Gadget>);
    }

    #[test]
    fn only_the_top_level_is_touched() {
        assert_type_eq_all!(RemoveConst<Ptr<Const<i32>>>, Ptr<Const<i32>>);
        assert_type_eq_all!(RemoveConst<Const<Ptr<Const<i32>>>>, Ptr<Const<i32>>);
        assert_type_eq_all!(AddConst<Ptr<i32>>, Const<Ptr<i32>>);
    }

    #[test]
    fn references_and_functions_ignore_cv() {
        assert_type_eq_all!(AddConst<LRef<i32>>, LRef<i32>);
        assert_type_eq_all!(AddVolatile<RRef<i32>>, RRef<i32>);
        assert_type_eq_all!(AddConst<Func<Void, (i32,)>>, Func<Void, (i32,)>);
        assert!(!is_const::<LRef<Const<i32>>>());
    }

    #[test]
    fn remove_cv_is_idempotent() {
        assert_type_eq_all!(RemoveCv<RemoveCv<ConstVolatile<i32>>>, RemoveCv<ConstVolatile<i32>>);
        assert_type_eq_all!(RemoveCv<RemoveCv<Const<Ptr<Const<u8>>>>>, Ptr<Const<u8>>);
        assert_type_eq_all!(RemoveCv<RemoveCv<Array<Const<i32>, D3>>>, Array<i32, D3>);
        assert_type_eq_all!(RemoveCv<RemoveCv<LRef<Const<Gadget>>>>, LRef<Const<Gadget>>);
        assert_type_eq_all!(RemoveCv<RemoveCv<Volatile<Void>>>, Void);
    }

    #[test]
    fn arrays_qualify_their_elements() {
        assert_type_eq_all!(AddConst<Array<i32, D3>>, Array<Const<i32>, D3>);
        assert_type_eq_all!(RemoveConst<Array<Const<i32>, D3>>, Array<i32, D3>);
        assert_type_eq_all!(AddConst<Unbounded<i32>>, Unbounded<Const<i32>>);
        assert!(is_const::<Array<Const<i32>, D3>>());
        assert!(is_volatile::<Array<Array<Volatile<i32>, D2>, D2>>());
    }
}

// ============================================================================
// References
// ============================================================================

mod reference {
    use super::*;

    #[test]
    fn remove_reference() {
        assert_type_eq_all!(RemoveReference<LRef<i32>>, i32);
        assert_type_eq_all!(RemoveReference<RRef<Const<i32>>>, Const<i32>);
        assert_type_eq_all!(RemoveReference<i32>, i32);
        assert_type_eq_all!(RemoveCvRef<LRef<ConstVolatile<i32>>>, i32);
    }

    #[test]
    fn references_collapse() {
        assert_type_eq_all!(AddLvalueReference<i32>, LRef<i32>);
        assert_type_eq_all!(AddLvalueReference<RRef<i32>>, LRef<i32>);
        assert_type_eq_all!(AddRvalueReference<i32>, RRef<i32>);
        assert_type_eq_all!(AddRvalueReference<LRef<i32>>, LRef<i32>);
        assert_type_eq_all!(AddRvalueReference<RRef<i32>>, RRef<i32>);
    }

    #[test]
    fn unreferenceable_types_pass_through() {
        assert_type_eq_all!(AddLvalueReference<Void>, Void);
        assert_type_eq_all!(AddRvalueReference<Const<Void>>, Const<Void>);
        type Abominable = QualFn<Void, (), FnConst>;
        assert_type_eq_all!(AddLvalueReference<Abominable>, Abominable);
        assert_type_eq_all!(AddLvalueReference<Func<Void>>, LRef<Func<Void>>);
    }
}

// ============================================================================
// Pointers
// ============================================================================

mod pointer {
    use super::*;

    #[test]
    fn add_pointer() {
        assert_type_eq_all!(AddPointer<i32>, Ptr<i32>);
        assert_type_eq_all!(AddPointer<LRef<i32>>, Ptr<i32>);
        assert_type_eq_all!(AddPointer<Void>, Ptr<Void>);
        assert_type_eq_all!(AddPointer<Func<i32>>, Ptr<Func<i32>>);
        assert_type_eq_all!(AddPointer<QualFn<i32, (), FnLRef>>, QualFn<i32, (), FnLRef>);
    }

    #[test]
    fn remove_pointer_strips_one_level() {
        assert_type_eq_all!(RemovePointer<Ptr<Ptr<i32>>>, Ptr<i32>);
        assert_type_eq_all!(RemovePointer<Ptr<Const<i32>>>, Const<i32>);
        assert_type_eq_all!(RemovePointer<Const<Ptr<i32>>>, i32);
        assert_type_eq_all!(RemovePointer<i32>, i32);
        assert_type_eq_all!(RemovePointer<MemPtr<i32, Gadget>>, MemPtr<i32, Gadget>);
    }
}

// ============================================================================
// Extents
// ============================================================================

mod extent {
    use super::*;

    #[test]
    fn remove_extent() {
        assert_type_eq_all!(RemoveExtent<Matrix>, Array<i32, D2>);
        assert_type_eq_all!(RemoveExtent<Unbounded<i32>>, i32);
        assert_type_eq_all!(RemoveExtent<i32>, i32);
        assert_type_eq_all!(RemoveAllExtents<Matrix>, i32);
        assert_type_eq_all!(RemoveAllExtents<Unbounded<Array<Const<u8>, D3>>>, Const<u8>);
    }

    #[test]
    fn rank_and_extent() {
        assert_eq!(rank::<i32>(), 0);
        assert_eq!(rank::<Matrix>(), 2);
        assert_eq!(extent::<Matrix>(0), 4);
        assert_eq!(extent::<Matrix>(1), 2);
        assert_eq!(extent::<Matrix>(2), 0);
        assert_eq!(extent::<Unbounded<Array<i32, D3>>>(0), 0);
        assert_eq!(extent::<Unbounded<Array<i32, D3>>>(1), 3);
        assert_eq!(extent::<i32>(0), 0);
    }
}

// ============================================================================
// Decay
// ============================================================================

mod decay {
    use super::*;

    #[test]
    fn decay_strips_references_and_cv() {
        assert_type_eq_all!(Decay<LRef<Const<i32>>>, i32);
        assert_type_eq_all!(Decay<RRef<Volatile<f64>>>, f64);
        assert_type_eq_all!(Decay<Const<Ptr<Const<i32>>>>, Ptr<Const<i32>>);
    }

    #[test]
    fn arrays_decay_to_pointers() {
        assert_type_eq_all!(Decay<Array<i32, D4>>, Ptr<i32>);
        assert_type_eq_all!(Decay<Matrix>, Ptr<Array<i32, D2>>);
        assert_type_eq_all!(Decay<LRef<Unbounded<Const<u8>>>>, Ptr<Const<u8>>);
    }

    #[test]
    fn functions_decay_to_pointers() {
        assert_type_eq_all!(Decay<Func<i32, (i32,)>>, Ptr<Func<i32, (i32,)>>);
        assert_type_eq_all!(Decay<LRef<Func<Void>>>, Ptr<Func<Void>>);
        // no pointer to a qualified function exists
        assert_type_eq_all!(Decay<QualFn<i32, (), FnConst>>, QualFn<i32, (), FnConst>);
    }

    #[test]
    fn classes_only_lose_cv() {
        assert_type_eq_all!(Decay<LRef<Const<Gadget>>>, Gadget);
    }
}
