//! Boolean algebra over predicates.
//!
//! ```text
//! Conjunction<(P1, P2, .., Pn)>     first Pi that is false, else Pn
//! Disjunction<(P1, P2, .., Pn)>     first Pi that is true,  else Pn
//! Negation<P>                       !P
//! ```
//!
//! Elements are walked one at a time. The step taken after an element is an
//! impl on that element's answer (`True` or `False`), and only the step that
//! continues names the tail. Elements past the deciding one are therefore
//! never asked to be predicates:
//!
//! ```rust
//! use tola_traits::{conjunction, False, True};
//!
//! struct NotAPredicate;
//! assert!(!conjunction::<(True, False, NotAPredicate)>());
//! ```

use core::marker::PhantomData;

use crate::primitives::{Bool, False, HCons, HNil, IntoList, Not, Predicate, True};

// =============================================================================
// Conjunction
// =============================================================================

/// What comes after an element of a conjunction, chosen by that element's
/// answer.
pub trait ConjoinStep<H, Rest> {
    type Out: Bool;
    type Element;
}

/// Last element: it decides.
impl<H> ConjoinStep<H, HNil> for True {
    type Out = True;
    type Element = H;
}

impl<H, Next, Rest> ConjoinStep<H, HCons<Next, Rest>> for True
where
    HCons<Next, Rest>: ConjunctionList,
{
    type Out = <HCons<Next, Rest> as ConjunctionList>::Out;
    type Element = <HCons<Next, Rest> as ConjunctionList>::Element;
}

impl<H, Rest> ConjoinStep<H, Rest> for False {
    type Out = False;
    type Element = H;
}

/// A list that can be folded by conjunction.
pub trait ConjunctionList {
    type Out: Bool;
    type Element;
}

impl ConjunctionList for HNil {
    type Out = True;
    type Element = True;
}

impl<H: Predicate, Rest> ConjunctionList for HCons<H, Rest>
where
    H::Out: ConjoinStep<H, Rest>,
{
    type Out = <H::Out as ConjoinStep<H, Rest>>::Out;
    type Element = <H::Out as ConjoinStep<H, Rest>>::Element;
}

// =============================================================================
// Disjunction
// =============================================================================

/// What comes after an element of a disjunction.
pub trait DisjoinStep<H, Rest> {
    type Out: Bool;
    type Element;
}

impl<H> DisjoinStep<H, HNil> for False {
    type Out = False;
    type Element = H;
}

impl<H, Next, Rest> DisjoinStep<H, HCons<Next, Rest>> for False
where
    HCons<Next, Rest>: DisjunctionList,
{
    type Out = <HCons<Next, Rest> as DisjunctionList>::Out;
    type Element = <HCons<Next, Rest> as DisjunctionList>::Element;
}

impl<H, Rest> DisjoinStep<H, Rest> for True {
    type Out = True;
    type Element = H;
}

/// A list that can be folded by disjunction.
pub trait DisjunctionList {
    type Out: Bool;
    type Element;
}

impl DisjunctionList for HNil {
    type Out = False;
    type Element = False;
}

impl<H: Predicate, Rest> DisjunctionList for HCons<H, Rest>
where
    H::Out: DisjoinStep<H, Rest>,
{
    type Out = <H::Out as DisjoinStep<H, Rest>>::Out;
    type Element = <H::Out as DisjoinStep<H, Rest>>::Element;
}

// =============================================================================
// Public surface
// =============================================================================

/// A fold that can name the element that decided it.
pub trait Decided {
    /// The deciding element itself; `True` for an empty conjunction and
    /// `False` for an empty disjunction.
    type Element;
}

/// The element that decided a [`Conjunction`] or [`Disjunction`].
pub type Deciding<P> = <P as Decided>::Element;

/// Logical AND over a tuple of predicates.
pub struct Conjunction<Ps>(PhantomData<Ps>);

impl<Ps: IntoList> Predicate for Conjunction<Ps>
where
    Ps::List: ConjunctionList,
{
    type Out = <Ps::List as ConjunctionList>::Out;
}

impl<Ps: IntoList> Decided for Conjunction<Ps>
where
    Ps::List: ConjunctionList,
{
    type Element = <Ps::List as ConjunctionList>::Element;
}

/// Logical OR over a tuple of predicates.
pub struct Disjunction<Ps>(PhantomData<Ps>);

impl<Ps: IntoList> Predicate for Disjunction<Ps>
where
    Ps::List: DisjunctionList,
{
    type Out = <Ps::List as DisjunctionList>::Out;
}

impl<Ps: IntoList> Decided for Disjunction<Ps>
where
    Ps::List: DisjunctionList,
{
    type Element = <Ps::List as DisjunctionList>::Element;
}

/// Logical NOT of a predicate.
pub struct Negation<P>(PhantomData<P>);

impl<P: Predicate> Predicate for Negation<P> {
    type Out = Not<P::Out>;
}

#[inline(always)]
pub const fn conjunction<Ps: IntoList>() -> bool
where
    Ps::List: ConjunctionList,
{
    <Conjunction<Ps> as Predicate>::VALUE
}

#[inline(always)]
pub const fn disjunction<Ps: IntoList>() -> bool
where
    Ps::List: DisjunctionList,
{
    <Disjunction<Ps> as Predicate>::VALUE
}

#[inline(always)]
pub const fn negation<P: Predicate>() -> bool {
    <Negation<P> as Predicate>::VALUE
}
