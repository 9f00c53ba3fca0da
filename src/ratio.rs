//! Type-level rational numbers, used as the exponents of dimension vectors.
//!
//! Numerator and denominator are `typenum` integers. Every operation reduces
//! its result to lowest terms, so two exponents are equal exactly when their
//! types are identical: `1/2 + 1/2` *is* `Rational<P1, P1>`.

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Rem, Sub};

use typenum::{Abs, AbsVal, Diff, Integer, Mod, NInt, NonZero, PInt, Prod, Quot, Sum, Unsigned, P1, P2, Z0};

use crate::Real;

/// The exponent `N/D`.
///
/// Only reduced rationals with a positive denominator implement
/// [`Exponent`]. Write unreduced ones through [`Frac`], which normalizes them.
pub struct Rational<N, D = P1>(PhantomData<(N, D)>);

/// Integer exponent `N/1`
pub type Int<N> = Rational<N, P1>;
pub type Zero = Int<Z0>;
pub type One  = Int<P1>;
pub type Half = Rational<P1, P2>;

/// A rational exponent in lowest terms with a positive denominator.
///
/// `Rational<P1, Z0>` (zero denominator), `Rational<P1, N2>` (negative
/// denominator) and `Rational<P2, P4>` (not reduced) have no implementation,
/// so using them fails to compile. Equal exponents are therefore always the
/// same type.
pub trait Exponent {
    const NUM: i64;
    const DEN: i64;

    /// The exponent as a real number, as passed to `powf`
    fn value() -> Real { Self::NUM as Real / Self::DEN as Real }
}

impl<N, U> Exponent for Rational<N, PInt<U>>
where
    N: Integer,
    U: Unsigned + NonZero,
    Rational<N, PInt<U>>: Reduce<Output = Rational<N, PInt<U>>>,
{
    const NUM: i64 = N::I64;
    const DEN: i64 = <PInt<U> as Integer>::I64;
}

// ----- Greatest common divisor ---------------------------------------------------------------

/// Euclid's algorithm on `typenum` integers. The result is never negative.
pub trait Gcd<Rhs> {
    type Output;
}

pub type Gcf<A, B> = <A as Gcd<B>>::Output;

impl<A: Abs> Gcd<Z0> for A {
    type Output = AbsVal<A>;
}

impl<A, U> Gcd<PInt<U>> for A
where
    U: Unsigned + NonZero,
    A: Rem<PInt<U>>,
    PInt<U>: Gcd<Mod<A, PInt<U>>>,
{
    type Output = Gcf<PInt<U>, Mod<A, PInt<U>>>;
}

impl<A, U> Gcd<NInt<U>> for A
where
    U: Unsigned + NonZero,
    A: Rem<NInt<U>>,
    NInt<U>: Gcd<Mod<A, NInt<U>>>,
{
    type Output = Gcf<NInt<U>, Mod<A, NInt<U>>>;
}

// ----- Reduction -----------------------------------------------------------------------------

/// Divide numerator and denominator by their greatest common divisor.
pub trait Reduce {
    type Output;
}

pub type Reduced<R> = <R as Reduce>::Output;

/// `N/D` in lowest terms: `Frac<P2, P4>` is `Rational<P1, P2>`.
pub type Frac<N, D> = Reduced<Rational<N, D>>;

impl<N, D> Reduce for Rational<N, D>
where
    N: Gcd<D>,
    N: Div<Gcf<N, D>>,
    D: Div<Gcf<N, D>>,
{
    type Output = Rational<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>;
}

// ----- Arithmetic ----------------------------------------------------------------------------

/// `a/b + c/d = (ad + cb) / bd`, reduced
pub trait RationalAdd<Rhs> {
    type Output;
}

/// `a/b - c/d = (ad - cb) / bd`, reduced
pub trait RationalSub<Rhs> {
    type Output;
}

/// `a/b * c/d = ac / bd`, reduced
pub trait RationalMul<Rhs> {
    type Output;
}

impl<N1, D1, N2, D2> RationalAdd<Rational<N2, D2>> for Rational<N1, D1>
where
    N1: Mul<D2>,
    N2: Mul<D1>,
    D1: Mul<D2>,
    Prod<N1, D2>: Add<Prod<N2, D1>>,
    Rational<Sum<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Rational<Sum<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>>;
}

impl<N1, D1, N2, D2> RationalSub<Rational<N2, D2>> for Rational<N1, D1>
where
    N1: Mul<D2>,
    N2: Mul<D1>,
    D1: Mul<D2>,
    Prod<N1, D2>: Sub<Prod<N2, D1>>,
    Rational<Diff<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Rational<Diff<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>>;
}

impl<N1, D1, N2, D2> RationalMul<Rational<N2, D2>> for Rational<N1, D1>
where
    N1: Mul<N2>,
    D1: Mul<D2>,
    Rational<Prod<N1, N2>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Rational<Prod<N1, N2>, Prod<D1, D2>>>;
}

// ----- Conversion from plain integers --------------------------------------------------------

/// Anything usable as the exponent of `pow`: a `typenum` integer (`P2`, `N1`)
/// or a `Rational`.
pub trait IntoExponent {
    type Output: Exponent;
}

impl IntoExponent for Z0 {
    type Output = Zero;
}

impl<U> IntoExponent for PInt<U>
where
    U: Unsigned + NonZero,
    Int<PInt<U>>: Exponent,
{
    type Output = Int<PInt<U>>;
}

impl<U> IntoExponent for NInt<U>
where
    U: Unsigned + NonZero,
    Int<NInt<U>>: Exponent,
{
    type Output = Int<NInt<U>>;
}

impl<N, D> IntoExponent for Rational<N, D>
where
    Rational<N, D>: Reduce,
    Reduced<Rational<N, D>>: Exponent,
{
    type Output = Reduced<Rational<N, D>>;
}

/// Reduced `(numerator, denominator)` of `E`
pub fn fraction<E: Exponent>() -> (i64, i64) { (E::NUM, E::DEN) }
