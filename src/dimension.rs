//! Dimension vectors: seven rational exponents, one per SI base quantity.
//!
//! The order is fixed: time, length, mass, electric current, thermodynamic
//! temperature, amount of substance, luminous intensity.
//!
//! `Dim<1, 0, 0, 0, 0, 0, 0>` is time, `Dim<-2, 1, 1, 0, 0, 0, 0>` is force
//! (schematically: the parameters are [`Rational`](crate::ratio::Rational)
//! types, not numbers).

use std::marker::PhantomData;

use typenum::Z0;

use crate::ratio::{Exponent, Rational, RationalAdd, RationalMul, RationalSub, Zero};

/// Dimension vector. Never instantiated; it only appears as a type parameter.
pub struct Dim<T, L, M, I, Th, N, J>(PhantomData<(T, L, M, I, Th, N, J)>);

pub type Dimensionless = Dim<Zero, Zero, Zero, Zero, Zero, Zero, Zero>;

/// Every exponent of the vector is `E`. Zipping with it through [`Times`]
/// raises a dimension to the power `E`.
pub type Uniform<E> = Dim<E, E, E, E, E, E, E>;

/// Symbols of the coherent SI base units, in dimension-vector order
pub const BASE_SYMBOLS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];

pub trait Dimension {
    type Time:        Exponent;
    type Length:      Exponent;
    type Mass:        Exponent;
    type Current:     Exponent;
    type Temperature: Exponent;
    type Amount:      Exponent;
    type Luminosity:  Exponent;

    /// Reduced `(numerator, denominator)` of each exponent, in canonical order
    const EXPONENTS: [(i64, i64); 7] = [
        (Self::Time       ::NUM, Self::Time       ::DEN),
        (Self::Length     ::NUM, Self::Length     ::DEN),
        (Self::Mass       ::NUM, Self::Mass       ::DEN),
        (Self::Current    ::NUM, Self::Current    ::DEN),
        (Self::Temperature::NUM, Self::Temperature::DEN),
        (Self::Amount     ::NUM, Self::Amount     ::DEN),
        (Self::Luminosity ::NUM, Self::Luminosity ::DEN),
    ];

    /// All seven numerators are zero. See also [`Scalar`].
    fn is_scalar() -> bool { Self::EXPONENTS.iter().all(|&(num, _)| num == 0) }
}

impl<T, L, M, I, Th, N, J> Dimension for Dim<T, L, M, I, Th, N, J>
where
    T: Exponent,
    L: Exponent,
    M: Exponent,
    I: Exponent,
    Th: Exponent,
    N: Exponent,
    J: Exponent,
{
    type Time        = T;
    type Length      = L;
    type Mass        = M;
    type Current     = I;
    type Temperature = Th;
    type Amount      = N;
    type Luminosity  = J;
}

// ----- Element-wise exponent operations ------------------------------------------------------

/// A binary operation on two exponents, applied position by position by [`Zip`].
pub trait ExponentOp<L, R> {
    type Output;
}

/// Exponent addition: multiplication of quantities
pub struct Plus;
/// Exponent subtraction: division of quantities
pub struct Minus;
/// Exponent multiplication: raising a quantity to a power
pub struct Times;

impl<L: RationalAdd<R>, R> ExponentOp<L, R> for Plus  { type Output = L::Output; }
impl<L: RationalSub<R>, R> ExponentOp<L, R> for Minus { type Output = L::Output; }
impl<L: RationalMul<R>, R> ExponentOp<L, R> for Times { type Output = L::Output; }

/// Combine two dimension vectors element-wise through `Op`.
///
/// Both sides always have exactly seven positions, so there is no way to
/// combine vectors of different population.
pub trait Zip<Rhs, Op> {
    type Output;
}

impl<Op, T1, L1, M1, I1, Th1, N1, J1, T2, L2, M2, I2, Th2, N2, J2>
    Zip<Dim<T2, L2, M2, I2, Th2, N2, J2>, Op> for Dim<T1, L1, M1, I1, Th1, N1, J1>
where
    Op: ExponentOp<T1, T2>
      + ExponentOp<L1, L2>
      + ExponentOp<M1, M2>
      + ExponentOp<I1, I2>
      + ExponentOp<Th1, Th2>
      + ExponentOp<N1, N2>
      + ExponentOp<J1, J2>,
{
    type Output = Dim<
        <Op as ExponentOp<T1, T2>>::Output,
        <Op as ExponentOp<L1, L2>>::Output,
        <Op as ExponentOp<M1, M2>>::Output,
        <Op as ExponentOp<I1, I2>>::Output,
        <Op as ExponentOp<Th1, Th2>>::Output,
        <Op as ExponentOp<N1, N2>>::Output,
        <Op as ExponentOp<J1, J2>>::Output,
    >;
}

/// Dimension of `L * R`
pub type Product<L, R> = <L as Zip<R, Plus>>::Output;
/// Dimension of `L / R`
pub type Quotient<L, R> = <L as Zip<R, Minus>>::Output;
/// Dimension of `D` raised to the exponent `E`
pub type Power<D, E> = <D as Zip<Uniform<E>, Times>>::Output;
/// Dimension of `1 / D`
pub type Inverse<D> = Quotient<Dimensionless, D>;

// ----- Scalar ---------------------------------------------------------------------------------

/// Exponent with numerator zero, whatever the denominator.
pub trait ZeroExponent {}
impl<D> ZeroExponent for Rational<Z0, D> {}

/// Dimension vectors whose seven numerators are all zero. Only these accept
/// real-valued functions such as `sin` (see [`unop`](crate::ops::unop)).
pub trait Scalar: Dimension {}

impl<T, L, M, I, Th, N, J> Scalar for Dim<T, L, M, I, Th, N, J>
where
    Dim<T, L, M, I, Th, N, J>: Dimension,
    T: ZeroExponent,
    L: ZeroExponent,
    M: ZeroExponent,
    I: ZeroExponent,
    Th: ZeroExponent,
    N: ZeroExponent,
    J: ZeroExponent,
{}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::{Frac, Half, Int, One};
    use pretty_assertions::assert_eq;
    use typenum::{N1, N2, P2, P3, P4};

    fn same<A, B>() where A: Same<B> {}
    trait Same<T> {}
    impl<T> Same<T> for T {}

    fn scalar<D: Scalar>() {}

    type Velocity = Dim<Int<N1>, One, Zero, Zero, Zero, Zero, Zero>;
    type Time     = Dim<One,  Zero, Zero, Zero, Zero, Zero, Zero>;
    type Length   = Dim<Zero, One,  Zero, Zero, Zero, Zero, Zero>;
    type Area     = Dim<Zero, Int<P2>, Zero, Zero, Zero, Zero, Zero>;
    type Force    = Dim<Int<N2>, One, One, Zero, Zero, Zero, Zero>;

    #[test]
    fn product_adds_exponents() {
        same::<Product<Length, Length>, Area>();
        same::<Product<Velocity, Time>, Length>();
    }

    #[test]
    fn quotient_subtracts_exponents() {
        same::<Quotient<Length, Time>, Velocity>();
        same::<Quotient<Length, Length>, Dimensionless>();
        same::<Inverse<Time>, Dim<Int<N1>, Zero, Zero, Zero, Zero, Zero, Zero>>();
    }

    #[test]
    fn power_multiplies_exponents() {
        same::<Power<Length, Int<P2>>, Area>();
        same::<Power<Area, Half>, Length>();
        same::<Power<Force, Int<P3>>, Dim<Int<typenum::N6>, Int<P3>, Int<P3>, Zero, Zero, Zero, Zero>>();
        same::<Power<Length, Half>, Dim<Zero, Half, Zero, Zero, Zero, Zero, Zero>>();
    }

    #[test]
    fn square_root_of_square_is_identity() {
        same::<Power<Power<Force, Int<P2>>, Half>, Force>();
    }

    #[test]
    fn differently_written_exponents_give_one_dimension() {
        type Written = Dim<Frac<P2, P4>, Zero, Zero, Zero, Zero, Zero, Zero>;
        type Reduced = Dim<Half, Zero, Zero, Zero, Zero, Zero, Zero>;
        same::<Written, Reduced>();
        same::<Product<Written, Dimensionless>, Reduced>();
        assert_eq!(Written::EXPONENTS[0], (1, 2));
    }

    #[test]
    fn exponents_listed_in_canonical_order() {
        assert_eq!(Force::EXPONENTS, [(-2, 1), (1, 1), (1, 1), (0, 1), (0, 1), (0, 1), (0, 1)]);
        assert_eq!(<Power<Length, Half>>::EXPONENTS[1], (1, 2));
    }

    #[test]
    fn scalar_predicate() {
        assert!( Dimensionless::is_scalar());
        assert!(!Length::is_scalar());
        assert!(!Dim::<Zero, Zero, Zero, Zero, Zero, Zero, Half>::is_scalar());
        assert!( Quotient::<Force, Force>::is_scalar());
        scalar::<Dimensionless>();
        scalar::<Quotient<Velocity, Velocity>>();
        // Fractional exponents that cancel
        type Root = Dim<Zero, Half, Zero, Zero, Zero, Zero, Rational<N1, P3>>;
        scalar::<Quotient<Root, Root>>();
        assert!(Quotient::<Root, Root>::is_scalar());
    }
}
