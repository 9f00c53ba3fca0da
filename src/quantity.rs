//! Values carried in coherent SI terms, typed by their dimension vector.

use std::cmp::Ordering;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::dimension::{Dimension, Dimensionless, Inverse, Minus, Plus, Power, Product, Quotient, Times, Uniform, Zip};
use crate::ratio::{Exponent, Half, IntoExponent};
use crate::Real;

/// A value of dimension `D`, stored as its coherent, unprefixed, unshifted SI
/// value. Same size as `Real`.
pub struct Quantity<D> {
    base_value: Real,
    dimension: PhantomData<D>,
}

impl<D> Quantity<D> {
    pub const fn new(base_value: Real) -> Self { Self { base_value, dimension: PhantomData } }

    pub const fn base_value(&self) -> Real { self.base_value }
}

impl<D> Clone for Quantity<D> { fn clone(&self) -> Self { *self } }
impl<D> Copy  for Quantity<D> {}

impl From<Quantity<Dimensionless>> for Real {
    fn from(q: Quantity<Dimensionless>) -> Self { q.base_value }
}

/// Anything with a dimension vector and a coherent SI value: [`Quantity`] and
/// [`Unit`](crate::Unit).
pub trait Dimensioned: Sized {
    type Dimension: Dimension;

    fn base_value(&self) -> Real;

    /// Forget prefix and unit, keep the coherent value
    fn to_quantity(self) -> Quantity<Self::Dimension> { Quantity::new(self.base_value()) }

    /// Raise to the power `E`, which may be a `typenum` integer (`P2`) or a
    /// [`Rational`](crate::ratio::Rational). Every exponent of the dimension
    /// vector is multiplied by `E`.
    ///
    /// A negative value to a fractional power is NaN, as with `powf`.
    fn pow<E>(self) -> Quantity<Power<Self::Dimension, E::Output>>
    where
        E: IntoExponent,
        Self::Dimension: Zip<Uniform<E::Output>, Times>,
    {
        Quantity::new(self.base_value().powf(<E::Output as Exponent>::value()))
    }

    /// Same as `pow` with exponent 1/2
    fn sqrt(self) -> Quantity<Power<Self::Dimension, Half>>
    where
        Self::Dimension: Zip<Uniform<Half>, Times>,
    {
        Quantity::new(self.base_value().sqrt())
    }
}

impl<D: Dimension> Dimensioned for Quantity<D> {
    type Dimension = D;
    fn base_value(&self) -> Real { self.base_value }
}

// ----- Addition and subtraction: identical dimensions only ------------------------------------

impl<D> Add for Quantity<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::new(self.base_value + rhs.base_value) }
}

impl<D> Sub for Quantity<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::new(self.base_value - rhs.base_value) }
}

impl<D> Neg for Quantity<D> {
    type Output = Self;
    fn neg(self) -> Self { Self::new(-self.base_value) }
}

impl<D> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(0.0), Add::add)
    }
}

impl<D> num_traits::Zero for Quantity<D> {
    fn zero() -> Self { Self::new(0.0) }
    fn is_zero(&self) -> bool { self.base_value == 0.0 }
}

// ----- Multiplication and division: exponents combine -----------------------------------------

impl<L, R> Mul<Quantity<R>> for Quantity<L>
where
    L: Zip<R, Plus>,
{
    type Output = Quantity<Product<L, R>>;
    fn mul(self, rhs: Quantity<R>) -> Self::Output { Quantity::new(self.base_value * rhs.base_value) }
}

/// Division by a zero value is not trapped: the result is infinite or NaN.
impl<L, R> Div<Quantity<R>> for Quantity<L>
where
    L: Zip<R, Minus>,
{
    type Output = Quantity<Quotient<L, R>>;
    fn div(self, rhs: Quantity<R>) -> Self::Output { Quantity::new(self.base_value / rhs.base_value) }
}

// Raw numbers behave as dimensionless
impl<D> Mul<Real> for Quantity<D> {
    type Output = Self;
    fn mul(self, rhs: Real) -> Self { Self::new(self.base_value * rhs) }
}

impl<D> Mul<Quantity<D>> for Real {
    type Output = Quantity<D>;
    fn mul(self, rhs: Quantity<D>) -> Quantity<D> { Quantity::new(self * rhs.base_value) }
}

impl<D> Div<Real> for Quantity<D> {
    type Output = Self;
    fn div(self, rhs: Real) -> Self { Self::new(self.base_value / rhs) }
}

impl<D> Div<Quantity<D>> for Real
where
    Dimensionless: Zip<D, Minus>,
{
    type Output = Quantity<Inverse<D>>;
    fn div(self, rhs: Quantity<D>) -> Self::Output { Quantity::new(self / rhs.base_value) }
}

// ----- Comparison: identical dimensions only ---------------------------------------------------

impl<D> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool { self.base_value == other.base_value }
}

impl<D> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.base_value.partial_cmp(&other.base_value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dim;
    use crate::ratio::{Int, One, Zero};
    use float_eq::assert_float_eq;
    use typenum::{N1, N2, P2, P3};

    type Time     = Dim<One,  Zero, Zero, Zero, Zero, Zero, Zero>;
    type Length   = Dim<Zero, One,  Zero, Zero, Zero, Zero, Zero>;
    type Velocity = Dim<Int<N1>, One, Zero, Zero, Zero, Zero, Zero>;
    type Area     = Dim<Zero, Int<P2>, Zero, Zero, Zero, Zero, Zero>;

    fn s(x: Real) -> Quantity<Time>   { Quantity::new(x) }
    fn m(x: Real) -> Quantity<Length> { Quantity::new(x) }

    #[test]
    fn same_size_as_the_payload() {
        assert_eq!(std::mem::size_of::<Quantity<Velocity>>(), std::mem::size_of::<Real>());
    }

    #[test]
    fn add_and_sub() {
        assert_eq!((m(2.0) + m(3.0)).base_value(), 5.0);
        assert_eq!((m(2.0) - m(3.0)).base_value(), -1.0);
        assert_eq!((-m(2.0)).base_value(), -2.0);
    }

    #[test]
    fn mul_and_div_change_dimension() {
        let v: Quantity<Velocity> = m(10.0) / s(4.0);
        assert_eq!(v.base_value(), 2.5);
        let a: Quantity<Area> = m(3.0) * m(4.0);
        assert_eq!(a.base_value(), 12.0);
        let back: Quantity<Length> = v * s(4.0);
        assert_eq!(back, m(10.0));
        let ratio: Quantity<Dimensionless> = m(1.0) / m(4.0);
        assert_eq!(Real::from(ratio), 0.25);
    }

    #[test]
    fn raw_numbers_are_dimensionless() {
        assert_eq!(m(2.0) * 3.0, m(6.0));
        assert_eq!(3.0 * m(2.0), m(6.0));
        assert_eq!(m(6.0) / 3.0, m(2.0));
        let hz: Quantity<Dim<Int<N1>, Zero, Zero, Zero, Zero, Zero, Zero>> = 1.0 / s(0.5);
        assert_eq!(hz.base_value(), 2.0);
    }

    #[test]
    fn division_by_zero_is_not_trapped() {
        assert!((m(1.0) / s(0.0)).base_value().is_infinite());
        assert!((m(0.0) / s(0.0)).base_value().is_nan());
    }

    #[test]
    fn pow_and_sqrt() {
        let a: Quantity<Area> = m(3.0).pow::<P2>();
        assert_float_eq!(a.base_value(), 9.0, r2nd <= Real::EPSILON);
        let l: Quantity<Length> = a.sqrt();
        assert_float_eq!(l.base_value(), 3.0, r2nd <= Real::EPSILON);
        let inv: Quantity<Dim<Zero, Int<N2>, Zero, Zero, Zero, Zero, Zero>> = m(2.0).pow::<N2>();
        assert_float_eq!(inv.base_value(), 0.25, r2nd <= Real::EPSILON);
        let cube: Quantity<Dim<Zero, Int<P3>, Zero, Zero, Zero, Zero, Zero>> = m(2.0).pow::<P3>();
        assert_float_eq!(cube.base_value(), 8.0, r2nd <= Real::EPSILON);
    }

    #[test]
    fn fractional_pow_of_negative_is_nan() {
        assert!(m(-4.0).sqrt().base_value().is_nan());
    }

    #[test]
    fn comparison() {
        assert!(m(1.0) < m(2.0));
        assert!(m(2.0) >= m(2.0));
        assert!(m(2.0) != m(2.5));
    }

    #[test]
    fn sum_and_zero() {
        use num_traits::Zero as _;
        let total: Quantity<Length> = vec![m(1.0), m(2.0), m(3.5)].into_iter().sum();
        assert_eq!(total, m(6.5));
        assert!(Quantity::<Length>::zero().is_zero());
    }
}
