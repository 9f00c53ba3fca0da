//! Named units and prefixed unit values.
//!
//! A *unit type* (`Second`, `Minute`, `DegreeCelsius`, ...) is a zero-size type
//! implementing [`UnitType`]. It fixes the dimension vector and the affine map
//! from the unit to coherent SI: `base = value * BASE_MULTIPLIER + BASE_ADDER`.
//!
//! A [`Unit<P, U>`] is a number expressed in unit `U` with prefix `P`, together
//! with the same number converted to coherent SI.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use crate::dimension::{Minus, Plus, Product, Quotient, Zip};
use crate::prefix::Prefix;
use crate::quantity::{Dimensioned, Quantity};
use crate::Real;

pub trait UnitType {
    /// The dimensional root: shared by every unit that converts to this one
    type Dimension: crate::dimension::Dimension;

    const SYMBOL: &'static str;

    /// Product of the multipliers along the chain of parents
    const BASE_MULTIPLIER: Real;
    /// Accumulated shift, in coherent SI terms
    const BASE_ADDER: Real;
}

/// Units with `BASE_MULTIPLIER = 1` and `BASE_ADDER = 0`: directly the SI
/// base units raised to some powers.
pub trait Coherent: UnitType {}

/// A unit defined relative to a parent unit:
/// `value_in_parent = (value + ADDER) * MULTIPLIER`.
pub trait NonCoherent: UnitType {
    type Parent: UnitType<Dimension = Self::Dimension>;
    const MULTIPLIER: Real;
    const ADDER: Real;
}

/// Define a zero-size coherent unit type, given the seven integer exponents
/// (`typenum` types) in the order time, length, mass, current, temperature,
/// amount, luminous intensity.
///
/// ```
/// use typesafe_units::{coherent_unit, typenum::{N1, P1, Z0}};
/// coherent_unit!(
///     /// Speed
///     MetrePerSecond, "m/s", [N1, P1, Z0, Z0, Z0, Z0, Z0]
/// );
/// ```
#[macro_export]
macro_rules! coherent_unit {
    ($(#[$attr:meta])* $name:ident, $symbol:literal, [$t:ty, $l:ty, $m:ty, $i:ty, $th:ty, $n:ty, $j:ty]) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $crate::UnitType for $name {
            type Dimension = $crate::dimension::Dim<
                $crate::ratio::Int<$t>,
                $crate::ratio::Int<$l>,
                $crate::ratio::Int<$m>,
                $crate::ratio::Int<$i>,
                $crate::ratio::Int<$th>,
                $crate::ratio::Int<$n>,
                $crate::ratio::Int<$j>,
            >;
            const SYMBOL: &'static str = $symbol;
            const BASE_MULTIPLIER: $crate::Real = 1.0;
            const BASE_ADDER:      $crate::Real = 0.0;
        }

        impl $crate::Coherent for $name {}
    };
}

/// Define a zero-size unit type as an affine transform of a parent unit:
/// `value_in_parent = (value + adder) * multiplier`.
///
/// The accumulated constants are resolved when the type is defined, so a
/// chain such as hour → minute → second costs nothing at run time. A zero
/// multiplier cannot be inverted and is rejected at compile time.
///
/// ```
/// use typesafe_units::{non_coherent_unit, si::Second};
/// non_coherent_unit!(
///     /// Two weeks
///     Fortnight, "fn", 14.0 * 86_400.0, 0.0, Second
/// );
/// ```
///
/// ```compile_fail
/// use typesafe_units::{non_coherent_unit, si::Second};
/// non_coherent_unit!(Never, "never", 0.0, 0.0, Second);
/// ```
#[macro_export]
macro_rules! non_coherent_unit {
    ($(#[$attr:meta])* $name:ident, $symbol:literal, $multiplier:expr, $adder:expr, $parent:ty) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        const _: () = assert!(($multiplier) as $crate::Real != 0.0, "unit multiplier must not be zero");

        impl $crate::NonCoherent for $name {
            type Parent = $parent;
            const MULTIPLIER: $crate::Real = ($multiplier) as $crate::Real;
            const ADDER:      $crate::Real = ($adder)      as $crate::Real;
        }

        impl $crate::UnitType for $name {
            type Dimension = <$parent as $crate::UnitType>::Dimension;
            const SYMBOL: &'static str = $symbol;
            const BASE_MULTIPLIER: $crate::Real =
                <$parent as $crate::UnitType>::BASE_MULTIPLIER * <Self as $crate::NonCoherent>::MULTIPLIER;
            const BASE_ADDER: $crate::Real =
                <$parent as $crate::UnitType>::BASE_ADDER +
                <$parent as $crate::UnitType>::BASE_MULTIPLIER *
                <Self as $crate::NonCoherent>::MULTIPLIER *
                <Self as $crate::NonCoherent>::ADDER;
        }
    };
}

// ----- Prefixed unit values ------------------------------------------------------------------

/// A value in unit `U` with prefix `P`, e.g. `Unit<Milli, Second>`.
///
/// Holds both the value as given (`value`) and its coherent SI equivalent
/// (`base_value`). All arithmetic works on `base_value`, so prefixes and
/// units can be mixed freely as long as the dimensions agree:
///
/// ```
/// use typesafe_units::{Unit, prefix::{Milli, Micro}, si::Second};
/// let t = Unit::<Milli, Second>::new(10.0) + Unit::<Micro, Second>::new(20_000.0);
/// assert!((t.base_value() - 0.03).abs() < 1e-6);
/// ```
///
/// ```compile_fail
/// use typesafe_units::{Unit, prefix::NoPrefix, si::{Metre, Second}};
/// let _ = Unit::<NoPrefix, Metre>::new(1.0) + Unit::<NoPrefix, Second>::new(1.0);
/// ```
pub struct Unit<P, U> {
    value: Real,
    base_value: Real,
    unit: PhantomData<(P, U)>,
}

impl<P: Prefix, U: UnitType> Unit<P, U> {

    /// `base_value = value * BASE_MULTIPLIER * 10^prefix + BASE_ADDER`
    pub const fn new(value: Real) -> Self {
        Self {
            value,
            base_value: value * U::BASE_MULTIPLIER * P::FACTOR + U::BASE_ADDER,
            unit: PhantomData,
        }
    }

    /// Re-express any value with the same dimensional root in this unit:
    /// `value = (base_value - BASE_ADDER) * 10^-prefix / BASE_MULTIPLIER`.
    pub fn convert<S>(source: S) -> Self
    where
        S: Dimensioned<Dimension = U::Dimension>,
    {
        Self::from_base_value(source.base_value())
    }

    fn from_base_value(base_value: Real) -> Self {
        Self {
            value: (base_value - U::BASE_ADDER) * P::INVERSE / U::BASE_MULTIPLIER,
            base_value,
            unit: PhantomData,
        }
    }

    /// The value in this unit and prefix
    pub const fn value(&self) -> Real { self.value }

    /// The value in coherent SI terms
    pub const fn base_value(&self) -> Real { self.base_value }
}

impl<P, U> Clone for Unit<P, U> { fn clone(&self) -> Self { *self } }
impl<P, U> Copy  for Unit<P, U> {}

impl<P: Prefix, U: UnitType> Dimensioned for Unit<P, U> {
    type Dimension = U::Dimension;
    fn base_value(&self) -> Real { self.base_value }
}

impl<P, U, D> From<Quantity<D>> for Unit<P, U>
where
    P: Prefix,
    U: UnitType<Dimension = D>,
{
    fn from(q: Quantity<D>) -> Self { Self::from_base_value(q.base_value()) }
}

impl<P, U, D> From<Unit<P, U>> for Quantity<D>
where
    U: UnitType<Dimension = D>,
{
    fn from(u: Unit<P, U>) -> Self { Quantity::new(u.base_value) }
}

/// Express `source` in unit `U` with prefix `P`.
///
/// ```
/// use typesafe_units::{convert_to, Unit, prefix::{Milli, NoPrefix}, si::Second, accepted::Minute};
/// let m = convert_to::<Milli, Second>(Unit::<NoPrefix, Minute>::new(1.0));
/// assert_eq!(m.value(), 60_000.0);
/// ```
pub fn convert_to<P, U>(source: impl Dimensioned<Dimension = U::Dimension>) -> Unit<P, U>
where
    P: Prefix,
    U: UnitType,
{
    Unit::convert(source)
}

// ----- Operators -----------------------------------------------------------------------------
//
// Every combination of `Unit` and `Quantity` operands works on the coherent
// values and yields a `Quantity`. `+`, `-` and comparisons demand identical
// dimension vectors; `*` and `/` combine them.

impl<P1, U1, P2, U2> Add<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType<Dimension = U1::Dimension>,
{
    type Output = Quantity<U1::Dimension>;
    fn add(self, rhs: Unit<P2, U2>) -> Self::Output { Quantity::new(self.base_value + rhs.base_value) }
}

impl<P1, U1, P2, U2> Sub<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType<Dimension = U1::Dimension>,
{
    type Output = Quantity<U1::Dimension>;
    fn sub(self, rhs: Unit<P2, U2>) -> Self::Output { Quantity::new(self.base_value - rhs.base_value) }
}

impl<P, U, D> Add<Quantity<D>> for Unit<P, U>
where
    U: UnitType<Dimension = D>,
{
    type Output = Quantity<D>;
    fn add(self, rhs: Quantity<D>) -> Quantity<D> { Quantity::new(self.base_value + rhs.base_value()) }
}

impl<P, U, D> Sub<Quantity<D>> for Unit<P, U>
where
    U: UnitType<Dimension = D>,
{
    type Output = Quantity<D>;
    fn sub(self, rhs: Quantity<D>) -> Quantity<D> { Quantity::new(self.base_value - rhs.base_value()) }
}

impl<D, P, U> Add<Unit<P, U>> for Quantity<D>
where
    U: UnitType<Dimension = D>,
{
    type Output = Quantity<D>;
    fn add(self, rhs: Unit<P, U>) -> Quantity<D> { Quantity::new(self.base_value() + rhs.base_value) }
}

impl<D, P, U> Sub<Unit<P, U>> for Quantity<D>
where
    U: UnitType<Dimension = D>,
{
    type Output = Quantity<D>;
    fn sub(self, rhs: Unit<P, U>) -> Quantity<D> { Quantity::new(self.base_value() - rhs.base_value) }
}

impl<P1, U1, P2, U2> Mul<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType,
    U1::Dimension: Zip<U2::Dimension, Plus>,
{
    type Output = Quantity<Product<U1::Dimension, U2::Dimension>>;
    fn mul(self, rhs: Unit<P2, U2>) -> Self::Output { Quantity::new(self.base_value * rhs.base_value) }
}

impl<P1, U1, P2, U2> Div<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType,
    U1::Dimension: Zip<U2::Dimension, Minus>,
{
    type Output = Quantity<Quotient<U1::Dimension, U2::Dimension>>;
    fn div(self, rhs: Unit<P2, U2>) -> Self::Output { Quantity::new(self.base_value / rhs.base_value) }
}

impl<P, U, R> Mul<Quantity<R>> for Unit<P, U>
where
    U: UnitType,
    U::Dimension: Zip<R, Plus>,
{
    type Output = Quantity<Product<U::Dimension, R>>;
    fn mul(self, rhs: Quantity<R>) -> Self::Output { Quantity::new(self.base_value * rhs.base_value()) }
}

impl<P, U, R> Div<Quantity<R>> for Unit<P, U>
where
    U: UnitType,
    U::Dimension: Zip<R, Minus>,
{
    type Output = Quantity<Quotient<U::Dimension, R>>;
    fn div(self, rhs: Quantity<R>) -> Self::Output { Quantity::new(self.base_value / rhs.base_value()) }
}

impl<L, P, U> Mul<Unit<P, U>> for Quantity<L>
where
    U: UnitType,
    L: Zip<U::Dimension, Plus>,
{
    type Output = Quantity<Product<L, U::Dimension>>;
    fn mul(self, rhs: Unit<P, U>) -> Self::Output { Quantity::new(self.base_value() * rhs.base_value) }
}

impl<L, P, U> Div<Unit<P, U>> for Quantity<L>
where
    U: UnitType,
    L: Zip<U::Dimension, Minus>,
{
    type Output = Quantity<Quotient<L, U::Dimension>>;
    fn div(self, rhs: Unit<P, U>) -> Self::Output { Quantity::new(self.base_value() / rhs.base_value) }
}

// Comparison goes through `base_value`, so 5 mm < 1 m.

impl<P1, U1, P2, U2> PartialEq<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType<Dimension = U1::Dimension>,
{
    fn eq(&self, other: &Unit<P2, U2>) -> bool { self.base_value == other.base_value }
}

impl<P1, U1, P2, U2> PartialOrd<Unit<P2, U2>> for Unit<P1, U1>
where
    U1: UnitType,
    U2: UnitType<Dimension = U1::Dimension>,
{
    fn partial_cmp(&self, other: &Unit<P2, U2>) -> Option<Ordering> {
        self.base_value.partial_cmp(&other.base_value)
    }
}

impl<P, U, D> PartialEq<Quantity<D>> for Unit<P, U>
where
    U: UnitType<Dimension = D>,
{
    fn eq(&self, other: &Quantity<D>) -> bool { self.base_value == other.base_value() }
}

impl<P, U, D> PartialOrd<Quantity<D>> for Unit<P, U>
where
    U: UnitType<Dimension = D>,
{
    fn partial_cmp(&self, other: &Quantity<D>) -> Option<Ordering> {
        self.base_value.partial_cmp(&other.base_value())
    }
}

impl<D, P, U> PartialEq<Unit<P, U>> for Quantity<D>
where
    U: UnitType<Dimension = D>,
{
    fn eq(&self, other: &Unit<P, U>) -> bool { self.base_value() == other.base_value }
}

impl<D, P, U> PartialOrd<Unit<P, U>> for Quantity<D>
where
    U: UnitType<Dimension = D>,
{
    fn partial_cmp(&self, other: &Unit<P, U>) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value)
    }
}
