//! Coherent SI units: the seven base units, the 22 named derived units, and a
//! few unnamed derived units which serve as parents of accepted units.
//!
//! Exponent order: time, length, mass, current, temperature, amount,
//! luminous intensity.

use typenum::{N1, N2, N3, P1, P2, P3, P4, Z0};

use crate::coherent_unit;

// ----- Base units ----------------------------------------------------------------------------
coherent_unit!(Second,   "s",   [P1, Z0, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Metre,    "m",   [Z0, P1, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Kilogram, "kg",  [Z0, Z0, P1, Z0, Z0, Z0, Z0]);
coherent_unit!(Ampere,   "A",   [Z0, Z0, Z0, P1, Z0, Z0, Z0]);
coherent_unit!(Kelvin,   "K",   [Z0, Z0, Z0, Z0, P1, Z0, Z0]);
coherent_unit!(Mole,     "mol", [Z0, Z0, Z0, Z0, Z0, P1, Z0]);
coherent_unit!(Candela,  "cd",  [Z0, Z0, Z0, Z0, Z0, Z0, P1]);

// ----- Named derived units -------------------------------------------------------------------
coherent_unit!(Hertz,     "Hz",  [N1, Z0, Z0, Z0, Z0, Z0, Z0]);
/// Plane angle. Dimensionless, so interchangeable with any ratio.
coherent_unit!(Radian,    "rad", [Z0, Z0, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Steradian, "sr",  [Z0, Z0, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Newton,    "N",   [N2, P1, P1, Z0, Z0, Z0, Z0]);
coherent_unit!(Pascal,    "Pa",  [N2, N1, P1, Z0, Z0, Z0, Z0]);
coherent_unit!(Joule,     "J",   [N2, P2, P1, Z0, Z0, Z0, Z0]);
coherent_unit!(Watt,      "W",   [N3, P2, P1, Z0, Z0, Z0, Z0]);
coherent_unit!(Coulomb,   "C",   [P1, Z0, Z0, P1, Z0, Z0, Z0]);
coherent_unit!(Volt,      "V",   [N3, P2, P1, N1, Z0, Z0, Z0]);
coherent_unit!(Farad,     "F",   [P4, N2, N1, P2, Z0, Z0, Z0]);
coherent_unit!(Ohm,       "Ω",   [N3, P2, P1, N2, Z0, Z0, Z0]);
coherent_unit!(Siemens,   "S",   [P3, N2, N1, P2, Z0, Z0, Z0]);
coherent_unit!(Weber,     "Wb",  [N2, P2, P1, N1, Z0, Z0, Z0]);
coherent_unit!(Tesla,     "T",   [N2, Z0, P1, N1, Z0, Z0, Z0]);
coherent_unit!(Henry,     "H",   [N2, P2, P1, N2, Z0, Z0, Z0]);
/// cd·sr, and steradian is dimensionless
coherent_unit!(Lumen,     "lm",  [Z0, Z0, Z0, Z0, Z0, Z0, P1]);
coherent_unit!(Lux,       "lx",  [Z0, N2, Z0, Z0, Z0, Z0, P1]);
coherent_unit!(Becquerel, "Bq",  [N1, Z0, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Gray,      "Gy",  [N2, P2, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Sievert,   "Sv",  [N2, P2, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(Katal,     "kat", [N1, Z0, Z0, Z0, Z0, P1, Z0]);

// ----- Unnamed derived units -----------------------------------------------------------------
coherent_unit!(MetrePerSecond,        "m/s",  [N1, P1, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(MetrePerSecondSquared, "m/s²", [N2, P1, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(SecondSquared,         "s²",   [P2, Z0, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(SquareMetre,           "m²",   [Z0, P2, Z0, Z0, Z0, Z0, Z0]);
coherent_unit!(CubicMetre,            "m³",   [Z0, P3, Z0, Z0, Z0, Z0, Z0]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Dimension, Product, Quotient};
    use crate::{Coherent, UnitType};
    use pretty_assertions::assert_eq;

    fn same<A, B>() where A: Same<B> {}
    trait Same<T> {}
    impl<T> Same<T> for T {}

    type D<U> = <U as UnitType>::Dimension;

    fn coherent<U: Coherent>() -> (crate::Real, crate::Real) { (U::BASE_MULTIPLIER, U::BASE_ADDER) }

    #[test]
    fn derived_units_follow_from_base_units() {
        same::<Quotient<D<Metre>, D<Second>>, D<MetrePerSecond>>();
        same::<Product<D<Kilogram>, D<MetrePerSecondSquared>>, D<Newton>>();
        same::<Quotient<D<Newton>, D<SquareMetre>>, D<Pascal>>();
        same::<Product<D<Newton>, D<Metre>>, D<Joule>>();
        same::<Quotient<D<Joule>, D<Second>>, D<Watt>>();
        same::<Product<D<Ampere>, D<Second>>, D<Coulomb>>();
        same::<Quotient<D<Watt>, D<Ampere>>, D<Volt>>();
        same::<Quotient<D<Coulomb>, D<Volt>>, D<Farad>>();
        same::<Quotient<D<Volt>, D<Ampere>>, D<Ohm>>();
        same::<Quotient<D<Ampere>, D<Volt>>, D<Siemens>>();
        same::<Product<D<Volt>, D<Second>>, D<Weber>>();
        same::<Quotient<D<Weber>, D<SquareMetre>>, D<Tesla>>();
        same::<Quotient<D<Weber>, D<Ampere>>, D<Henry>>();
        same::<Product<D<Candela>, D<Steradian>>, D<Lumen>>();
        same::<Quotient<D<Lumen>, D<SquareMetre>>, D<Lux>>();
        same::<Quotient<D<Joule>, D<Kilogram>>, D<Gray>>();
        same::<Quotient<D<Mole>, D<Second>>, D<Katal>>();
        same::<Product<D<Metre>, D<SquareMetre>>, D<CubicMetre>>();
        same::<Product<D<Second>, D<Second>>, D<SecondSquared>>();
    }

    #[test]
    fn coherent_units_are_unscaled() {
        assert_eq!(coherent::<Second>(), (1.0, 0.0));
        assert_eq!(coherent::<Kelvin>(), (1.0, 0.0));
        assert_eq!(coherent::<Farad>(),  (1.0, 0.0));
    }

    #[test]
    fn exponents_and_symbols() {
        assert_eq!(D::<Volt>::EXPONENTS, [(-3, 1), (2, 1), (1, 1), (-1, 1), (0, 1), (0, 1), (0, 1)]);
        assert!(D::<Radian>::is_scalar());
        assert!(!D::<Hertz>::is_scalar());
        assert_eq!(Ohm::SYMBOL, "Ω");
        assert_eq!(Katal::SYMBOL, "kat");
    }
}
