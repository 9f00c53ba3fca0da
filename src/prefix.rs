//! SI prefixes, from quecto (10⁻³⁰) to quetta (10³⁰).
//!
//! Each prefix is a zero-size type, so that the prefix of a
//! [`Unit`](crate::Unit) is part of its type.

use crate::Real;

/// `10^exponent`, evaluated at compile time.
///
/// Computed in `f64` by repeated multiplication (exact up to 10²²) and
/// rounded once to `Real`.
pub const fn pow10(exponent: i32) -> Real {
    let mut magnitude: f64 = 1.0;
    let mut i = 0;
    while i < exponent.unsigned_abs() {
        magnitude *= 10.0;
        i += 1;
    }
    if exponent < 0 { (1.0 / magnitude) as Real }
    else            {        magnitude  as Real }
}

pub trait Prefix {
    const NAME:     &'static str;
    const SYMBOL:   &'static str;
    /// Power of ten: milli is -3
    const EXPONENT: i32;

    /// `10^EXPONENT`
    const FACTOR:  Real = pow10( Self::EXPONENT);
    /// `10^-EXPONENT`
    const INVERSE: Real = pow10(-Self::EXPONENT);
}

macro_rules! prefixes {
    ($($(#[$attr:meta])* $type:ident $name:literal $symbol:literal $exponent:literal;)+) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $type;

            impl Prefix for $type {
                const NAME:     &'static str = $name;
                const SYMBOL:   &'static str = $symbol;
                const EXPONENT: i32          = $exponent;
            }
        )+

        /// `(name, symbol, exponent)` of every prefix, smallest first
        pub const ALL: &[(&str, &str, i32)] = &[$(($name, $symbol, $exponent)),+];
    };
}

prefixes! {
    Quecto    "quecto" "q" -30;
    Ronto     "ronto"  "r" -27;
    Yocto     "yocto"  "y" -24;
    Zepto     "zepto"  "z" -21;
    Atto      "atto"   "a" -18;
    Femto     "femto"  "f" -15;
    Pico      "pico"   "p" -12;
    Nano      "nano"   "n"  -9;
    Micro     "micro"  "µ"  -6;
    Milli     "milli"  "m"  -3;
    Centi     "centi"  "c"  -2;
    Deci      "deci"   "d"  -1;
    /// The unit itself, unscaled
    NoPrefix  ""       ""    0;
    Deca      "deca"   "da"  1;
    Hecto     "hecto"  "h"   2;
    Kilo      "kilo"   "k"   3;
    Mega      "mega"   "M"   6;
    Giga      "giga"   "G"   9;
    Tera      "tera"   "T"  12;
    Peta      "peta"   "P"  15;
    Exa       "exa"    "E"  18;
    Zetta     "zetta"  "Z"  21;
    Yotta     "yotta"  "Y"  24;
    Ronna     "ronna"  "R"  27;
    Quetta    "quetta" "Q"  30;
}
