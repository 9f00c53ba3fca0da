//! Physical quantities whose dimensions are checked by the compiler.
//!
//! Every value carries a vector of seven rational exponents (time, length,
//! mass, current, temperature, amount, luminous intensity) in its type. `+`,
//! `-` and comparisons demand identical vectors; `*`, `/`, `pow` and `sqrt`
//! compute new ones. At run time a value is just its number.
//!
//! ```
//! use typesafe_units::prelude::*;
//!
//! let d = Unit::<Kilo,     Metre>::new(42.195);
//! let t = Unit::<NoPrefix, Hour >::new(2.0) + Unit::<NoPrefix, Minute>::new(1.0);
//! let v: Unit<NoPrefix, MetrePerSecond> = (d / t).into();
//! assert!((v.value() - 5.812).abs() < 1e-3);
//! ```
//!
//! Mistakes are type errors:
//!
//! ```compile_fail
//! use typesafe_units::prelude::*;
//! let _ = Unit::<NoPrefix, Metre>::new(1.0) + Unit::<NoPrefix, Second>::new(1.0);
//! ```
//!
//! ```compile_fail
//! use typesafe_units::prelude::*;
//! let _: Unit<NoPrefix, Second> = convert_to::<NoPrefix, Second>(Unit::<NoPrefix, Metre>::new(1.0));
//! ```
//!
//! ```compile_fail
//! use typesafe_units::prelude::*;
//! let _ = sin(Unit::<NoPrefix, Metre>::new(1.0));
//! ```
//!
//! Exponents must have a positive denominator:
//!
//! ```compile_fail
//! use typesafe_units::{prelude::*, Rational, typenum::{P1, Z0}};
//! let _ = Unit::<NoPrefix, Metre>::new(1.0).pow::<Rational<P1, Z0>>();
//! ```
//!
//! ```compile_fail
//! use typesafe_units::{Dim, Dimension, Rational, ratio::Zero, typenum::{P1, N2}};
//! let _ = <Dim<Rational<P1, N2>, Zero, Zero, Zero, Zero, Zero, Zero> as Dimension>::EXPONENTS;
//! ```
//!
//! and be in lowest terms, otherwise `Rational<P2, P4>` and `Rational<P1, P2>`
//! would be distinct dimensions:
//!
//! ```compile_fail
//! use typesafe_units::{Dim, Dimension, Rational, ratio::Zero, typenum::{P2, P4}};
//! let _ = <Dim<Rational<P2, P4>, Zero, Zero, Zero, Zero, Zero, Zero> as Dimension>::EXPONENTS;
//! ```
//!
//! Comparison and quantity arithmetic check dimensions just like unit
//! arithmetic does:
//!
//! ```compile_fail
//! use typesafe_units::prelude::*;
//! let _ = Unit::<NoPrefix, Joule>::new(1.0) < Unit::<NoPrefix, Watt>::new(1.0);
//! ```
//!
//! ```compile_fail
//! use typesafe_units::prelude::*;
//! let _ = Unit::<NoPrefix, Metre>::new(1.0).to_quantity() + Unit::<NoPrefix, Second>::new(1.0).to_quantity();
//! ```

mod exports;
pub use exports::*;

pub mod ratio;
pub mod dimension;
pub mod quantity;
pub mod prefix;
pub mod unit;
pub mod ops;
pub mod si;
pub mod accepted;
pub mod fmt;
mod ser;
mod macros;

/// Units, prefixes and operations, for glob import.
///
/// Only the prefix types are included; the prefix table and its helpers stay
/// in [`prefix`]:
///
/// ```compile_fail
/// use typesafe_units::prelude::ALL;
/// ```
///
/// ```compile_fail
/// use typesafe_units::prelude::pow10;
/// ```
pub mod prelude {
    pub use crate::{Unit, Quantity, Dimensioned, convert_to};
    pub use crate::ops::{pow, sqrt, unop, sin, cos, tan};
    pub use crate::prefix::{
        Prefix,
        Quecto, Ronto, Yocto, Zepto, Atto, Femto, Pico, Nano, Micro, Milli, Centi, Deci,
        NoPrefix,
        Deca, Hecto, Kilo, Mega, Giga, Tera, Peta, Exa, Zetta, Yotta, Ronna, Quetta,
    };
    pub use crate::si::*;
    pub use crate::accepted::*;
}
