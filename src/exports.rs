/// The numeric payload of every value. `f32` unless the `f64` feature is on.
#[cfg(not(feature = "f64"))] pub type Real = f32;
#[cfg(    feature = "f64" )] pub type Real = f64;

pub use crate::quantity::{Quantity, Dimensioned};
pub use crate::unit::{Unit, UnitType, Coherent, NonCoherent, convert_to};
pub use crate::dimension::{Dim, Dimension, Dimensionless, Scalar};
pub use crate::ratio::{Rational, Exponent};
pub use crate::prefix::Prefix;
pub use crate::ops::{pow, sqrt, unop};

pub use typenum;

#[doc(hidden)] pub use float_eq;
#[doc(hidden)] pub use crate::macros::__same_dimension;
