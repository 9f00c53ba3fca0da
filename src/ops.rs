//! Free-function forms of the operations on dimensioned values, and the
//! adapter which lets ordinary real functions act on scalar values.

use crate::dimension::{Dimensionless, Power, Scalar, Times, Uniform, Zip};
use crate::quantity::{Dimensioned, Quantity};
use crate::ratio::{Half, IntoExponent};
use crate::Real;

/// `x` raised to the power `E`: see [`Dimensioned::pow`].
///
/// ```
/// use typesafe_units::{ops::pow, Unit, prefix::Milli, si::Second, typenum::P2};
/// let t2 = pow::<P2, _>(Unit::<Milli, Second>::new(20.0));
/// assert!((t2.base_value() - 4e-4).abs() < 1e-9);
/// ```
pub fn pow<E, X>(x: X) -> Quantity<Power<X::Dimension, E::Output>>
where
    E: IntoExponent,
    X: Dimensioned,
    X::Dimension: Zip<Uniform<E::Output>, Times>,
{
    x.pow::<E>()
}

pub fn sqrt<X>(x: X) -> Quantity<Power<X::Dimension, Half>>
where
    X: Dimensioned,
    X::Dimension: Zip<Uniform<Half>, Times>,
{
    x.sqrt()
}

/// Apply `f` to the coherent value of `x`. Only values whose dimension
/// vector is all zeros are accepted: angles, ratios, counts.
///
/// ```
/// use typesafe_units::{ops::unop, Unit, prefix::NoPrefix, accepted::Degree};
/// let y = unop(|x| 2.0 * x, Unit::<NoPrefix, Degree>::new(90.0));
/// assert!((y.base_value() - std::f32::consts::PI as typesafe_units::Real).abs() < 1e-6);
/// ```
///
/// ```compile_fail
/// use typesafe_units::{ops::unop, Unit, prefix::NoPrefix, si::Metre};
/// let _ = unop(f32::sin, Unit::<NoPrefix, Metre>::new(1.0));
/// ```
pub fn unop<F, X>(f: F, x: X) -> Quantity<Dimensionless>
where
    F: FnOnce(Real) -> Real,
    X: Dimensioned,
    X::Dimension: Scalar,
{
    Quantity::new(f(x.base_value()))
}

macro_rules! real_functions {
    ($($(#[$attr:meta])* $name:ident)*) => {
        $(
            $(#[$attr])*
            pub fn $name<X>(x: X) -> Quantity<Dimensionless>
            where
                X: Dimensioned,
                X::Dimension: Scalar,
            {
                unop(Real::$name, x)
            }
        )*
    };
}

real_functions! {
    sin cos tan
    /// `e^x` of a dimensionless value
    exp
    ln
}
