/// Compare two dimensioned values (any mix of [`Unit`](crate::Unit) and
/// [`Quantity`](crate::Quantity)) by their coherent SI values, with
/// `float_eq` tolerances.
///
/// Both sides must have the same dimension vector:
///
/// ```
/// use typesafe_units::{assert_base_eq, Unit, prefix::{Milli, NoPrefix}, si::Second, accepted::Minute};
/// assert_base_eq!(Unit::<NoPrefix, Minute>::new(1.0), Unit::<Milli, Second>::new(60_000.0), ulps <= 1);
/// ```
///
/// ```compile_fail
/// use typesafe_units::{assert_base_eq, Unit, prefix::NoPrefix, si::{Metre, Second}};
/// assert_base_eq!(Unit::<NoPrefix, Metre>::new(1.0), Unit::<NoPrefix, Second>::new(1.0), ulps <= 1);
/// ```
#[macro_export]
macro_rules! assert_base_eq {
    ($lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                $crate::__same_dimension(lhs, rhs);
                $crate::float_eq::assert_float_eq!(
                    $crate::Dimensioned::base_value(lhs),
                    $crate::Dimensioned::base_value(rhs),
                    $algo <= $tol
                )
            }
        }
    };
}

#[doc(hidden)]
pub fn __same_dimension<L, R>(_: &L, _: &R)
where
    L: crate::Dimensioned,
    R: crate::Dimensioned<Dimension = L::Dimension>,
{}

#[cfg(test)]
mod tests {
    use crate::accepted::{Degree, Hour};
    use crate::prefix::{Kilo, NoPrefix};
    use crate::si::{Radian, Second};
    use crate::{Dimensioned, Unit};

    #[test]
    fn mixed_operands() {
        let h = Unit::<NoPrefix, Hour>::new(1.0);
        assert_base_eq!(h, Unit::<Kilo, Second>::new(3.6), r2nd <= 1e-6);
        assert_base_eq!(h.to_quantity(), h, ulps <= 0);
        assert_base_eq!(Unit::<NoPrefix, Degree>::new(180.0), Unit::<NoPrefix, Radian>::new(std::f32::consts::PI as crate::Real), r2nd <= 1e-6);
    }

    #[test]
    #[should_panic]
    fn unequal_values_fail() {
        assert_base_eq!(Unit::<NoPrefix, Hour>::new(1.0), Unit::<NoPrefix, Second>::new(3599.0), ulps <= 4);
    }
}
