//! Human-readable rendering of values.
//!
//! A [`Unit`] prints in its own unit: `Unit::<Milli, Second>::new(5.0)` is
//! `5 ms`. A [`Quantity`] has no unit of its own, so it prints its coherent
//! value followed by the SI base units: `0.0002 s·A`, `9.81 s⁻²·m`.
//!
//! Formatting flags (precision, width, ...) apply to the number.

use std::fmt;

use itertools::Itertools;

use crate::dimension::{Dimension, BASE_SYMBOLS};
use crate::prefix::Prefix;
use crate::quantity::Quantity;
use crate::unit::{Unit, UnitType};

impl<P: Prefix, U: UnitType> fmt::Display for Unit<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)?;
        write!(f, " {}{}", P::SYMBOL, U::SYMBOL)
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base_value(), f)?;
        let symbol = base_symbol::<D>();
        if !symbol.is_empty() { write!(f, " {symbol}")?; }
        Ok(())
    }
}

impl<P: Prefix, U: UnitType> fmt::Debug for Unit<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("value", &self.value())
            .field("unit", &format_args!("{}{}", P::SYMBOL, U::SYMBOL))
            .field("base_value", &self.base_value())
            .finish()
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("base_value", &self.base_value())
            .field("dimension", &format_args!("[{}]", base_symbol::<D>()))
            .finish()
    }
}

/// The coherent SI unit of `D`, e.g. `s⁻²·m·kg` for force. Empty when `D`
/// is dimensionless.
pub fn base_symbol<D: Dimension>() -> String {
    D::EXPONENTS.iter()
        .zip(BASE_SYMBOLS)
        .filter(|((num, _), _)| *num != 0)
        .map(|(&(num, den), symbol)| format!("{symbol}{}", exponent(num, den)))
        .join("·")
}

fn exponent(num: i64, den: i64) -> String {
    match (num, den) {
        (1, 1) => String::new(),
        (n, 1) => superscript(n),
        (n, d) => format!("^({n}/{d})"),
    }
}

fn superscript(n: i64) -> String {
    n.to_string().chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
            '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
            other => other,
        })
        .collect()
}
