//! Non-SI units accepted for use with the SI, each defined as an affine map
//! onto a parent unit: `value_in_parent = (value + adder) * multiplier`.

use std::f64::consts::PI;

use crate::non_coherent_unit;
use crate::si::{CubicMetre, Joule, Kelvin, Kilogram, Metre, Radian, Second, SquareMetre};

// ----- Time ----------------------------------------------------------------------------------
non_coherent_unit!(Minute, "min", 60.0, 0.0, Second);
non_coherent_unit!(Hour,   "h",   60.0, 0.0, Minute);
non_coherent_unit!(Day,    "d",   24.0, 0.0, Hour);

// ----- Length and area -----------------------------------------------------------------------
non_coherent_unit!(AstronomicalUnit, "au", 149_597_870_700.0, 0.0, Metre);
non_coherent_unit!(Hectare,          "ha", 1e4,               0.0, SquareMetre);

// ----- Plane angle ---------------------------------------------------------------------------
non_coherent_unit!(Degree,    "°", PI / 180.0, 0.0, Radian);
non_coherent_unit!(ArcMinute, "′", 1.0 / 60.0, 0.0, Degree);
non_coherent_unit!(ArcSecond, "″", 1.0 / 60.0, 0.0, ArcMinute);

// ----- Volume and mass -----------------------------------------------------------------------
non_coherent_unit!(Litre,  "L",  1e-3,              0.0, CubicMetre);
non_coherent_unit!(Tonne,  "t",  1e3,               0.0, Kilogram);
/// Needed so that `Unit<Milli, Gram>` means milligram
non_coherent_unit!(Gram,   "g",  1e-3,              0.0, Kilogram);
non_coherent_unit!(Dalton, "Da", 1.660_539_066_60e-27, 0.0, Kilogram);

// ----- Energy --------------------------------------------------------------------------------
non_coherent_unit!(Electronvolt, "eV", 1.602_176_634e-19, 0.0, Joule);

// ----- Temperature ---------------------------------------------------------------------------
non_coherent_unit!(DegreeCelsius,    "°C", 1.0,       273.15, Kelvin);
/// Not accepted for use with the SI, but common enough to ship
non_coherent_unit!(DegreeFahrenheit, "°F", 1.0 / 1.8, -32.0,  DegreeCelsius);
