// Each statement below must be rejected by the compiler. Build with
// `--features compile-error` to inspect the diagnostics.
#![cfg(feature = "compile-error")]

use typesafe_units::prelude::*;

#[test]
fn dimension_mismatches() {
    // Length plus time
    let _ = Unit::<NoPrefix, Metre>::new(1.0) + Unit::<NoPrefix, Second>::new(1.0);
    // Comparing energy with power
    let _ = Unit::<NoPrefix, Joule>::new(1.0) < Unit::<NoPrefix, Watt>::new(1.0);
    // Converting temperature into time
    let _ = convert_to::<NoPrefix, Minute>(Unit::<NoPrefix, DegreeCelsius>::new(1.0));
    // Naming the result with the wrong unit
    let _: Unit<NoPrefix, Newton> = (Unit::<NoPrefix, Kilogram>::new(1.0) * Unit::<NoPrefix, MetrePerSecond>::new(1.0)).into();
}

#[test]
fn real_function_of_dimensioned_value() {
    let _ = sin(Unit::<NoPrefix, Metre>::new(1.0));
    let _ = unop(|x| x, Unit::<NoPrefix, Hertz>::new(1.0));
}

typesafe_units::non_coherent_unit!(Nothing, "∅", 0.0, 0.0, Second);
