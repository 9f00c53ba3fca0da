//! Values read and written as plain numbers.
//!
//! A [`Unit`] is written as its `value`, in its own unit and prefix, and a
//! [`Quantity`] as its coherent `base_value`. Reading reverses this, so the
//! unit of a number in a configuration file is fixed by the type of the field
//! it lands in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::prefix::Prefix;
use crate::quantity::Quantity;
use crate::unit::{Unit, UnitType};
use crate::Real;

impl<P, U> Serialize for Unit<P, U>
where
    P: Prefix,
    U: UnitType,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'d, P, U> Deserialize<'d> for Unit<P, U>
where
    P: Prefix,
    U: UnitType,
{
    fn deserialize<D: Deserializer<'d>>(deserializer: D) -> Result<Self, D::Error> {
        Real::deserialize(deserializer).map(Unit::new)
    }
}

impl<D> Serialize for Quantity<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.base_value().serialize(serializer)
    }
}

impl<'d, D> Deserialize<'d> for Quantity<D> {
    fn deserialize<De: Deserializer<'d>>(deserializer: De) -> Result<Self, De::Error> {
        Real::deserialize(deserializer).map(Quantity::new)
    }
}
