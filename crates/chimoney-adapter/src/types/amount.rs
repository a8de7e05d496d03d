/*
[INPUT]:  Decimal amounts on request and model fields
[OUTPUT]: JSON numbers: integers for whole amounts, floats otherwise
[POS]:    Types layer - serde codec for monetary fields
[UPDATE]: When the API changes how it reads amounts
*/

//! Serde codec for `#[serde(with = "crate::types::amount")]` fields.
//!
//! Whole amounts go out as JSON integers (`10`, not `10.0`). Fractional
//! amounts go out as JSON floats. Decoding accepts either.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::Error as _;
use serde::{Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    let float = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("amount {value} is not representable")))?;
    serializer.serialize_f64(float)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    rust_decimal::serde::float::deserialize(deserializer)
}
