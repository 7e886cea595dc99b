// ============================================================================
// Menu Core - Price Value
// File: crates/menu-core/src/domain/price.rs
// Description: Dish price with two fractional digits
// ============================================================================

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidationError;

use menu_shared::constants::{
    PRICE_INPUT_MAX_LEN, PRICE_INPUT_MAX_SCALE, PRICE_INTEGER_DIGITS, PRICE_SCALE,
};

/// Rejected price input. Checked before any rescaling, so exponent-form
/// text such as `1e100000000` never reaches the bigint arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("invalid price: {0}")]
    Invalid(String),

    #[error("price out of range")]
    OutOfRange,
}

/// Dish price, always held rounded half-up to two decimal places.
///
/// Serialized as a string (`"7.78"`). Deserializes from either a JSON string
/// or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(value: BigDecimal) -> Self {
        Self(value.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp))
    }

    /// Rounds `value` after checking it has at most one integer digit more
    /// than the column holds and a bounded number of fractional digits.
    pub fn bounded(value: BigDecimal) -> Result<Self, PriceError> {
        let (_, scale) = value.as_bigint_and_exponent();
        let integer_digits = value.digits() as i64 - scale;

        if integer_digits > PRICE_INTEGER_DIGITS as i64 + 1 || scale > PRICE_INPUT_MAX_SCALE {
            return Err(PriceError::OutOfRange);
        }
        Ok(Self::new(value))
    }

    pub fn zero() -> Self {
        Self::new(BigDecimal::from(0))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Whether the value fits a `NUMERIC(10, 2)` column.
    pub fn fits_column(&self) -> bool {
        self.0.abs() < BigDecimal::from(10u64.pow(PRICE_INTEGER_DIGITS))
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() > PRICE_INPUT_MAX_LEN {
            return Err(PriceError::OutOfRange);
        }
        let value = BigDecimal::from_str(s).map_err(|e| PriceError::Invalid(e.to_string()))?;
        Self::bounded(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or a decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        match Price::from_str(v) {
            Ok(price) => Ok(price),
            Err(PriceError::Invalid(_)) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            Err(err) => Err(E::custom(err)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price::new(BigDecimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price::new(BigDecimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        // shortest round-trip text, so 7.777 stays 7.777
        self.visit_str(&v.to_string())
    }
}

pub(crate) fn validate_price(price: &Price) -> Result<(), ValidationError> {
    if price.fits_column() {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_range");
        err.message = Some("Price must be below 100000000".into());
        Err(err)
    }
}
