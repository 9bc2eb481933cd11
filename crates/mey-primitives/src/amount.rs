//! Token amounts with display units
//!
//! Values are stored as arbitrary-precision integers in the base unit (gas).
//! Unit conversion is done by moving the decimal point in the decimal string,
//! never through floating point: unit exponents reach 18 digits.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use thiserror::Error;

use crate::unit::{Unit, DEFAULT_NETWORK_UNIT, DEFAULT_USER_UNIT};

/// Amount error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Unit label not in the unit table
    #[error("unrecognized unit: {0}")]
    UnrecognizedUnit(String),

    /// Input cannot be interpreted as an amount at all
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// Numeral is not a whole number of base units
    #[error("cannot convert {0} to an integer amount")]
    InvalidNumber(String),

    /// Division by an amount of zero
    #[error("division by zero")]
    DivisionByZero,

    /// Negative amounts have no byte encoding
    #[error("negative amount {0} cannot be encoded as bytes")]
    NegativeValue(BigInt),
}

/// Anything that can be turned into an [`Amount`].
///
/// Strings and numbers are read in a display unit (default mey);
/// big integers and byte buffers carry the base-unit value directly.
#[derive(Debug, Clone)]
pub enum AmountArg {
    /// `"<number> <unit>"` or a bare numeral
    Text(String),
    /// Whole number
    Integer(i128),
    /// Decimal number, converted via its shortest decimal representation
    Float(f64),
    /// Raw base-unit integer
    BigInt(BigInt),
    /// Big-endian base-unit integer
    Bytes(Vec<u8>),
    /// Existing amount, passed through unchanged
    Amount(Amount),
}

impl AmountArg {
    /// True if the argument itself names a unit
    fn has_explicit_unit(&self) -> bool {
        match self {
            AmountArg::Text(s) => !split_numeral(s).1.is_empty(),
            AmountArg::Amount(a) => a.unit.is_some(),
            _ => false,
        }
    }
}

impl From<&str> for AmountArg {
    fn from(v: &str) -> Self {
        AmountArg::Text(v.to_string())
    }
}

impl From<String> for AmountArg {
    fn from(v: String) -> Self {
        AmountArg::Text(v)
    }
}

macro_rules! impl_integer_arg {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountArg {
                fn from(v: $t) -> Self {
                    AmountArg::Integer(i128::from(v))
                }
            }
        )*
    };
}

impl_integer_arg!(i32, i64, u32, u64);

impl From<f64> for AmountArg {
    fn from(v: f64) -> Self {
        AmountArg::Float(v)
    }
}

impl From<BigInt> for AmountArg {
    fn from(v: BigInt) -> Self {
        AmountArg::BigInt(v)
    }
}

impl From<Vec<u8>> for AmountArg {
    fn from(v: Vec<u8>) -> Self {
        AmountArg::Bytes(v)
    }
}

impl From<&[u8]> for AmountArg {
    fn from(v: &[u8]) -> Self {
        AmountArg::Bytes(v.to_vec())
    }
}

impl From<Amount> for AmountArg {
    fn from(v: Amount) -> Self {
        AmountArg::Amount(v)
    }
}

impl From<&Amount> for AmountArg {
    fn from(v: &Amount) -> Self {
        AmountArg::Amount(v.clone())
    }
}

/// Split `"<numeral> <unit>"` at the first space. The unit token is the text
/// up to the next space, possibly empty.
fn split_numeral(s: &str) -> (&str, &str) {
    let mut parts = s.split(' ');
    let numeral = parts.next().unwrap_or("");
    let unit = parts.next().unwrap_or("");
    (numeral, unit)
}

fn parse_integer(numeral: &str, shifted: &str) -> Result<BigInt, AmountError> {
    BigInt::from_str(shifted).map_err(|_| AmountError::InvalidNumber(numeral.to_string()))
}

/// Base-unit value of `numeral` read in `unit` (empty = default user unit)
fn value_from_str(numeral: &str, unit: &str) -> Result<BigInt, AmountError> {
    let unit = match Unit::parse_optional(unit)? {
        Some(unit) => unit,
        None => DEFAULT_USER_UNIT,
    };
    if unit.decimals() > 0 {
        let shifted = Amount::move_decimal_point(numeral, unit.decimals() as i32);
        parse_integer(numeral, &shifted)
    } else {
        parse_integer(numeral, numeral)
    }
}

fn float_numeral(v: f64) -> Result<String, AmountError> {
    if !v.is_finite() {
        return Err(AmountError::UnsupportedValueType(format!("{v} (non-finite number)")));
    }
    Ok(format!("{v}"))
}

/// Token amount: base-unit integer plus a display unit.
///
/// Equality, ordering and hashing consider only the value, so
/// `1 mey == 1000000000000000000 gas`.
#[derive(Debug, Clone)]
pub struct Amount {
    value: BigInt,
    unit: Option<Unit>,
}

impl Amount {
    /// Parse an amount without an explicit unit argument.
    ///
    /// Strings may carry a trailing unit (`"10 gas"`); otherwise strings and
    /// numbers are read as mey, big integers and bytes as gas.
    pub fn new(value: impl Into<AmountArg>) -> Result<Self, AmountError> {
        Self::construct(value.into(), "", None)
    }

    /// Parse an amount in `unit`. A non-empty `unit` takes precedence over a
    /// unit token inside a string.
    pub fn with_unit(value: impl Into<AmountArg>, unit: &str) -> Result<Self, AmountError> {
        Self::construct(value.into(), unit, None)
    }

    /// Parse in `unit`, then display in `display_unit` (empty = unit-less)
    pub fn with_display_unit(
        value: impl Into<AmountArg>,
        unit: &str,
        display_unit: &str,
    ) -> Result<Self, AmountError> {
        Self::construct(value.into(), unit, Some(display_unit))
    }

    /// Amount of `value` gas shown in `unit`
    pub fn from_base_units(value: BigInt, unit: Option<Unit>) -> Self {
        Amount { value, unit }
    }

    fn construct(
        arg: AmountArg,
        unit: &str,
        display_unit: Option<&str>,
    ) -> Result<Self, AmountError> {
        let (value, label) = match arg {
            AmountArg::Amount(amount) => return Ok(amount),
            AmountArg::Text(s) => {
                let (numeral, token) = split_numeral(&s);
                let label = if unit.is_empty() { token } else { unit };
                (value_from_str(numeral, label)?, label.to_string())
            }
            AmountArg::Integer(v) => (value_from_str(&v.to_string(), unit)?, unit.to_string()),
            AmountArg::Float(v) => (value_from_str(&float_numeral(v)?, unit)?, unit.to_string()),
            AmountArg::BigInt(v) => (v, network_label(unit)),
            AmountArg::Bytes(bytes) => {
                (BigInt::from_bytes_be(Sign::Plus, &bytes), network_label(unit))
            }
        };

        let mut unit = match Unit::parse_optional(&label)? {
            Some(unit) => Some(unit),
            None => Some(DEFAULT_USER_UNIT),
        };
        if let Some(display) = display_unit {
            unit = Unit::parse_optional(display)?;
        }

        Ok(Amount { value, unit })
    }

    /// Value in the base unit
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Display unit, `None` for unit-less amounts
    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// True if the amount has no display unit
    pub fn is_unitless(&self) -> bool {
        self.unit.is_none()
    }

    /// Minimal big-endian encoding of the base-unit value. Zero encodes as
    /// a single zero byte.
    pub fn as_bytes(&self) -> Result<Vec<u8>, AmountError> {
        match self.value.to_bytes_be() {
            (Sign::Minus, _) => Err(AmountError::NegativeValue(self.value.clone())),
            (_, bytes) => Ok(bytes),
        }
    }

    /// String form in gas, parseable back into an identical amount
    pub fn to_json(&self) -> String {
        self.to_unit(Unit::GAS).to_string()
    }

    /// Numeral in `unit`, or in the display unit when `None`.
    /// Unit-less amounts render the raw base-unit value.
    pub fn format_number(&self, unit: Option<Unit>) -> String {
        match unit.or(self.unit) {
            Some(unit) => Self::move_decimal_point(&self.value.to_string(), -(unit.decimals() as i32)),
            None => self.value.to_string(),
        }
    }

    /// Same value shown in another unit
    pub fn to_unit(&self, unit: Unit) -> Amount {
        Amount {
            value: self.value.clone(),
            unit: Some(unit),
        }
    }

    /// Same value without a display unit
    pub fn unitless(&self) -> Amount {
        Amount {
            value: self.value.clone(),
            unit: None,
        }
    }

    /// Move the decimal point of a base-10 literal by `digits`, right for
    /// positive values and left for negative ones, padding with zeros.
    ///
    /// Trailing fractional zeros, a dangling point and leading integer zeros
    /// are trimmed; a result starting with the point gets a single `0`.
    ///
    /// ```
    /// use mey_primitives::Amount;
    /// assert_eq!(Amount::move_decimal_point("1", 4), "10000");
    /// assert_eq!(Amount::move_decimal_point("0.0001", -4), "0.00000001");
    /// assert_eq!(Amount::move_decimal_point("10000.1", 4), "100001000");
    /// ```
    pub fn move_decimal_point(s: &str, digits: i32) -> String {
        if digits == 0 || s == "0" {
            return s.to_string();
        }

        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

        let mut all = String::with_capacity(body.len() + digits.unsigned_abs() as usize);
        let mut point = int_part.len() as i64 + i64::from(digits);
        if point < 0 {
            all.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
            point = 0;
        }
        all.push_str(int_part);
        all.push_str(frac_part);
        let point = point as usize;
        if point > all.len() {
            let pad = point - all.len();
            all.extend(std::iter::repeat('0').take(pad));
        }

        let (int, frac) = all.split_at(point);
        let int = int.trim_start_matches('0');
        let frac = frac.trim_end_matches('0');
        let out = match (int.is_empty(), frac.is_empty()) {
            (true, true) => return "0".to_string(),
            (false, true) => int.to_string(),
            (true, false) => format!("0.{frac}"),
            (false, false) => format!("{int}.{frac}"),
        };
        format!("{sign}{out}")
    }

    /// Base-unit integer of `arg`. Strings and numbers without their own
    /// unit are read in `default_unit` (mey when `None`); amounts contribute
    /// their value and bytes their raw integer.
    pub fn to_big_int(
        arg: impl Into<AmountArg>,
        default_unit: Option<Unit>,
    ) -> Result<BigInt, AmountError> {
        let default_label = default_unit.map(|u| u.label()).unwrap_or("");
        match arg.into() {
            AmountArg::Amount(amount) => Ok(amount.value),
            AmountArg::Text(s) => {
                let (numeral, token) = split_numeral(&s);
                let label = if token.is_empty() { default_label } else { token };
                value_from_str(numeral, label)
            }
            AmountArg::Integer(v) => value_from_str(&v.to_string(), default_label),
            AmountArg::Float(v) => value_from_str(&float_numeral(v)?, default_label),
            AmountArg::BigInt(v) => value_from_str(&v.to_string(), default_label),
            AmountArg::Bytes(bytes) => Ok(BigInt::from_bytes_be(Sign::Plus, &bytes)),
        }
    }

    /// Compare with another amount; a unit-less `other` is read in this
    /// amount's unit.
    pub fn compare(&self, other: impl Into<AmountArg>) -> Result<Ordering, AmountError> {
        let other = Self::to_big_int(other, self.unit)?;
        Ok(self.value.cmp(&other))
    }

    /// True if both amounts have the same base-unit value
    pub fn equal(&self, other: impl Into<AmountArg>) -> Result<bool, AmountError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Sum, shown in this amount's unit. A unit-less `other` is read in this
    /// amount's unit: `10 mey + 10 = 20 mey`.
    pub fn add(&self, other: impl Into<AmountArg>) -> Result<Amount, AmountError> {
        let other = Self::to_big_int(other, self.unit)?;
        Ok(Amount {
            value: &self.value + other,
            unit: self.unit,
        })
    }

    /// Difference, shown in this amount's unit. A unit-less `other` is read
    /// in this amount's unit.
    pub fn sub(&self, other: impl Into<AmountArg>) -> Result<Amount, AmountError> {
        let other = Self::to_big_int(other, self.unit)?;
        Ok(Amount {
            value: &self.value - other,
            unit: self.unit,
        })
    }

    /// Product of base-unit values. A unit-less `other` is read as gas,
    /// so `10 mey * 10 = 100 mey`. The result keeps this amount's unit.
    pub fn mul(&self, other: impl Into<AmountArg>) -> Result<Amount, AmountError> {
        let other = Self::to_big_int(other, Some(Unit::GAS))?;
        Ok(Amount {
            value: &self.value * other,
            unit: self.unit,
        })
    }

    /// Truncating quotient of base-unit values. A unit-less `other` is read
    /// as gas.
    ///
    /// If both sides carry a unit the result is unit-less
    /// (`10 mey / 5 mey = 2`); otherwise it keeps this amount's unit
    /// (`10 mey / 20 = 0.5 mey`). [`Amount::mul`] never drops the unit.
    pub fn div(&self, other: impl Into<AmountArg>) -> Result<Amount, AmountError> {
        let other = other.into();
        let other_has_unit = other.has_explicit_unit();
        let divisor = Self::to_big_int(other, Some(Unit::GAS))?;
        if divisor.sign() == Sign::NoSign {
            return Err(AmountError::DivisionByZero);
        }
        let unit = if self.unit.is_some() && other_has_unit {
            None
        } else {
            self.unit
        };
        Ok(Amount {
            value: &self.value / divisor,
            unit,
        })
    }
}

fn network_label(unit: &str) -> String {
    if unit.is_empty() {
        DEFAULT_NETWORK_UNIT.label().to_string()
    } else {
        unit.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.format_number(None), unit),
            None => f.write_str(&self.format_number(None)),
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::new(s)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Amount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_json())
        }
    }

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Amount::new(s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::new(s).unwrap()
    }

    // ==================== Decimal point ====================

    #[test]
    fn test_move_decimal_point() {
        assert_eq!(Amount::move_decimal_point("1", 4), "10000");
        assert_eq!(Amount::move_decimal_point("1", -4), "0.0001");
        assert_eq!(Amount::move_decimal_point("0.0001", 4), "1");
        assert_eq!(Amount::move_decimal_point("0.0001", -4), "0.00000001");
        assert_eq!(Amount::move_decimal_point("10000", -4), "1");
        assert_eq!(Amount::move_decimal_point("10000.1", 4), "100001000");
    }

    #[test]
    fn test_move_decimal_point_edges() {
        assert_eq!(Amount::move_decimal_point("0", 18), "0");
        assert_eq!(Amount::move_decimal_point("12.5", 0), "12.5");
        assert_eq!(Amount::move_decimal_point("0.00", 18), "0");
        assert_eq!(Amount::move_decimal_point("100", 2), "10000");
        assert_eq!(Amount::move_decimal_point("-1", -2), "-0.01");
        assert_eq!(Amount::move_decimal_point("-1000", -18), "-0.000000000000001");
    }

    // ==================== Construction ====================

    #[test]
    fn test_number_defaults_to_mey() {
        let a = Amount::new(100).unwrap();
        assert_eq!(a.to_string(), "100 mey");
        assert_eq!(a.value().to_string(), "100000000000000000000");
    }

    #[test]
    fn test_idempotent() {
        let a = Amount::new(100).unwrap();
        let b = Amount::with_display_unit(a.clone(), "gas", "mgas").unwrap();
        assert_eq!(b.to_string(), a.to_string());
        assert_eq!(b.unit(), Some(Unit::MEY));
    }

    #[test]
    fn test_string_with_unit() {
        let a = amount("100 gas");
        assert_eq!(a.to_string(), "100 gas");
        assert_eq!(a.value().to_string(), "100");

        let b = amount("100 mey");
        assert_eq!(b.value().to_string(), "100000000000000000000");
        assert_eq!(b.as_bytes().unwrap(), vec![5, 107, 199, 94, 45, 99, 16, 0, 0]);

        let c = amount("10000 mgas");
        assert_eq!(c.to_string(), "10000 mgas");
        assert_eq!(c.value().to_string(), "10000000000000");
    }

    #[test]
    fn test_explicit_unit_wins_over_token() {
        let a = Amount::with_unit("10 mey", "gas").unwrap();
        assert_eq!(a.to_string(), "10 gas");
    }

    #[test]
    fn test_floats_are_exact() {
        let a = amount("0.1 mey");
        assert_eq!(a.to_unit(Unit::GAS).to_string(), "100000000000000000 gas");

        let b = Amount::new(0.1).unwrap();
        assert_eq!(b.to_unit(Unit::GAS).to_string(), "100000000000000000 gas");

        assert_eq!(
            Amount::with_unit(0.1, "gas").unwrap_err(),
            AmountError::InvalidNumber("0.1".to_string())
        );
    }

    #[test]
    fn test_non_finite_float_is_unsupported() {
        assert!(matches!(
            Amount::new(f64::NAN),
            Err(AmountError::UnsupportedValueType(_))
        ));
        assert!(matches!(
            Amount::new(f64::INFINITY),
            Err(AmountError::UnsupportedValueType(_))
        ));
    }

    #[test]
    fn test_bytes_default_to_gas() {
        let bytes = vec![5u8, 107, 199, 94, 45, 99, 16, 0, 0];
        let a = Amount::new(bytes.clone()).unwrap();
        assert_eq!(a.value().to_string(), "100000000000000000000");
        assert_eq!(a.to_string(), "100000000000000000000 gas");
        assert_eq!(a.to_unit(Unit::MEY).to_string(), "100 mey");

        let b = Amount::with_unit(bytes, "mey").unwrap();
        assert_eq!(b.to_string(), "100 mey");

        assert_eq!(Amount::new(Vec::<u8>::new()).unwrap().to_string(), "0 gas");
    }

    #[test]
    fn test_big_int_defaults_to_gas() {
        let a = Amount::new(BigInt::from(42)).unwrap();
        assert_eq!(a.to_string(), "42 gas");
    }

    #[test]
    fn test_unrecognized_unit() {
        assert_eq!(
            Amount::new("100 foo").unwrap_err().to_string(),
            "unrecognized unit: foo"
        );
    }

    #[test]
    fn test_garbage_numeral() {
        assert!(matches!(
            Amount::new("abc gas"),
            Err(AmountError::InvalidNumber(_))
        ));
    }

    // ==================== Formatting ====================

    #[test]
    fn test_convert_between_units() {
        let a = amount("10000 mgas");
        assert_eq!(a.to_unit(Unit::MEY).to_string(), "0.00001 mey");
        assert_eq!(a.to_unit(Unit::MGAS).to_string(), "10000 mgas");
        assert_eq!(a.to_unit(Unit::GAS).to_string(), "10000000000000 gas");
        assert_eq!(a.format_number(Some(Unit::MGAS)), "10000");
    }

    #[test]
    fn test_format_zero() {
        let a = amount("0 gas");
        assert_eq!(a.to_string(), "0 gas");
        assert_eq!(a.to_unit(Unit::MEY).to_string(), "0 mey");
        assert_eq!(a.to_unit(Unit::MGAS).to_string(), "0 mgas");
        assert_eq!(a.as_bytes().unwrap(), vec![0]);
    }

    #[test]
    fn test_to_json_uses_gas() {
        let a = amount("1234 mey");
        assert_eq!(a.to_json(), "1234000000000000000000 gas");
        assert!(a.equal(amount(&a.to_json())).unwrap());
    }

    #[test]
    fn test_negative_has_no_bytes() {
        let a = amount("1 gas").sub("2 gas").unwrap();
        assert!(matches!(a.as_bytes(), Err(AmountError::NegativeValue(_))));
    }

    // ==================== Arithmetic ====================

    #[test]
    fn test_to_big_int() {
        assert_eq!(Amount::to_big_int(amount("10 gas"), None).unwrap(), BigInt::from(10));
        assert_eq!(
            Amount::to_big_int("10 mey", None).unwrap().to_string(),
            "10000000000000000000"
        );
        assert_eq!(
            Amount::to_big_int("10", Some(Unit::MEY)).unwrap().to_string(),
            "10000000000000000000"
        );
    }

    #[test]
    fn test_compare() {
        let a = amount("10 gas");
        assert_eq!(a.compare(10).unwrap(), Ordering::Equal);
        assert_eq!(a.compare("10 gas").unwrap(), Ordering::Equal);
        assert_eq!(a.compare("10 mey").unwrap(), Ordering::Less);
        assert_eq!(a.compare(1).unwrap(), Ordering::Greater);

        // Unit-less receiver reads unit-less operands as mey
        let b = Amount::with_display_unit("10 gas", "", "").unwrap();
        assert!(b.is_unitless());
        assert_eq!(b.compare(1).unwrap(), Ordering::Less);
        assert_eq!(b.compare("1 gas").unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_add() {
        let a = amount("10 gas");
        assert_eq!(a.add(10).unwrap().to_string(), "20 gas");
        assert_eq!(a.add("10 mey").unwrap().to_string(), "10000000000000000010 gas");
        assert_eq!(
            a.add("10 mey").unwrap().to_unit(Unit::MEY).to_string(),
            "10.00000000000000001 mey"
        );

        let b = amount("10 mey");
        assert_eq!(b.add(10).unwrap().to_string(), "20 mey");
        assert_eq!(b.add("10 gas").unwrap().to_string(), "10.00000000000000001 mey");
    }

    #[test]
    fn test_sub() {
        let a = amount("10 mey");
        assert_eq!(a.sub(5).unwrap().to_string(), "5 mey");
        let b = a.sub("100 gas").unwrap();
        assert_eq!(b.to_string(), "9.9999999999999999 mey");
        assert_eq!(b.add("100 gas").unwrap().to_string(), "10 mey");
        assert_eq!(
            amount("1 gas").sub("1 mey").unwrap().to_string(),
            "-999999999999999999 gas"
        );
    }

    #[test]
    fn test_mul_keeps_unit() {
        let a = amount("10 mey");
        assert_eq!(a.mul(10).unwrap().to_string(), "100 mey");
        assert_eq!(
            a.mul(10000).unwrap().to_unit(Unit::GAS).to_string(),
            "100000000000000000000000 gas"
        );
        // No unit demotion for multiplication, even with units on both sides
        assert_eq!(a.mul("10 mey").unwrap().to_string(), "100000000000000000000 mey");
    }

    #[test]
    fn test_div() {
        let a = amount("10 mey");
        assert_eq!(a.div(10).unwrap().to_string(), "1 mey");
        let unitless_ten = Amount::with_display_unit(10, "gas", "").unwrap();
        assert_eq!(a.div(unitless_ten).unwrap().to_string(), "1 mey");
        assert_eq!(a.div(20).unwrap().to_string(), "0.5 mey");
        assert_eq!(a.div("5 mey").unwrap().to_string(), "2");
        assert_eq!(amount("1 gas").div("2 gas").unwrap().to_string(), "0");
        assert_eq!(
            amount("100000000000 gas").div("0.00000001 mey").unwrap().to_string(),
            "10"
        );
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let a = amount("-7 gas");
        assert_eq!(a.div(2).unwrap().to_string(), "-3 gas");
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(amount("1 mey").div(0).unwrap_err(), AmountError::DivisionByZero);
    }

    #[test]
    fn test_equality_ignores_unit() {
        assert_eq!(amount("1 mey"), amount("1000000000000000000 gas"));
        assert!(amount("1 gas") < amount("1 mgas"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let a = amount("1234 mey");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"1234000000000000000000 gas\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.unit(), Some(Unit::GAS));
    }
}
