//! Native token units

use std::fmt;
use std::str::FromStr;

use crate::amount::AmountError;

/// Display unit of the native token.
///
/// `decimals` is the power of ten relative to the base unit (gas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    label: &'static str,
    decimals: u32,
}

impl Unit {
    /// Base unit, the smallest indivisible amount
    pub const GAS: Unit = Unit::new("gas", 0);
    /// 10^9 gas
    pub const MGAS: Unit = Unit::new("mgas", 9);
    /// 10^18 gas, the user-facing coin
    pub const MEY: Unit = Unit::new("mey", 18);

    /// Every known unit
    pub const ALL: &'static [Unit] = &[Unit::GAS, Unit::MGAS, Unit::MEY];

    const fn new(label: &'static str, decimals: u32) -> Self {
        Unit { label, decimals }
    }

    /// Unit label as used in amount strings
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Decimal exponent relative to gas
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Look up a unit by label
    pub fn from_label(label: &str) -> Result<Unit, AmountError> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.label == label)
            .ok_or_else(|| AmountError::UnrecognizedUnit(label.to_string()))
    }

    /// Like [`Unit::from_label`], but the empty label means "no unit"
    pub fn parse_optional(label: &str) -> Result<Option<Unit>, AmountError> {
        if label.is_empty() {
            Ok(None)
        } else {
            Unit::from_label(label).map(Some)
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

impl FromStr for Unit {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_label(s)
    }
}

/// Unit assumed for user-supplied strings and numbers
pub const DEFAULT_USER_UNIT: Unit = Unit::MEY;

/// Unit assumed for raw integers and byte buffers from the network
pub const DEFAULT_NETWORK_UNIT: Unit = Unit::GAS;
