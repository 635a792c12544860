//! Fixed-point monetary amounts.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Monetary amount in a single, implicit currency.
///
/// A value object: compared by amount, never mutated in place.
///
/// Backed by a 96-bit fixed-point decimal so `100.01` compares exactly. Zero and
/// negative amounts are representable; deciding whether they are acceptable is
/// the job of the rule consuming them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole units, e.g. `Money::from_units(150)`.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Strict comparison: an amount equal to `threshold` does not exceed it.
    pub fn exceeds(&self, threshold: Money) -> bool {
        self.0 > threshold.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("invalid amount {s:?}: {e}")))?;
        Ok(Self(amount))
    }
}
