use core::fmt::{Display, Formatter};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Unit};

/// An amount measured in a unit of a single dimension.
///
/// ```rust
/// use ladder_units::{Mass, MassUnit};
///
/// let mass: Mass = "420g".parse().unwrap();
/// assert_eq!(mass.convert(MassUnit::Kilograms).to_string(), "0.42kg");
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Quantity<U> {
    /// The amount of `unit`.
    pub amount: f64,
    /// The unit `amount` is measured in.
    pub unit: U,
}

impl<U> Quantity<U>
where
    U: Unit,
{
    /// Returns `amount` of `unit`.
    #[must_use]
    pub const fn new(amount: f64, unit: U) -> Self {
        Self { amount, unit }
    }

    /// Returns this quantity expressed in `unit`.
    ///
    /// The conversion uses whole multipliers when both units share a ladder,
    /// and otherwise falls back to an approximate conversion through the
    /// dimension's pivot unit. Converting to the same unit, or converting
    /// zero, returns the amount unchanged.
    #[must_use]
    pub fn convert(self, unit: U) -> Self {
        Self {
            amount: U::convert(self.amount, self.unit, unit),
            unit,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.
    }
}

impl<U> Display for Quantity<U>
where
    U: Unit,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

impl<U> FromStr for Quantity<U>
where
    U: Unit,
{
    type Err = Error;

    /// Parses `"<amount><symbol>"`, picking the longest matching symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, unit) = U::split_suffix(s).ok_or(Error::InvalidUnit(U::MEASURE))?;
        if amount.is_empty() {
            return Err(Error::InvalidAmount(U::MEASURE));
        }

        Ok(Self {
            amount: amount.parse()?,
            unit,
        })
    }
}

/// Returns true if `quantity` is absent or zero.
pub(crate) fn is_absent_or_zero<U>(quantity: &Option<Quantity<U>>) -> bool
where
    U: Unit,
{
    quantity.as_ref().map_or(true, Quantity::is_zero)
}
