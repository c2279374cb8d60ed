use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::is_absent_or_zero;
use crate::{Mass, Volume};

/// A measurement dimension.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureType {
    /// Mass, pivoting through grams.
    Mass,
    /// Volume, pivoting through liters.
    Volume,
}

impl Display for MeasureType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Mass => "mass",
            Self::Volume => "volume",
        })
    }
}

/// A single item described in any of several measurement dimensions.
///
/// Not every dimension needs to be present. Absent and zero dimensions are
/// left out when serializing.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// A unitless count.
    #[serde(default, skip_serializing_if = "is_zero_count")]
    pub quantity: f32,
    /// The mass of the item.
    #[serde(default, skip_serializing_if = "is_absent_or_zero")]
    pub mass: Option<Mass>,
    /// The volume of the item.
    #[serde(default, skip_serializing_if = "is_absent_or_zero")]
    pub volume: Option<Volume>,
}

impl Measurements {
    /// Returns true if no dimension holds a non-zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        is_zero_count(&self.quantity)
            && is_absent_or_zero(&self.mass)
            && is_absent_or_zero(&self.volume)
    }
}

#[expect(clippy::trivially_copy_pass_by_ref)]
fn is_zero_count(quantity: &f32) -> bool {
    *quantity == 0.
}
