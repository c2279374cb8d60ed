use core::num::ParseFloatError;

use thiserror::Error;

use crate::MeasureType;

/// An error parsing a unit or a quantity from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text does not end with a known unit symbol.
    #[error("invalid {0} unit")]
    InvalidUnit(MeasureType),

    /// The text contains a unit symbol but no amount.
    #[error("invalid {0} amount")]
    InvalidAmount(MeasureType),

    /// The amount is not a valid number.
    #[error("invalid amount: {0}")]
    Amount(#[from] ParseFloatError),
}
