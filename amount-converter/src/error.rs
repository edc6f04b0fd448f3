use rust_decimal::Decimal;
use thiserror::Error;

use crate::fraction::FractionError;

#[derive(Error, Debug)]
pub enum AmountConverterError {
    #[error("Invalid rate: {0}")]
    InvalidRate(Decimal),
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("{0}")]
    InvalidFraction(#[from] FractionError),
    #[error("Conversion overflowed")]
    Overflow,
}
