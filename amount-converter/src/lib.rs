#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

mod converter;
mod deduction_calculator;
mod error;
mod fraction;
mod premium_rate;
mod request;

pub use converter::*;
pub use deduction_calculator::DeductionCalculator;
pub use error::AmountConverterError;
pub use fraction::{Fraction, FractionError};
pub use premium_rate::PremiumRate;
pub use request::ConversionRequest;
pub use shared::{
    currency::Sats,
    format::{format_sats, pretty_number, NumberLocale},
};
