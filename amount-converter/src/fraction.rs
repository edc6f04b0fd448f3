use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FractionError {
    #[error("Fraction must be within [0, 1), got {0}")]
    OutOfRange(Decimal),
}

/// A share of an amount in `[0, 1)`, used for fees and routing budgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Fraction(Decimal);

impl Fraction {
    pub const ZERO: Fraction = Fraction(Decimal::ZERO);

    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// The share that is left once this fraction is taken away, `1 - self`.
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl TryFrom<Decimal> for Fraction {
    type Error = FractionError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::ZERO || value >= Decimal::ONE {
            return Err(FractionError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Fraction> for Decimal {
    fn from(fraction: Fraction) -> Self {
        fraction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_values_below_one() {
        for value in [dec!(0), dec!(0.02), dec!(0.999)] {
            assert_eq!(Fraction::try_from(value).unwrap().inner(), value);
        }
    }

    #[test]
    fn rejects_values_out_of_range() {
        for value in [dec!(1), dec!(1.5), dec!(-0.1)] {
            assert_eq!(
                Fraction::try_from(value),
                Err(FractionError::OutOfRange(value))
            );
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        let zero = Fraction::try_from(-Decimal::ZERO).unwrap();
        assert_eq!(zero.complement(), Decimal::ONE);
    }

    #[test]
    fn complement() {
        let fee = Fraction::try_from(dec!(0.02)).unwrap();
        assert_eq!(fee.complement(), dec!(0.98));
        assert_eq!(Fraction::ZERO.complement(), Decimal::ONE);
    }

    #[test]
    fn deserialize_checks_range() {
        let fee: Fraction = serde_json::from_str("0.25").unwrap();
        assert_eq!(fee.inner(), dec!(0.25));
        assert!(serde_json::from_str::<Fraction>("1.0").is_err());
    }
}
