use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::AmountConverterError;
use shared::currency::{Sats, SATS_PER_BTC};

/// Market rate shifted by a premium expressed in percentage points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PremiumRate {
    effective: Decimal,
}

impl PremiumRate {
    pub fn new(rate: Decimal, premium: Decimal) -> Result<Self, AmountConverterError> {
        if rate <= Decimal::ZERO {
            return Err(AmountConverterError::InvalidRate(rate));
        }
        let effective = premium
            .checked_div(dec!(100))
            .and_then(|adjustment| rate.checked_add(adjustment))
            .ok_or(AmountConverterError::Overflow)?;
        if effective <= Decimal::ZERO {
            return Err(AmountConverterError::InvalidRate(effective.normalize()));
        }
        Ok(Self { effective })
    }

    pub fn effective(&self) -> Decimal {
        self.effective
    }

    /// Unrounded satoshis bought by `fiat` at the effective rate.
    pub fn sats_from_fiat(&self, fiat: Decimal) -> Result<Sats, AmountConverterError> {
        let sats = fiat
            .checked_div(self.effective)
            .and_then(|btc| btc.checked_mul(SATS_PER_BTC))
            .ok_or(AmountConverterError::Overflow)?;
        Ok(Sats::from_decimal(sats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_is_added_to_the_rate() {
        let rate = PremiumRate::new(dec!(1), dec!(5)).unwrap();
        assert_eq!(rate.effective(), dec!(1.05));

        let rate = PremiumRate::new(dec!(30_000), dec!(-2)).unwrap();
        assert_eq!(rate.effective(), dec!(29_999.98));
    }

    #[test]
    fn sats_from_fiat() {
        let rate = PremiumRate::new(dec!(20_000), dec!(0)).unwrap();
        let sats = rate.sats_from_fiat(dec!(100)).unwrap();
        assert_eq!(sats, Sats::from_major(500_000));
    }

    #[test]
    fn zero_effective_rate_is_invalid() {
        let err = PremiumRate::new(dec!(1), dec!(-100)).unwrap_err();
        assert!(matches!(err, AmountConverterError::InvalidRate(r) if r.is_zero()));
    }

    #[test]
    fn negative_effective_rate_is_invalid() {
        assert!(matches!(
            PremiumRate::new(dec!(1), dec!(-150)),
            Err(AmountConverterError::InvalidRate(_))
        ));
    }

    #[test]
    fn non_positive_base_rate_is_invalid() {
        assert!(matches!(
            PremiumRate::new(dec!(0), dec!(200)),
            Err(AmountConverterError::InvalidRate(_))
        ));
        assert!(matches!(
            PremiumRate::new(dec!(-1), dec!(0)),
            Err(AmountConverterError::InvalidRate(_))
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let rate = PremiumRate::new(Decimal::new(1, 4), dec!(0)).unwrap();
        assert!(matches!(
            rate.sats_from_fiat(Decimal::MAX),
            Err(AmountConverterError::Overflow)
        ));
    }
}
