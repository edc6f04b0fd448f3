use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fraction::Fraction;

/// Everything needed to turn a fiat amount into satoshis.
///
/// `fee` has no default: it must be passed to [`ConversionRequest::new`] and
/// must be present when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Fiat units spent by the counterparty.
    pub amount: Decimal,
    /// Percentage points added to `rate`. May be negative.
    #[serde(default)]
    pub premium: Decimal,
    pub fee: Fraction,
    #[serde(default)]
    pub routing_budget: Fraction,
    /// Fiat price of one whole coin.
    #[serde(default = "default_rate")]
    pub rate: Decimal,
}

fn default_rate() -> Decimal {
    Decimal::ONE
}

impl ConversionRequest {
    pub fn new(amount: Decimal, fee: Fraction) -> Self {
        Self {
            amount,
            premium: Decimal::ZERO,
            fee,
            routing_budget: Fraction::ZERO,
            rate: default_rate(),
        }
    }

    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    pub fn with_routing_budget(mut self, routing_budget: Fraction) -> Self {
        self.routing_budget = routing_budget;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }
}
