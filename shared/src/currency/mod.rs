use thiserror::Error;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::Money;

pub const SATS_PER_BTC: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("Can't convert {0} to {1}")]
    Conversion(String, &'static str),
}

macro_rules! currency {
    ($name:ident, $code:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name {
            inner: Money<'static, inner::p2psats::Currency>,
        }

        impl $name {
            pub fn from_major(major: u64) -> Self {
                Self {
                    inner: Money::from_major(major as i64, inner::p2psats::$code),
                }
            }

            pub fn from_decimal(decimal: Decimal) -> Self {
                Self {
                    inner: Money::from_decimal(decimal, inner::p2psats::$code),
                }
            }

            pub fn amount(&self) -> &Decimal {
                self.inner.amount()
            }

            /// Rounds to the nearest whole unit, ties away from zero.
            pub fn round(&self) -> Self {
                Self::from_decimal(
                    self.inner
                        .amount()
                        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
                )
            }

            pub(crate) fn money(&self) -> &Money<'static, inner::p2psats::Currency> {
                &self.inner
            }
        }

        impl std::ops::Mul<Decimal> for $name {
            type Output = Self;

            fn mul(self, rhs: Decimal) -> Self::Output {
                Self {
                    inner: self.inner * rhs,
                }
            }
        }

        impl TryFrom<$name> for u64 {
            type Error = CurrencyError;

            fn try_from(value: $name) -> Result<Self, Self::Error> {
                u64::try_from(*value.inner.amount())
                    .map_err(|_| CurrencyError::Conversion(value.inner.amount().to_string(), "u64"))
            }
        }
    };
}

currency! { Sats, SATOSHI }


mod inner {
    use rusty_money::define_currency_set;
    define_currency_set!(
      p2psats {
        SATOSHI: {
            code: "SATOSHI",
            exponent: 0,
            locale: Locale::EnUs,
            minor_units: 1,
            name: "SATOSHI",
            symbol: "sats",
            symbol_first: false,
        }
      }
    );

}
