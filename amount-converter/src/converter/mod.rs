use rust_decimal::Decimal;
use tracing::{instrument, Span};

use crate::{
    deduction_calculator::DeductionCalculator, error::AmountConverterError,
    premium_rate::PremiumRate, request::ConversionRequest,
};
use shared::{
    currency::Sats,
    format::{format_sats, NumberLocale},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct AmountConverter {
    locale: NumberLocale,
}

impl AmountConverter {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// Whole satoshis received for `request.amount` once the premium, the fee
    /// and the routing budget have been applied.
    #[instrument(
        name = "AmountConverter.compute_sats",
        level = "trace",
        skip_all,
        fields(
            amount = %request.amount,
            premium = %request.premium,
            rate = %request.rate,
            sats,
            error,
            error.message
        )
    )]
    pub fn compute_sats(&self, request: &ConversionRequest) -> Result<Sats, AmountConverterError> {
        let sats = shared::tracing::record_error(net_sats(request))?;
        Span::current().record("sats", &tracing::field::display(sats.amount()));
        Ok(sats)
    }

    /// [`Self::compute_sats`] grouped for display in the converter's locale.
    pub fn display_sats(&self, request: &ConversionRequest) -> Result<String, AmountConverterError> {
        let sats = self.compute_sats(request)?;
        Ok(format_sats(&sats, self.locale))
    }
}

fn net_sats(
    ConversionRequest {
        amount,
        premium,
        fee,
        routing_budget,
        rate,
    }: &ConversionRequest,
) -> Result<Sats, AmountConverterError> {
    if *amount < Decimal::ZERO {
        return Err(AmountConverterError::InvalidAmount(*amount));
    }
    let raw = PremiumRate::new(*rate, *premium)?.sats_from_fiat(*amount)?;
    let net = DeductionCalculator::new(*fee, *routing_budget).decrease_by_all(raw);
    Ok(net.round())
}

pub fn compute_sats(request: &ConversionRequest) -> Result<Sats, AmountConverterError> {
    AmountConverter::default().compute_sats(request)
}

pub fn display_sats(request: &ConversionRequest) -> Result<String, AmountConverterError> {
    AmountConverter::default().display_sats(request)
}
