use rust_decimal::Decimal;
use rusty_money::{Formatter, LocalFormat, Locale, Params, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::Sats;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown number locale '{0}'")]
pub struct UnknownLocale(String);

/// Digit grouping convention used when displaying amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberLocale {
    /// `10,000,000`
    #[default]
    EnUs,
    /// `10.000.000`
    EnEu,
    /// `1,00,00,000`
    EnIn,
    /// `10 000 000`
    EnBy,
}

impl NumberLocale {
    pub const ALL: [NumberLocale; 4] = [Self::EnUs, Self::EnEu, Self::EnIn, Self::EnBy];

    fn local_format(self) -> LocalFormat {
        LocalFormat::from_locale(match self {
            Self::EnUs => Locale::EnUs,
            Self::EnEu => Locale::EnEu,
            Self::EnIn => Locale::EnIn,
            Self::EnBy => Locale::EnBy,
        })
    }
}

impl std::fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::EnUs => "en-us",
            Self::EnEu => "en-eu",
            Self::EnIn => "en-in",
            Self::EnBy => "en-by",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

// Widest integer part a Decimal can hold.
const MAX_INTEGER_DIGITS: usize = 29;

/// The locale's group widths, with the last width repeated until every digit
/// of a Decimal is covered.
fn separator_pattern(format: &LocalFormat) -> Vec<usize> {
    let mut pattern = format.digit_separator_pattern();
    let last = pattern.last().copied().unwrap_or(3);
    while pattern.iter().sum::<usize>() < MAX_INTEGER_DIGITS {
        pattern.push(last);
    }
    pattern
}

fn params(locale: NumberLocale, rounding: u32) -> Params {
    let format = locale.local_format();
    Params {
        digit_separator: format.digit_separator,
        exponent_separator: format.exponent_separator,
        separator_pattern: separator_pattern(&format),
        positions: vec![Position::Sign, Position::Amount],
        rounding: Some(rounding),
        ..Default::default()
    }
}

/// Groups the integer part of `value` according to `locale`.
/// Fractional digits are rounded away.
pub fn pretty_number(value: &Decimal, locale: NumberLocale) -> String {
    format_sats(&Sats::from_decimal(*value), locale)
}

pub fn format_sats(sats: &Sats, locale: NumberLocale) -> String {
    Formatter::money(sats.money(), params(locale, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_per_locale() {
        let value = dec!(10_000_000_000);
        assert_eq!(pretty_number(&value, NumberLocale::EnUs), "10,000,000,000");
        assert_eq!(pretty_number(&value, NumberLocale::EnEu), "10.000.000.000");
        assert_eq!(pretty_number(&value, NumberLocale::EnBy), "10 000 000 000");
        assert_eq!(pretty_number(&value, NumberLocale::EnIn), "10,00,00,00,000");
    }

    #[test]
    fn groups_every_digit_of_large_numbers() {
        let value = dec!(2_100_000_000_000_000);
        assert_eq!(
            pretty_number(&value, NumberLocale::EnUs),
            "2,100,000,000,000,000"
        );
        assert_eq!(
            pretty_number(&value, NumberLocale::EnIn),
            "2,10,00,00,00,00,00,000"
        );
    }

    #[test]
    fn pattern_covers_every_decimal_digit() {
        for locale in NumberLocale::ALL {
            let pattern = separator_pattern(&locale.local_format());
            assert!(pattern.iter().sum::<usize>() >= MAX_INTEGER_DIGITS);
        }
    }

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(pretty_number(&dec!(0), NumberLocale::EnUs), "0");
        assert_eq!(pretty_number(&dec!(999), NumberLocale::EnEu), "999");
    }

    #[test]
    fn formatting_is_idempotent() {
        let sats = Sats::from_major(1_234_567);
        let first = format_sats(&sats, NumberLocale::EnUs);
        let second = format_sats(&sats, NumberLocale::EnUs);
        assert_eq!(first, "1,234,567");
        assert_eq!(first, second);
    }

    #[test]
    fn locale_from_str() {
        assert_eq!("en-us".parse(), Ok(NumberLocale::EnUs));
        assert_eq!("EN-EU".parse(), Ok(NumberLocale::EnEu));
        assert!("fr-fr".parse::<NumberLocale>().is_err());
    }

    #[test]
    fn locale_deserializes_kebab_case() {
        let locale: NumberLocale = serde_json::from_str("\"en-in\"").unwrap();
        assert_eq!(locale, NumberLocale::EnIn);
    }
}
