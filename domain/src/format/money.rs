//! Currency formatting
//!
//! Mirrors `Intl.NumberFormat("en-PH", { style: "currency", currency: "PHP" })`
//! with a fixed number of fraction digits: comma thousands separators, a dot
//! decimal separator, and the currency symbol before the digits.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Upper bound on fraction digits; larger values are clamped
pub const MAX_FRACTION_DIGITS: u8 = 4;

/// Locales whose separators this formatter reproduces
pub const SUPPORTED_LOCALES: &[&str] = &["en-PH", "en-US", "en-GB"];

/// Currency formatting parameters
///
/// The default is the contract used by every report:
/// `{ currency: "PHP", locale: "en-PH", fraction_digits: 0 }`.
///
/// # Example
///
/// ```
/// use bidtrack_domain::format::MoneyFormat;
///
/// let php = MoneyFormat::default();
/// assert_eq!(php.format_amount(85_000_000), "₱85,000,000");
/// assert_eq!(php.format_compact(125_000_000), "₱125M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// ISO 4217 code
    pub currency: String,
    pub locale: String,
    pub fraction_digits: u8,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            currency: "PHP".to_string(),
            locale: "en-PH".to_string(),
            fraction_digits: 0,
        }
    }
}

impl MoneyFormat {
    /// Build a format, rejecting currency codes that are not three ASCII letters
    pub fn new(
        currency: impl Into<String>,
        locale: impl Into<String>,
        fraction_digits: u8,
    ) -> Result<Self, DomainError> {
        let currency = currency.into().to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::UnknownCurrency(currency));
        }
        Ok(Self {
            currency,
            locale: locale.into(),
            fraction_digits: fraction_digits.min(MAX_FRACTION_DIGITS),
        })
    }

    pub fn is_supported_locale(&self) -> bool {
        SUPPORTED_LOCALES.contains(&self.locale.as_str())
    }

    /// Symbol printed before the amount
    pub fn symbol(&self) -> Cow<'_, str> {
        match self.currency.as_str() {
            "PHP" => Cow::Borrowed("₱"),
            "USD" => Cow::Borrowed("$"),
            "EUR" => Cow::Borrowed("€"),
            "GBP" => Cow::Borrowed("£"),
            "JPY" => Cow::Borrowed("¥"),
            other => Cow::Owned(format!("{other}\u{a0}")),
        }
    }

    fn digits(&self) -> u32 {
        u32::from(self.fraction_digits.min(MAX_FRACTION_DIGITS))
    }

    /// Format a whole-unit amount
    pub fn format_amount(&self, amount: i64) -> String {
        let units = i128::from(amount) * 10i128.pow(self.digits());
        self.render_units(units)
    }

    /// Format a fractional amount, rounding half away from zero
    pub fn format_decimal(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return "N/A".to_string();
        }
        let scaled = (amount * 10f64.powi(self.digits() as i32)).round();
        self.render_units(scaled as i128)
    }

    /// Short form for dashboard cards: ₱125M, ₱1.3B, ₱850K
    pub fn format_compact(&self, amount: i64) -> String {
        const UNITS: [(u128, &str); 3] = [
            (1_000_000_000, "B"),
            (1_000_000, "M"),
            (1_000, "K"),
        ];

        let sign = if amount < 0 { "-" } else { "" };
        let abs = u128::from(amount.unsigned_abs());

        let Some(idx) = UNITS.iter().position(|(unit, _)| abs >= *unit) else {
            return self.format_amount(amount);
        };

        let mut idx = idx;
        // 999_500 rounds to 1000K; promote to 1M
        if idx > 0 && round_half_up(abs, UNITS[idx].0) >= 1_000 {
            idx -= 1;
        }
        let tenths = round_half_up(abs * 10, UNITS[idx].0);

        let digits = if tenths >= 100 {
            round_half_up(abs, UNITS[idx].0).to_string()
        } else if tenths % 10 == 0 {
            (tenths / 10).to_string()
        } else {
            format!("{}.{}", tenths / 10, tenths % 10)
        };

        format!("{}{}{}{}", sign, self.symbol(), digits, UNITS[idx].1)
    }

    fn render_units(&self, units: i128) -> String {
        let digits = self.digits();
        let scale = 10u128.pow(digits);
        let abs = units.unsigned_abs();
        let whole = abs / scale;
        let fraction = abs % scale;

        let mut out = String::new();
        if units < 0 {
            out.push('-');
        }
        out.push_str(&self.symbol());
        out.push_str(&group_thousands(whole));
        if digits > 0 {
            out.push('.');
            out.push_str(&format!("{:0width$}", fraction, width = digits as usize));
        }
        out
    }
}

fn round_half_up(numerator: u128, denominator: u128) -> u128 {
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Insert `,` every three digits from the right
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format whole pesos with the default contract
pub fn format_php(amount: i64) -> String {
    MoneyFormat::default().format_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract() {
        let format = MoneyFormat::default();
        assert_eq!(format.currency, "PHP");
        assert_eq!(format.locale, "en-PH");
        assert_eq!(format.fraction_digits, 0);
    }

    #[test]
    fn test_format_php() {
        assert_eq!(format_php(85_000_000), "₱85,000,000");
        assert_eq!(format_php(125_000_000), "₱125,000,000");
        assert_eq!(format_php(0), "₱0");
        assert_eq!(format_php(999), "₱999");
        assert_eq!(format_php(1_000), "₱1,000");
        assert_eq!(format_php(-250_000), "-₱250,000");
    }

    #[test]
    fn test_format_decimal_rounds() {
        let php = MoneyFormat::default();
        assert_eq!(php.format_decimal(1234.5), "₱1,235");
        assert_eq!(php.format_decimal(1234.49), "₱1,234");
        assert_eq!(php.format_decimal(-2.5), "-₱3");
        assert_eq!(php.format_decimal(f64::NAN), "N/A");
    }

    #[test]
    fn test_fraction_digits() {
        let format = MoneyFormat::new("php", "en-PH", 2).unwrap();
        assert_eq!(format.format_amount(1_500), "₱1,500.00");
        assert_eq!(format.format_decimal(1234.5), "₱1,234.50");
        assert_eq!(format.format_decimal(0.05), "₱0.05");
    }

    #[test]
    fn test_fraction_digits_clamped() {
        let format = MoneyFormat::new("PHP", "en-PH", 9).unwrap();
        assert_eq!(format.fraction_digits, MAX_FRACTION_DIGITS);
    }

    #[test]
    fn test_other_currencies() {
        let usd = MoneyFormat::new("USD", "en-US", 0).unwrap();
        assert_eq!(usd.format_amount(1_000_000), "$1,000,000");
        let sgd = MoneyFormat::new("SGD", "en-PH", 0).unwrap();
        assert_eq!(sgd.format_amount(5_000), "SGD\u{a0}5,000");
    }

    #[test]
    fn test_invalid_currency() {
        assert_eq!(
            MoneyFormat::new("PESO", "en-PH", 0),
            Err(DomainError::UnknownCurrency("PESO".to_string()))
        );
    }

    #[test]
    fn test_compact() {
        let php = MoneyFormat::default();
        assert_eq!(php.format_compact(125_000_000), "₱125M");
        assert_eq!(php.format_compact(1_250_000_000), "₱1.3B");
        assert_eq!(php.format_compact(850_000), "₱850K");
        assert_eq!(php.format_compact(2_000_000), "₱2M");
        assert_eq!(php.format_compact(999_999), "₱1M");
        assert_eq!(php.format_compact(999_499), "₱999K");
        assert_eq!(php.format_compact(999_500), "₱1M");
        assert_eq!(php.format_compact(999_949), "₱1M");
        assert_eq!(php.format_compact(999_500_000), "₱1B");
        assert_eq!(php.format_compact(640), "₱640");
        assert_eq!(php.format_compact(-85_000_000), "-₱85M");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_supported_locale() {
        assert!(MoneyFormat::default().is_supported_locale());
        let fr = MoneyFormat::new("EUR", "fr-FR", 0).unwrap();
        assert!(!fr.is_supported_locale());
    }
}
