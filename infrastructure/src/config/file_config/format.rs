//! Money formatting configuration from TOML (`[format]` section)

use bidtrack_domain::format::{MAX_FRACTION_DIGITS, SUPPORTED_LOCALES};
use bidtrack_domain::{ConfigIssue, ConfigIssueCode, MoneyFormat};
use serde::{Deserialize, Serialize};

/// Raw currency settings from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFormatConfig {
    pub currency: String,
    pub locale: String,
    pub fraction_digits: u8,
}

impl Default for FileFormatConfig {
    fn default() -> Self {
        let money = MoneyFormat::default();
        Self {
            currency: money.currency,
            locale: money.locale,
            fraction_digits: money.fraction_digits,
        }
    }
}

impl FileFormatConfig {
    /// Convert to a [`MoneyFormat`], replacing invalid values with defaults.
    ///
    /// Every replaced value is reported as a [`ConfigIssue`].
    pub fn to_money_format(&self) -> (MoneyFormat, Vec<ConfigIssue>) {
        let defaults = MoneyFormat::default();
        let mut issues = Vec::new();

        let currency = match MoneyFormat::new(&self.currency, &defaults.locale, 0) {
            Ok(valid) => valid.currency,
            Err(_) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidCurrency {
                        currency: self.currency.clone(),
                    },
                    format!(
                        "format.currency: '{}' is not a three-letter code, using '{}'",
                        self.currency, defaults.currency
                    ),
                ));
                defaults.currency.clone()
            }
        };

        let locale = if SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            self.locale.clone()
        } else {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnsupportedLocale {
                    locale: self.locale.clone(),
                },
                format!(
                    "format.locale: unsupported locale '{}', using '{}' (supported: {})",
                    self.locale,
                    defaults.locale,
                    SUPPORTED_LOCALES.join(", ")
                ),
            ));
            defaults.locale.clone()
        };

        if self.fraction_digits > MAX_FRACTION_DIGITS {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::FractionDigitsOutOfRange {
                    value: self.fraction_digits,
                    max: MAX_FRACTION_DIGITS,
                },
                format!(
                    "format.fraction_digits: {} exceeds {}, clamping",
                    self.fraction_digits, MAX_FRACTION_DIGITS
                ),
            ));
        }

        let money = MoneyFormat {
            currency,
            locale,
            fraction_digits: self.fraction_digits.min(MAX_FRACTION_DIGITS),
        };
        (money, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_php() {
        let (money, issues) = FileFormatConfig::default().to_money_format();
        assert!(issues.is_empty());
        assert_eq!(money, MoneyFormat::default());
    }

    #[test]
    fn test_lowercase_currency_is_accepted() {
        let config = FileFormatConfig {
            currency: "usd".to_string(),
            locale: "en-US".to_string(),
            fraction_digits: 2,
        };
        let (money, issues) = config.to_money_format();
        assert!(issues.is_empty());
        assert_eq!(money.currency, "USD");
        assert_eq!(money.fraction_digits, 2);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = FileFormatConfig {
            currency: "PESO".to_string(),
            locale: "fr-FR".to_string(),
            fraction_digits: 9,
        };
        let (money, issues) = config.to_money_format();
        assert_eq!(issues.len(), 3);
        assert_eq!(money.currency, "PHP");
        assert_eq!(money.locale, "en-PH");
        assert_eq!(money.fraction_digits, MAX_FRACTION_DIGITS);
        assert!(matches!(
            issues[2].code,
            ConfigIssueCode::FractionDigitsOutOfRange { value: 9, max: 4 }
        ));
    }
}
