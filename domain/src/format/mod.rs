//! Money and rate formatting
//!
//! Pure, locale-fixed helpers. The currency contract is
//! `{ currency: "PHP", locale: "en-PH", fraction_digits: 0 }`; see
//! [`MoneyFormat`].

mod money;
mod percent;

pub use money::{
    MAX_FRACTION_DIGITS, MoneyFormat, SUPPORTED_LOCALES, format_php, group_thousands,
};
pub use percent::{format_margin, format_percent, progress_bar};
