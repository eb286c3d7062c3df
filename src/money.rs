//! Money amounts as integer minor units (cents).
//!
//! All arithmetic in the app happens on whole cents so that repeated sums are
//! exact. Decimal dollars only appear at the edges: the JSON ledger file, the
//! CSV export, and the transaction form, each converting by rounding to the
//! nearest cent.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// A money amount in whole cents.
pub type Cents = i64;

/// Convert a decimal dollar amount to whole cents, rounding to the nearest cent.
pub fn cents_from_dollars(dollars: f64) -> Cents {
    (dollars * 100.0).round() as Cents
}

/// Convert whole cents to a decimal dollar amount.
///
/// Only used for display (chart values); exactness is not required there.
pub fn dollars_from_cents(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Format an amount as a dollar string with a thousands separator, e.g. "$1,234.50".
pub fn format_currency(cents: Cents) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let number = dollars_from_cents(cents);

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Format an amount as a plain machine-readable token with no currency symbol
/// and no thousands separator, e.g. "100", "12.5", "0.07".
///
/// Trailing zeros in the cents part are dropped, matching how a number like
/// 12.50 would be written by hand.
pub fn format_plain(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.abs();
    let whole = magnitude / 100;
    let frac = magnitude % 100;

    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

/// Serde adapter that writes [Cents] as a decimal dollar number.
///
/// This is the ledger file's wire format: `1250` cents round-trips through
/// the JSON number `12.5`. Non-finite and negative amounts are rejected on
/// deserialization.
pub mod dollars {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{Cents, cents_from_dollars, dollars_from_cents};

    /// Serialize cents as a decimal dollar number.
    pub fn serialize<S: Serializer>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(dollars_from_cents(*cents))
    }

    /// Deserialize a decimal dollar number into cents.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cents, D::Error> {
        let dollars = f64::deserialize(deserializer)?;

        if !dollars.is_finite() {
            return Err(D::Error::custom(format!(
                "{dollars} is not a valid transaction amount"
            )));
        }

        if dollars < 0.0 {
            return Err(D::Error::custom(format!(
                "transaction amounts must not be negative, got {dollars}"
            )));
        }

        Ok(cents_from_dollars(dollars))
    }
}
