use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the Smartpay processor, with their minor-unit precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro (2 decimal places), the processor default
    #[default]
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// US Dollar (2 decimal places)
    USD,
    /// Canadian Dollar (2 decimal places)
    CAD,
    /// Swiss Franc (2 decimal places)
    CHF,
    /// Japanese Yen (no decimal places)
    JPY,
    /// South Korean Won (no decimal places)
    KRW,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - JPY/KRW: 0 (no decimals)
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            _ => 2,
        }
    }

    /// Converts an amount in cents into the value the processor expects
    ///
    /// Amounts always enter the adapter in cents. Zero-decimal currencies are
    /// sent in whole units, so `100` cents of JPY becomes `1`.
    pub fn localized_amount(&self, cents: i64) -> i64 {
        let major = Decimal::new(cents, 2).round_dp(self.scale());
        (major * Decimal::from(10_i64.pow(self.scale())))
            .trunc()
            .to_i64()
            .unwrap_or_default()
    }

    /// Validates that an amount in cents is usable for a payment
    pub fn validate_amount(&self, cents: i64) -> Result<(), String> {
        if cents < 0 {
            return Err(format!("{} amount cannot be negative", self));
        }
        Ok(())
    }

    /// Formats an amount in cents for display with the correct decimal places
    pub fn format_amount(&self, cents: i64) -> String {
        let scale = self.scale();
        let amount = Decimal::new(cents, 2).round_dp(scale);
        if scale == 0 {
            format!("{} {}", self, amount)
        } else {
            format!("{} {:.width$}", self, amount, width = scale as usize)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
            Currency::KRW => "KRW",
        };
        f.write_str(code)
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "USD" => Ok(Currency::USD),
            "CAD" => Ok(Currency::CAD),
            "CHF" => Ok(Currency::CHF),
            "JPY" => Ok(Currency::JPY),
            "KRW" => Ok(Currency::KRW),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
