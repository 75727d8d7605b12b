//! Currency conversion and en-US price formatting.

use time::OffsetDateTime;

use super::entities::Currency;

/// EUR→USD multiplier used until a live rate arrives.
pub const FALLBACK_USD_RATE: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateSource {
    Fallback,
    Live { updated_at: Option<OffsetDateTime> },
}

/// Active EUR→USD conversion rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExchangeRate {
    usd_per_eur: f64,
    source: RateSource,
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ExchangeRate {
    pub fn fallback() -> Self {
        Self {
            usd_per_eur: FALLBACK_USD_RATE,
            source: RateSource::Fallback,
        }
    }

    /// Accepts only finite, positive rates.
    pub fn live(usd_per_eur: f64, updated_at: Option<OffsetDateTime>) -> Option<Self> {
        (usd_per_eur.is_finite() && usd_per_eur > 0.0).then_some(Self {
            usd_per_eur,
            source: RateSource::Live { updated_at },
        })
    }

    pub fn usd_per_eur(&self) -> f64 {
        self.usd_per_eur
    }

    /// Provider update time, for live rates that reported one.
    pub fn updated_at(&self) -> Option<OffsetDateTime> {
        match self.source {
            RateSource::Fallback => None,
            RateSource::Live { updated_at } => updated_at,
        }
    }
}

/// Formats a EUR base amount in the selected currency with no fractional
/// digits. The rate is ignored for EUR.
pub fn format_price(base_eur: f64, currency: Currency, rate: f64) -> String {
    let value = match currency {
        Currency::Eur => base_eur,
        Currency::Usd => base_eur * rate,
    };
    format_currency(value, currency)
}

pub fn format_currency(value: f64, currency: Currency) -> String {
    let symbol = currency.symbol();
    if value.is_nan() {
        return format!("{symbol}NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{symbol}∞");
    }

    // f64::round is half away from zero; `{:.0}` alone would round half to even.
    // Negative inputs keep their sign even when they round to zero.
    let rounded = value.round();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{symbol}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
