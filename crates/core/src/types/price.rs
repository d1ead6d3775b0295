//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are carried as [`rust_decimal::Decimal`] in the currency's
//! standard unit (e.g., reais, not centavos). Binary floats are never used
//! for money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency (BRL).
    #[must_use]
    pub const fn brl(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::BRL)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol for display (e.g., `R$`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_currency_is_brl() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::BRL);
        assert_eq!(CurrencyCode::default().symbol(), "R$");
    }

    #[test]
    fn test_price_construction() {
        let price = Price::brl(Decimal::new(19_990, 2));
        assert_eq!(price.currency_code, CurrencyCode::BRL);
        assert_eq!(price.amount, Decimal::new(19_990, 2));
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::BRL.code(), "BRL");
        assert_eq!(CurrencyCode::USD.code(), "USD");
        assert_eq!(CurrencyCode::EUR.code(), "EUR");
    }
}
