//! Derived display pricing.
//!
//! The product page shows three prices derived from the catalog's base
//! price: a struck-through "list" price (base marked up 10%), the PIX price
//! (10% discount for instant payment), and a 10-installment value. All
//! arithmetic is decimal; results round to 2 decimal places.

use rust_decimal::Decimal;
use vitrine_core::CurrencyCode;

/// Markup applied to the base price for the struck-through list price.
const ORIGINAL_MARKUP: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Discount applied to the base price for PIX payment.
const PIX_DISCOUNT: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Number of installments offered.
pub const INSTALLMENTS: u32 = 10;

/// The struck-through "de R$ ..." list price: base price marked up 10%.
#[must_use]
pub fn list_price(price: Decimal) -> Decimal {
    (price * (Decimal::ONE + ORIGINAL_MARKUP)).round_dp(2)
}

/// The "no PIX" price: base price discounted 10%.
#[must_use]
pub fn pix_price(price: Decimal) -> Decimal {
    (price * (Decimal::ONE - PIX_DISCOUNT)).round_dp(2)
}

/// The per-installment value over [`INSTALLMENTS`] payments.
#[must_use]
pub fn installment_value(price: Decimal) -> Decimal {
    (price / Decimal::from(INSTALLMENTS)).round_dp(2)
}

/// Format an amount as BRL with pt-BR separators, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = format!("{:.2}", rounded.abs());

    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    // Group the integer digits in threes with '.' separators
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let symbol = CurrencyCode::BRL.symbol();
    if negative {
        format!("-{symbol} {grouped},{fraction}")
    } else {
        format!("{symbol} {grouped},{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_price_markup() {
        assert_eq!(list_price(Decimal::new(10_000, 2)), Decimal::new(11_000, 2));
        assert_eq!(list_price(Decimal::new(19_990, 2)), Decimal::new(21_989, 2));
    }

    #[test]
    fn test_pix_price_discount() {
        assert_eq!(pix_price(Decimal::new(10_000, 2)), Decimal::new(9_000, 2));
        assert_eq!(pix_price(Decimal::new(19_990, 2)), Decimal::new(17_991, 2));
    }

    #[test]
    fn test_installment_value() {
        assert_eq!(
            installment_value(Decimal::new(19_990, 2)),
            Decimal::new(1_999, 2)
        );
        // Rounds to 2 decimal places
        assert_eq!(
            installment_value(Decimal::new(10_001, 2)),
            Decimal::new(1_000, 2)
        );
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(Decimal::new(0, 0)), "R$ 0,00");
        assert_eq!(format_brl(Decimal::new(19_990, 2)), "R$ 199,90");
        assert_eq!(format_brl(Decimal::new(123_456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(123_456_789, 2)), "R$ 1.234.567,89");
        assert_eq!(format_brl(Decimal::new(5, 0)), "R$ 5,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(Decimal::new(-123_456, 2)), "-R$ 1.234,56");
    }
}
