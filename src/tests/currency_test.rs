//! Unit tests for the static currency table and price formatting

use crate::currency::*;

// ============================================================================
// CURRENCY LOOKUP
// ============================================================================

#[test]
fn test_known_country_currencies() {
    assert_eq!(currency_for_country("US").code, "USD");
    assert_eq!(currency_for_country("IN").code, "INR");
    assert_eq!(currency_for_country("JP").code, "JPY");
    assert_eq!(currency_for_country("KR").code, "KRW");
}

#[test]
fn test_gb_and_uk_both_map_to_gbp() {
    assert_eq!(currency_for_country("GB").code, "GBP");
    assert_eq!(currency_for_country("UK").code, "GBP");
}

#[test]
fn test_eurozone_shares_eur() {
    assert_eq!(currency_for_country("DE").code, "EUR");
    assert_eq!(currency_for_country("FR").code, "EUR");
}

#[test]
fn test_unknown_country_defaults_to_usd() {
    let info = currency_for_country("XX");
    assert_eq!(info.code, "USD");
    assert_eq!(info.symbol, "$");
}

// ============================================================================
// PRICE FORMATTING
// ============================================================================

#[test]
fn test_usd_identity() {
    assert_eq!(format_price(100.0, "US"), "$100.00");
}

#[test]
fn test_usd_two_decimal_places() {
    assert_eq!(format_price(175.43, "US"), "$175.43");
    assert_eq!(format_price(0.5, "US"), "$0.50");
}

#[test]
fn test_jpy_rounds_to_whole_units() {
    // 100 * 149.50 = 14950
    let formatted = format_price(100.0, "JP");
    assert_eq!(formatted, "¥14,950");
    assert!(!formatted.contains('.'));
}

#[test]
fn test_krw_rounds_to_whole_units() {
    // 100 * 1310.50 = 131050
    let formatted = format_price(100.0, "KR");
    assert_eq!(formatted, "₩131,050");
    assert!(!formatted.contains('.'));
}

#[test]
fn test_eur_conversion_two_decimals() {
    // 100 * 0.92 = 92.00
    assert_eq!(format_price(100.0, "DE"), "€92.00");
}

#[test]
fn test_inr_conversion() {
    // 10 * 83.12 = 831.20
    assert_eq!(format_price(10.0, "IN"), "₹831.20");
}

#[test]
fn test_unknown_country_formats_as_usd() {
    assert_eq!(format_price(42.0, "ZZ"), "$42.00");
}

#[test]
fn test_mxn_uses_dollar_symbol_with_peso_rate() {
    // 100 * 17.85 = 1785.00
    assert_eq!(format_price(100.0, "MX"), "$1785.00");
}
