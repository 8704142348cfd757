//! Currency display for converted prices
//!
//! Static symbol and conversion tables keyed by country code. The
//! multipliers are a fixed approximation for the demo, not live exchange
//! rates; unknown countries degrade to USD.

/// Display information for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub symbol: &'static str,
    pub code: &'static str,
    pub name: &'static str,
}

const USD: CurrencyInfo = CurrencyInfo { symbol: "$", code: "USD", name: "US Dollar" };

/// Currency used by a country, defaulting to USD for unknown codes
pub fn currency_for_country(country_code: &str) -> CurrencyInfo {
    match country_code {
        "US" => USD,
        "IN" => CurrencyInfo { symbol: "₹", code: "INR", name: "Indian Rupee" },
        "GB" | "UK" => CurrencyInfo { symbol: "£", code: "GBP", name: "British Pound" },
        "JP" => CurrencyInfo { symbol: "¥", code: "JPY", name: "Japanese Yen" },
        "DE" | "FR" => CurrencyInfo { symbol: "€", code: "EUR", name: "Euro" },
        "CN" => CurrencyInfo { symbol: "¥", code: "CNY", name: "Chinese Yuan" },
        "CA" => CurrencyInfo { symbol: "C$", code: "CAD", name: "Canadian Dollar" },
        "AU" => CurrencyInfo { symbol: "A$", code: "AUD", name: "Australian Dollar" },
        "KR" => CurrencyInfo { symbol: "₩", code: "KRW", name: "South Korean Won" },
        "BR" => CurrencyInfo { symbol: "R$", code: "BRL", name: "Brazilian Real" },
        "MX" => CurrencyInfo { symbol: "$", code: "MXN", name: "Mexican Peso" },
        _ => USD,
    }
}

/// Fixed USD multiplier for a currency code
fn conversion_rate(currency_code: &str) -> f64 {
    match currency_code {
        "INR" => 83.12,
        "GBP" => 0.79,
        "JPY" => 149.50,
        "EUR" => 0.92,
        "CNY" => 7.23,
        "CAD" => 1.36,
        "AUD" => 1.53,
        "KRW" => 1310.50,
        "BRL" => 4.95,
        "MXN" => 17.85,
        _ => 1.0,
    }
}

/// Yen and won are integer-denominated for display purposes
fn is_zero_decimal(currency_code: &str) -> bool {
    matches!(currency_code, "JPY" | "KRW")
}

/// Format a USD price in the currency of `country_code`.
///
/// Two decimal places, except zero-decimal currencies which round to the
/// nearest whole unit and get thousands separators.
pub fn format_price(price_usd: f64, country_code: &str) -> String {
    let currency = currency_for_country(country_code);
    let converted = price_usd * conversion_rate(currency.code);

    if is_zero_decimal(currency.code) {
        format!("{}{}", currency.symbol, group_thousands(converted.round() as i64))
    } else {
        format!("{}{:.2}", currency.symbol, converted)
    }
}

/// Insert comma separators into a whole number
fn group_thousands(mut value: i64) -> String {
    let negative = value < 0;
    value = value.abs();
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}
