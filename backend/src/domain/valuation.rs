//! Pure valuation rules: currency conversion into CNY and the
//! asset/liability classification. No I/O, no shared state.

use shared::Classification;

/// The one account type whose entries count as liabilities.
pub const LIABILITY_ACCOUNT_TYPE: &str = "credit card";

/// Fixed exchange rates into CNY, the home currency.
const EXCHANGE_RATES: [(&str, f64); 5] = [
    ("CNY", 1.0),
    ("USD", 7.2),
    ("EUR", 7.8),
    ("JPY", 0.05),
    ("HKD", 0.92),
];

/// Look up the exchange rate for a currency code, case-insensitively.
/// Unknown codes convert at 1:1.
pub fn exchange_rate(currency: &str) -> f64 {
    let code = currency.trim().to_uppercase();
    EXCHANGE_RATES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0)
}

/// Convert an amount into CNY, rounded to 2 decimal places.
/// Exact .xx5 ties round away from zero.
pub fn to_cny(amount: f64, currency: &str) -> f64 {
    (amount * exchange_rate(currency) * 100.0).round() / 100.0
}

/// Classify an account type: liability iff it is the reserved credit
/// card label, everything else is an asset.
pub fn classify(account_type: &str) -> Classification {
    if account_type == LIABILITY_ACCOUNT_TYPE {
        Classification::Liability
    } else {
        Classification::Asset
    }
}
