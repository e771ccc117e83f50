//! Display helpers shared by the card renderer and the command-line output

use rust_decimal::Decimal;

/// Currency sign used on every price label
pub const CURRENCY_SIGN: &str = "₪";

/// Get current UTC timestamp (millis)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format an amount as a shekel price label
///
/// Trailing zeros are dropped, so whole prices render without decimals.
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::util::format_shekels;
///
/// assert_eq!(format_shekels(Decimal::from(299)), "₪299");
/// assert_eq!(format_shekels(Decimal::new(1250, 1)), "₪125");
/// assert_eq!(format_shekels(Decimal::new(2995, 1)), "₪299.5");
/// ```
pub fn format_shekels(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_SIGN, amount.normalize())
}

/// Format a percentage value without a trailing `.0`
///
/// ```
/// use shared::util::format_percent;
///
/// assert_eq!(format_percent(22.0), "22%");
/// assert_eq!(format_percent(0.3), "0.3%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// CBD label: values below 1% are shown as `<1%`
///
/// ```
/// use shared::util::format_cbd;
///
/// assert_eq!(format_cbd(0.3), "<1%");
/// assert_eq!(format_cbd(1.0), "1%");
/// assert_eq!(format_cbd(2.5), "2.5%");
/// ```
pub fn format_cbd(cbd: f64) -> String {
    if cbd < 1.0 {
        "<1%".to_string()
    } else {
        format_percent(cbd)
    }
}
