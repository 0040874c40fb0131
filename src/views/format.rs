use chrono::{DateTime, Utc};

use crate::types::Price;

/// Brazilian currency display, e.g. `R$ 12.000,00`.
pub fn format_price(price: Price) -> String {
    let value = price.value().round_dp(2);
    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    let digits = format!("{:.2}", value.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{fraction}")
}

/// Day-first date display, e.g. `03/02/2023`.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}
