mod conversion;
mod history;
mod popular;
mod top;

pub use conversion::*;
pub use history::*;
pub use popular::*;
pub use top::*;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { Trend::Up } else { Trend::Down }
    }
}

/// Fixed 8 decimals, used for amounts and rates.
pub fn format_rate(value: f64) -> String {
    format!("{:.8}", value)
}

/// `+1.23%` / `-0.50%`.
pub fn format_signed_percent(value: f64) -> String {
    // adding 0.0 turns -0.0 into 0.0
    let value = value + 0.0;
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}

/// `$1,234.56`.
pub fn format_usd(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}
