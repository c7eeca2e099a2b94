use super::format_rate;
use crate::alias::Date;
use crate::marketdata::PriceTable;
use rand::Rng;
use serde::Serialize;

pub const HISTORY_DAYS: u64 = 7;
pub const HISTORY_FLUCTUATION: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub date: Date,
    pub label: String,
    pub value: f64,
}

/// Illustrative rate series for the last [`HISTORY_DAYS`] days.
///
/// Values are the current rate with uniform noise of +/- [`HISTORY_FLUCTUATION`];
/// nothing here comes from real past prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    pub label: String,
    pub base_rate: f64,
    pub points: Vec<HistoryPoint>,
}

impl History {
    pub fn generate<R: Rng>(
        table: &PriceTable,
        from: &str,
        to: &str,
        today: Date,
        rng: &mut R,
    ) -> Option<Self> {
        let base_rate = table.unit_rate(from, to)?;
        let label = format!(
            "{}/{} Exchange Rate",
            table.get(from)?.symbol,
            table.get(to)?.symbol
        );

        let mut points = Vec::with_capacity(HISTORY_DAYS as usize);
        for days_ago in (0..HISTORY_DAYS).rev() {
            let date = today.checked_sub_days(chrono::Days::new(days_ago))?;
            let fluctuation =
                1.0 + rng.random_range(-HISTORY_FLUCTUATION..HISTORY_FLUCTUATION);
            points.push(HistoryPoint {
                date,
                label: date.format("%b %-d").to_string(),
                value: base_rate * fluctuation,
            });
        }

        Some(Self {
            label,
            base_rate,
            points,
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|point| point.label.clone()).collect()
    }

    /// Values as fixed 8 decimals strings, the form the chart consumes.
    pub fn values(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|point| format_rate(point.value))
            .collect()
    }
}
