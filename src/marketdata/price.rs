use crate::alias::DateTime;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub price: f64,
    pub change_24h: f64,
    pub symbol: String,
}

impl PriceEntry {
    pub fn new<S: Into<String>>(price: f64, change_24h: f64, symbol: S) -> Self {
        Self {
            price,
            change_24h,
            symbol: symbol.into(),
        }
    }
}

/// Snapshot of the latest USD prices, keyed by asset id.
///
/// A table is built once from a feed response and never mutated afterwards;
/// a refresh produces a new table that replaces the previous one.
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
    updated_at: DateTime,
}

impl PriceTable {
    pub fn new(entries: HashMap<String, PriceEntry>, updated_at: DateTime) -> Self {
        Self {
            entries,
            updated_at,
        }
    }

    pub fn get(&self, id: &str) -> Option<&PriceEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn updated_at(&self) -> DateTime {
        self.updated_at
    }

    /// Price of one `from` expressed in `to`.
    ///
    /// `None` when either side is missing or `to` has no usable price.
    pub fn unit_rate(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.get(from)?;
        let to = self.get(to)?;
        if to.price == 0.0 {
            return None;
        }
        Some(from.price / to.price)
    }
}

#[cfg(test)]
pub fn make_table_(entries: &[(&str, f64, f64, &str)]) -> PriceTable {
    let entries = entries
        .iter()
        .map(|(id, price, change, symbol)| {
            (id.to_string(), PriceEntry::new(*price, *change, *symbol))
        })
        .collect();
    PriceTable::new(entries, chrono::Local::now())
}

/// Every listed asset priced, fiat left at zero as the remote source does.
#[cfg(test)]
pub fn sample_table_() -> PriceTable {
    make_table_(&[
        ("bitcoin", 60000.0, 2.0, "BTC"),
        ("ethereum", 3000.0, -1.0, "ETH"),
        ("tether", 1.0, 0.0, "USDT"),
        ("binancecoin", 600.0, 0.5, "BNB"),
        ("ripple", 0.5, 1.5, "XRP"),
        ("solana", 150.0, 4.0, "SOL"),
        ("usd", 0.0, 0.0, "USD"),
        ("eur", 0.0, 0.0, "EUR"),
        ("gbp", 0.0, 0.0, "GBP"),
    ])
}
