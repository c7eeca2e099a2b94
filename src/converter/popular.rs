use super::format_rate;
use crate::marketdata::{Asset, PriceTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularPair {
    pub to: &'static str,
    pub pair: String,
    pub rate: Option<f64>,
    pub rate_text: String,
}

/// One entry per listed asset other than `from`, in list order.
///
/// Empty when `from` has no price entry; assets without an entry are skipped.
pub fn popular_pairs(assets: &[Asset], table: &PriceTable, from: &str) -> Vec<PopularPair> {
    let Some(base) = table.get(from) else {
        return Vec::new();
    };

    assets
        .iter()
        .filter(|asset| asset.id != from)
        .filter_map(|asset| {
            let entry = table.get(asset.id)?;
            let rate = table.unit_rate(from, asset.id);
            let rate_text = match rate {
                Some(value) => format_rate(value),
                None => "n/a".to_string(),
            };
            Some(PopularPair {
                to: asset.id,
                rate_text: format!("1 {} = {} {}", base.symbol, rate_text, entry.symbol),
                pair: format!("{} → {}", base.symbol, entry.symbol),
                rate,
            })
        })
        .collect()
}
