use super::{Trend, format_signed_percent, format_usd};
use crate::marketdata::{Asset, PriceTable};
use serde::Serialize;

/// Size of the top table. The cut is positional: the first entries of the
/// asset list, not a ranking by market cap.
pub const TOP_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopAssetRow {
    pub rank: usize,
    pub id: &'static str,
    pub name: String,
    pub symbol: &'static str,
    pub logo_url: String,
    pub price: f64,
    pub price_text: String,
    pub change_24h: f64,
    pub change_text: String,
    pub trend: Trend,
}

pub fn top_assets(assets: &[Asset], table: &PriceTable) -> Vec<TopAssetRow> {
    assets
        .iter()
        .take(TOP_COUNT)
        .enumerate()
        .filter_map(|(index, asset)| {
            let entry = table.get(asset.id)?;
            Some(TopAssetRow {
                rank: index + 1,
                id: asset.id,
                name: asset.display_name(),
                symbol: asset.symbol,
                logo_url: asset.logo_url(),
                price: entry.price,
                price_text: format_usd(entry.price),
                change_24h: entry.change_24h,
                change_text: format_signed_percent(entry.change_24h),
                trend: Trend::of(entry.change_24h),
            })
        })
        .collect()
}
