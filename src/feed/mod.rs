use crate::alias::DateTime;
use log::{debug, error, info};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::Error;
use crate::marketdata::{Asset, PriceEntry, PriceTable};

mod coingecko;
mod file;
pub use coingecko::*;
pub use file::*;

/// One asset as returned by the price source. Either field may be absent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

impl RawQuote {
    pub fn new(usd: f64, usd_24h_change: f64) -> Self {
        Self {
            usd: Some(usd),
            usd_24h_change: Some(usd_24h_change),
        }
    }
}

pub type Payload = HashMap<String, RawQuote>;

pub trait Requester {
    fn request(&self, assets: &[Asset]) -> Result<Payload, Error>;
}

pub struct NullRequester;
impl Requester for NullRequester {
    fn request(&self, _assets: &[Asset]) -> Result<Payload, Error> {
        Ok(Default::default())
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Builds a table with exactly one entry per listed asset.
pub fn normalize(assets: &[Asset], payload: &Payload, now: DateTime) -> PriceTable {
    let entries = assets
        .iter()
        .map(|asset| {
            let quote = payload.get(asset.id).copied().unwrap_or_else(|| {
                debug!("no quote for {} in feed response, default to 0", asset.id);
                RawQuote::default()
            });
            let entry = PriceEntry::new(
                finite_or_zero(quote.usd),
                finite_or_zero(quote.usd_24h_change),
                asset.symbol,
            );
            (asset.id.to_string(), entry)
        })
        .collect();
    PriceTable::new(entries, now)
}

/// Owner of the current price table.
///
/// The table is only ever swapped as a whole; a failed refresh keeps the
/// previous one.
pub struct PriceBook {
    assets: Vec<Asset>,
    table: Option<PriceTable>,
}

impl PriceBook {
    pub fn new(assets: &[Asset]) -> Self {
        Self {
            assets: assets.to_vec(),
            table: None,
        }
    }

    pub fn current(&self) -> Option<&PriceTable> {
        self.table.as_ref()
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn refresh(&mut self, requester: &dyn Requester) -> Result<&PriceTable, Error> {
        self.refresh_at(requester, chrono::Local::now())
    }

    pub fn refresh_at(
        &mut self,
        requester: &dyn Requester,
        now: DateTime,
    ) -> Result<&PriceTable, Error> {
        info!("try to fetch exchange rates for {} assets", self.assets.len());
        let payload = requester.request(&self.assets).inspect_err(|err| {
            error!("Failed to fetch exchange rates: {}", err);
        })?;
        let table = normalize(&self.assets, &payload, now);
        info!(
            "fetch exchange rates done, {} entries at {}",
            table.len(),
            now.format("%Y-%m-%d %H:%M:%S")
        );
        let table: &PriceTable = self.table.insert(table);
        Ok(table)
    }
}
