#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Crypto,
    Fiat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    pub id: &'static str,
    pub symbol: &'static str,
    pub kind: AssetKind,
}

impl Asset {
    const fn new(id: &'static str, symbol: &'static str, kind: AssetKind) -> Self {
        Self { id, symbol, kind }
    }

    /// Id with its first character upper-cased, e.g. `Binancecoin`.
    pub fn display_name(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn logo_url(&self) -> String {
        format!(
            "https://cryptologos.cc/logos/{}-{}-logo.png",
            self.id,
            self.symbol.to_lowercase()
        )
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.symbol)
    }
}

pub static ASSETS: [Asset; 9] = [
    Asset::new("bitcoin", "BTC", AssetKind::Crypto),
    Asset::new("ethereum", "ETH", AssetKind::Crypto),
    Asset::new("tether", "USDT", AssetKind::Crypto),
    Asset::new("binancecoin", "BNB", AssetKind::Crypto),
    Asset::new("ripple", "XRP", AssetKind::Crypto),
    Asset::new("solana", "SOL", AssetKind::Crypto),
    Asset::new("usd", "USD", AssetKind::Fiat),
    Asset::new("eur", "EUR", AssetKind::Fiat),
    Asset::new("gbp", "GBP", AssetKind::Fiat),
];

pub fn find_asset(id: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.id == id)
}

/// Looks up an asset by id, then by symbol ignoring case.
pub fn resolve_asset(name: &str) -> Option<&'static Asset> {
    let name = name.trim();
    find_asset(name).or_else(|| {
        ASSETS.iter().find(|asset| {
            asset.symbol.eq_ignore_ascii_case(name) || asset.id.eq_ignore_ascii_case(name)
        })
    })
}
