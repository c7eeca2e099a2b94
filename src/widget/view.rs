use super::{Selection, Theme};
use crate::alias::DateTime;
use crate::converter::{Conversion, History, PopularPair, TopAssetRow, Trend};
use crate::marketdata::find_asset;
use serde::Serialize;

/// What is currently on display. Each panel keeps its last value until a
/// handler manages to recompute it.
#[derive(Debug, Clone, Default)]
pub struct Panels {
    pub conversion: Option<Conversion>,
    pub history: Option<History>,
    pub popular: Vec<PopularPair>,
    pub top: Vec<TopAssetRow>,
    pub last_updated: Option<DateTime>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateChange {
    pub trend: Trend,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub amount: f64,
    pub from: &'static str,
    pub from_symbol: &'static str,
    pub to: &'static str,
    pub to_symbol: &'static str,
    pub converted_amount: Option<String>,
    /// Symbol of the displayed amount. Differs from `to_symbol` while the
    /// last conversion towards the new target could not be computed.
    pub converted_symbol: Option<String>,
    pub rate_text: Option<String>,
    pub rate_change: Option<RateChange>,
    pub last_updated: Option<String>,
    pub popular: Vec<PopularPair>,
    pub top_assets: Vec<TopAssetRow>,
    pub chart: Option<ChartSeries>,
    pub theme: Theme,
    pub theme_icon: &'static str,
    pub error: Option<String>,
}

pub fn format_last_updated(date: DateTime) -> String {
    format!(
        "Last updated: {}",
        date.format("%A, %B %-d, %Y at %I:%M %p")
    )
}

fn symbol_of(id: &'static str) -> &'static str {
    find_asset(id).map(|asset| asset.symbol).unwrap_or(id)
}

pub fn render(selection: &Selection, theme: Theme, panels: &Panels) -> ViewModel {
    let conversion = panels.conversion.as_ref();
    ViewModel {
        amount: selection.amount,
        from: selection.from,
        from_symbol: symbol_of(selection.from),
        to: selection.to,
        to_symbol: symbol_of(selection.to),
        converted_amount: conversion.map(Conversion::converted_text),
        converted_symbol: conversion.map(|conversion| conversion.to_symbol.clone()),
        rate_text: conversion.map(Conversion::rate_text),
        rate_change: conversion.map(|conversion| RateChange {
            trend: conversion.change_trend(),
            text: conversion.change_text(),
        }),
        last_updated: panels.last_updated.map(format_last_updated),
        popular: panels.popular.clone(),
        top_assets: panels.top.clone(),
        chart: panels.history.as_ref().map(|history| ChartSeries {
            label: history.label.clone(),
            labels: history.labels(),
            values: history.values(),
        }),
        theme,
        theme_icon: theme.icon(),
        error: panels.error.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketdata::make_table_;
    use chrono::TimeZone;

    #[test]
    fn empty() {
        let view = render(&Selection::default(), Theme::Light, &Panels::default());
        assert_eq!(view.from, "bitcoin");
        assert_eq!(view.to, "ethereum");
        assert_eq!(view.from_symbol, "BTC");
        assert_eq!(view.to_symbol, "ETH");
        assert!(view.converted_amount.is_none());
        assert!(view.converted_symbol.is_none());
        assert!(view.rate_text.is_none());
        assert!(view.chart.is_none());
        assert!(view.popular.is_empty());
        assert!(view.top_assets.is_empty());
        assert_eq!(view.theme_icon, "moon");
    }

    #[test]
    fn conversion_fields() {
        let table = make_table_(&[("a", 100.0, 1.0, "A"), ("b", 50.0, 0.5, "B")]);
        let panels = Panels {
            conversion: Conversion::compute(&table, "a", "b", 10.0),
            ..Default::default()
        };
        let view = render(&Selection::default(), Theme::Dark, &panels);
        assert_eq!(view.converted_amount.as_deref(), Some("20.00000000"));
        assert_eq!(view.converted_symbol.as_deref(), Some("B"));
        assert_eq!(view.rate_text.as_deref(), Some("1 A = 2.00000000 B"));
        assert_eq!(
            view.rate_change,
            Some(RateChange {
                trend: Trend::Down,
                text: "0.50%".to_string()
            })
        );
        assert_eq!(view.theme_icon, "sun");
    }

    #[test]
    fn last_updated() {
        let date = chrono::Local
            .with_ymd_and_hms(2026, 10, 18, 15, 4, 0)
            .unwrap();
        assert_eq!(
            format_last_updated(date),
            "Last updated: Sunday, October 18, 2026 at 03:04 PM"
        );
    }
}
