use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub from: &'static str,
    pub to: &'static str,
    pub amount: f64,
}

impl Selection {
    pub fn new(from: &'static str, to: &'static str, amount: f64) -> Self {
        Self { from, to, amount }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new("bitcoin", "ethereum", 1.0)
    }
}

/// Amount typed by the user; anything that is not a finite number counts as 0.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offered to switch away from the current theme.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}
