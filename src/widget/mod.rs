mod state;
mod view;

pub use state::*;
pub use view::*;

use crate::converter::{Conversion, History, TOP_COUNT, popular_pairs, top_assets};
use crate::error::Error;
use crate::feed::{PriceBook, Requester};
use crate::marketdata::{Asset, PriceTable};

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The conversion widget controller.
///
/// Every user action is a handler method; each one recomputes only the panels
/// that depend on what it changed:
///
/// | handler          | conversion | history | popular | top |
/// |------------------|:----------:|:-------:|:-------:|:---:|
/// | `refresh`        | x          | x       | x       | x   |
/// | `set_amount`     | x          |         |         |     |
/// | `select_from`    | x          | x       | x       |     |
/// | `pick_top`       | x          | x       | x       |     |
/// | `select_to`      | x          | x       |         |     |
/// | `pick_popular`   | x          | x       |         |     |
/// | `swap`           | x          | x       |         |     |
pub struct Widget {
    book: PriceBook,
    requester: Box<dyn Requester>,
    selection: Selection,
    theme: Theme,
    panels: Panels,
    rng: StdRng,
}

impl Widget {
    pub fn new(assets: &[Asset], requester: Box<dyn Requester>, selection: Selection) -> Self {
        Self::with_rng(assets, requester, selection, StdRng::from_os_rng())
    }

    pub fn with_rng(
        assets: &[Asset],
        requester: Box<dyn Requester>,
        selection: Selection,
        rng: StdRng,
    ) -> Self {
        Self {
            book: PriceBook::new(assets),
            requester,
            selection,
            theme: Theme::default(),
            panels: Panels::default(),
            rng,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn prices(&self) -> Option<&PriceTable> {
        self.book.current()
    }

    pub fn render(&self) -> ViewModel {
        render(&self.selection, self.theme, &self.panels)
    }

    /// Fetches new prices. A failure keeps the previous prices and panels and
    /// only raises the error banner; returns whether prices were updated.
    pub fn refresh(&mut self) -> bool {
        let refreshed = self
            .book
            .refresh(self.requester.as_ref())
            .map(|table| table.updated_at());
        match refreshed {
            Ok(updated_at) => {
                self.panels.last_updated = Some(updated_at);
                self.panels.error = None;
                self.update_conversion();
                self.update_popular();
                self.update_top();
                self.update_history();
                true
            }
            Err(error) => {
                self.panels.error = Some(format!(
                    "Failed to fetch exchange rates: {}",
                    error.message
                ));
                false
            }
        }
    }

    pub fn set_amount(&mut self, text: &str) {
        self.selection.amount = parse_amount(text);
        info!("amount set to {}", self.selection.amount);
        self.update_conversion();
    }

    pub fn select_from(&mut self, asset: &'static Asset) {
        info!("from set to {}", asset.id);
        self.selection.from = asset.id;
        self.update_conversion();
        self.update_history();
        self.update_popular();
    }

    pub fn select_to(&mut self, asset: &'static Asset) {
        info!("to set to {}", asset.id);
        self.selection.to = asset.id;
        self.update_conversion();
        self.update_history();
    }

    pub fn swap(&mut self) {
        self.selection.swap();
        info!(
            "swapped, from {} to {}",
            self.selection.from, self.selection.to
        );
        self.update_conversion();
        self.update_history();
    }

    /// Click on a popular pair: `asset` becomes the target.
    pub fn pick_popular(&mut self, asset: &'static Asset) -> Result<(), Error> {
        if !self.panels.popular.iter().any(|pair| pair.to == asset.id) {
            return Err(Error::new_asset(format!(
                "{} is not in the popular conversions",
                asset.id
            )));
        }
        self.select_to(asset);
        Ok(())
    }

    /// Click on a row of the top table: `asset` becomes the source.
    pub fn pick_top(&mut self, asset: &'static Asset) -> Result<(), Error> {
        if !self.book.assets().iter().take(TOP_COUNT).any(|top| top.id == asset.id) {
            return Err(Error::new_asset(format!(
                "{} is not in the top assets",
                asset.id
            )));
        }
        self.select_from(asset);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        info!("theme set to {}", self.theme);
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn update_conversion(&mut self) {
        let Some(table) = self.book.current() else {
            return;
        };
        let Selection { from, to, amount } = self.selection;
        match Conversion::compute(table, from, to, amount) {
            Some(conversion) => self.panels.conversion = Some(conversion),
            None => warn!("no usable price for {} to {}, conversion not updated", from, to),
        }
    }

    fn update_history(&mut self) {
        let Some(table) = self.book.current() else {
            return;
        };
        let today = chrono::Local::now().date_naive();
        let Selection { from, to, .. } = self.selection;
        match History::generate(table, from, to, today, &mut self.rng) {
            Some(history) => self.panels.history = Some(history),
            None => warn!("no usable price for {} to {}, history not updated", from, to),
        }
    }

    fn update_popular(&mut self) {
        let Some(table) = self.book.current() else {
            return;
        };
        self.panels.popular = popular_pairs(self.book.assets(), table, self.selection.from);
    }

    fn update_top(&mut self) {
        if let Some(table) = self.book.current() {
            self.panels.top = top_assets(self.book.assets(), table);
        }
    }
}
