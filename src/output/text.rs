use crate::converter::Trend;
use crate::error::Error;
use crate::output::Output;
use crate::widget::ViewModel;

use std::io::Write;

pub struct TextOutput<W: Write> {
    output_stream: W,
}

impl<W: Write> TextOutput<W> {
    pub fn new(output_stream: W) -> Self {
        Self { output_stream }
    }

    pub fn into_inner(self) -> W {
        self.output_stream
    }

    fn write_conversion(&mut self, view: &ViewModel) -> Result<(), Error> {
        writeln!(self.output_stream, "Amount    : {} {}", view.amount, view.from_symbol)?;
        match (&view.converted_amount, &view.converted_symbol) {
            (Some(converted), Some(symbol)) => writeln!(
                self.output_stream,
                "Converted : {} {}",
                converted, symbol
            )?,
            _ => writeln!(self.output_stream, "Converted : - {}", view.to_symbol)?,
        }
        if let Some(rate_text) = &view.rate_text {
            match &view.rate_change {
                Some(change) => {
                    let arrow = match change.trend {
                        Trend::Up => "▲",
                        Trend::Down => "▼",
                    };
                    writeln!(
                        self.output_stream,
                        "Rate      : {} ({} {})",
                        rate_text, arrow, change.text
                    )?
                }
                None => writeln!(self.output_stream, "Rate      : {}", rate_text)?,
            }
        }
        Ok(())
    }

    fn write_popular(&mut self, view: &ViewModel) -> Result<(), Error> {
        if view.popular.is_empty() {
            return Ok(());
        }
        writeln!(self.output_stream)?;
        writeln!(self.output_stream, "Popular conversions")?;
        for pair in view.popular.iter() {
            writeln!(
                self.output_stream,
                "  {:<14}{}",
                pair.pair, pair.rate_text
            )?;
        }
        Ok(())
    }

    fn write_top_assets(&mut self, view: &ViewModel) -> Result<(), Error> {
        if view.top_assets.is_empty() {
            return Ok(());
        }
        writeln!(self.output_stream)?;
        writeln!(self.output_stream, "Top cryptocurrencies")?;
        writeln!(
            self.output_stream,
            "  {:<3}{:<18}{:>16}{:>10}",
            "#", "Name", "Price", "24h"
        )?;
        for row in view.top_assets.iter() {
            writeln!(
                self.output_stream,
                "  {:<3}{:<18}{:>16}{:>10}",
                row.rank,
                format!("{} {}", row.name, row.symbol),
                row.price_text,
                row.change_text
            )?;
        }
        Ok(())
    }

    fn write_chart(&mut self, view: &ViewModel) -> Result<(), Error> {
        let Some(chart) = &view.chart else {
            return Ok(());
        };
        writeln!(self.output_stream)?;
        writeln!(self.output_stream, "{} (last 7 days)", chart.label)?;
        for (label, value) in chart.labels.iter().zip(chart.values.iter()) {
            writeln!(self.output_stream, "  {:<8}{}", label, value)?;
        }
        Ok(())
    }
}

impl<W: Write> Output for TextOutput<W> {
    fn write_view(&mut self, view: &ViewModel) -> Result<(), Error> {
        writeln!(
            self.output_stream,
            "== {} → {} == [theme: {}, toggle: {}]",
            view.from_symbol, view.to_symbol, view.theme, view.theme_icon
        )?;
        if let Some(error) = &view.error {
            writeln!(self.output_stream, "!! {}", error)?;
        }
        if let Some(last_updated) = &view.last_updated {
            writeln!(self.output_stream, "{}", last_updated)?;
        }
        self.write_conversion(view)?;
        self.write_popular(view)?;
        self.write_top_assets(view)?;
        self.write_chart(view)?;
        self.output_stream.flush()?;
        Ok(())
    }

    fn write_message(&mut self, message: &str) -> Result<(), Error> {
        writeln!(self.output_stream, "{}", message)?;
        self.output_stream.flush()?;
        Ok(())
    }
}
