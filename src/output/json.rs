use crate::error::Error;
use crate::output::Output;
use crate::widget::ViewModel;

use serde_json::json;
use std::io::Write;

/// One pretty printed JSON document per render.
pub struct JsonOutput<W: Write> {
    output_stream: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(output_stream: W) -> Self {
        Self { output_stream }
    }

    pub fn into_inner(self) -> W {
        self.output_stream
    }
}

impl<W: Write> Output for JsonOutput<W> {
    fn write_view(&mut self, view: &ViewModel) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut self.output_stream, view)
            .map_err(|error| Error::new_output(format!("unable to write view : {error}")))?;
        writeln!(self.output_stream)?;
        self.output_stream.flush()?;
        Ok(())
    }

    fn write_message(&mut self, message: &str) -> Result<(), Error> {
        serde_json::to_writer(&mut self.output_stream, &json!({ "message": message }))
            .map_err(|error| Error::new_output(format!("unable to write message : {error}")))?;
        writeln!(self.output_stream)?;
        self.output_stream.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{Conversion, top_assets};
    use crate::marketdata::{ASSETS, sample_table_};
    use crate::widget::{Panels, Selection, Theme, render};
    use serde_json::Value;

    #[test]
    fn view_document() {
        let table = sample_table_();
        let panels = Panels {
            conversion: Conversion::compute(&table, "bitcoin", "ethereum", 10.0),
            top: top_assets(&ASSETS, &table),
            ..Default::default()
        };
        let view = render(&Selection::new("bitcoin", "ethereum", 10.0), Theme::Dark, &panels);

        let mut output = JsonOutput::new(Vec::new());
        output.write_view(&view).unwrap();
        let document: Value = serde_json::from_slice(&output.into_inner()).unwrap();

        assert_eq!(document["from"], "bitcoin");
        assert_eq!(document["to_symbol"], "ETH");
        assert_eq!(document["converted_amount"], "200.00000000");
        assert_eq!(document["converted_symbol"], "ETH");
        assert_eq!(document["rate_text"], "1 BTC = 20.00000000 ETH");
        assert_eq!(document["rate_change"]["trend"], "down");
        assert_eq!(document["theme"], "dark");
        assert_eq!(document["top_assets"].as_array().unwrap().len(), 6);
        assert_eq!(document["top_assets"][0]["price_text"], "$60,000.00");
        assert_eq!(document["chart"], Value::Null);
        assert_eq!(document["error"], Value::Null);
    }

    #[test]
    fn message() {
        let mut output = JsonOutput::new(Vec::new());
        output.write_message("unknown asset doge").unwrap();
        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text, "{\"message\":\"unknown asset doge\"}\n");
    }
}
