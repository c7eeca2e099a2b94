use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use log::info;

mod alias;
mod converter;
mod error;
mod feed;
mod marketdata;
mod output;
mod session;
mod widget;

use feed::{COINGECKO_BASE_URL, CoingeckoRequester, FileRequester, NullRequester, Requester};
use marketdata::{ASSETS, Asset, resolve_asset};
use output::{JsonOutput, Output, TextOutput};
use widget::{Selection, Theme, Widget, parse_amount};

use error::Error;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SpotSource {
    Null,
    Coingecko,
    File,
}

impl std::fmt::Display for SpotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputType {
    Text,
    Json,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Convert an amount between cryptocurrencies and fiat currencies
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// amount to convert
    #[clap(default_value = "1", short, long, value_parser)]
    amount: String,

    /// asset to convert from (id or symbol)
    #[clap(default_value = "bitcoin", short, long, value_parser)]
    from: String,

    /// asset to convert to (id or symbol)
    #[clap(default_value = "ethereum", short, long, value_parser)]
    to: String,

    /// spot source
    #[clap(default_value_t = SpotSource::Coingecko, short, long, value_parser)]
    spot_source: SpotSource,

    /// base url of the coingecko api
    #[clap(default_value = COINGECKO_BASE_URL, long, value_parser)]
    feed_url: String,

    /// price file, used with the file spot source
    #[clap(long, value_parser)]
    feed_file: Option<String>,

    /// output type
    #[clap(default_value_t = OutputType::Text, short, long, value_parser)]
    output_type: OutputType,

    /// initial theme
    #[clap(default_value_t = Theme::Light, long, value_parser)]
    theme: Theme,

    /// read commands from stdin
    #[clap(short, long)]
    interactive: bool,
}

fn make_requester(args: &Args) -> Result<Box<dyn Requester>, Error> {
    let value: Box<dyn Requester> = match args.spot_source {
        SpotSource::Null => Box::new(NullRequester),
        SpotSource::Coingecko => Box::new(CoingeckoRequester::with_base_url(&args.feed_url)?),
        SpotSource::File => {
            let path = args.feed_file.as_ref().ok_or_else(|| {
                Error::new_feed("--feed-file is mandatory with the file spot source")
            })?;
            Box::new(FileRequester::new(path))
        }
    };
    Ok(value)
}

fn make_asset(name: &str) -> Result<&'static Asset, Error> {
    resolve_asset(name).ok_or_else(|| Error::new_asset(format!("unknown asset {name}")))
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    //
    // selection
    let from = make_asset(&args.from)?;
    let to = make_asset(&args.to)?;
    let selection = Selection::new(from.id, to.id, parse_amount(&args.amount));
    info!("converting {} {} to {}", selection.amount, from, to);

    //
    // widget
    let requester = make_requester(&args)?;
    let mut widget = Widget::new(&ASSETS, requester, selection);
    widget.set_theme(args.theme);

    //
    // first price fetch, a failure only leaves the view empty
    if widget.refresh() {
        info!("fetch prices done");
    }

    //
    // write output
    let stdout = std::io::stdout();
    let mut output: Box<dyn Output> = match args.output_type {
        OutputType::Text => Box::new(TextOutput::new(stdout.lock())),
        OutputType::Json => Box::new(JsonOutput::new(stdout.lock())),
    };
    output.write_view(&widget.render())?;
    if args.interactive {
        let stdin = std::io::stdin();
        session::run(&mut widget, stdin.lock(), output.as_mut())?;
    }
    info!("write output done");

    Ok(())
}
