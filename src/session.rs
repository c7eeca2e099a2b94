use crate::converter::TOP_COUNT;
use crate::error::Error;
use crate::marketdata::{ASSETS, Asset, resolve_asset};
use crate::output::Output;
use crate::widget::Widget;

use log::{debug, info};
use std::io::BufRead;
use std::str::FromStr;

pub const HELP: &str = "commands:
  amount <value>      set the amount to convert
  from <asset>        convert from asset (id or symbol)
  to <asset>          convert to asset (id or symbol)
  swap                swap from and to
  pair <asset>        pick a popular conversion
  top <rank|asset>    pick a row of the top table
  theme               toggle light/dark theme
  refresh             fetch prices again
  show                print the current view
  help                print this help
  quit                leave";

#[derive(Debug, PartialEq)]
pub enum Command {
    Amount(String),
    From(&'static Asset),
    To(&'static Asset),
    Swap,
    Pair(&'static Asset),
    Top(&'static Asset),
    Theme,
    Refresh,
    Show,
    Help,
    Quit,
}

fn parse_asset(argument: Option<&str>) -> Result<&'static Asset, Error> {
    let name = argument.ok_or_else(|| Error::new_asset("missing asset"))?;
    resolve_asset(name).ok_or_else(|| Error::new_asset(format!("unknown asset {name}")))
}

fn parse_top(argument: Option<&str>) -> Result<&'static Asset, Error> {
    match argument.map(|value| value.parse::<usize>()) {
        Some(Ok(rank)) if (1..=TOP_COUNT).contains(&rank) => Ok(&ASSETS[rank - 1]),
        Some(Ok(rank)) => Err(Error::new_asset(format!(
            "rank must be between 1 and {TOP_COUNT}, got {rank}"
        ))),
        _ => parse_asset(argument),
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(Error::new_asset(format!(
                "unexpected argument {extra} for {name}, type help"
            )));
        }
        let command = match name.as_str() {
            "amount" => Command::Amount(argument.unwrap_or_default().to_string()),
            "from" => Command::From(parse_asset(argument)?),
            "to" => Command::To(parse_asset(argument)?),
            "swap" => Command::Swap,
            "pair" => Command::Pair(parse_asset(argument)?),
            "top" => Command::Top(parse_top(argument)?),
            "theme" => Command::Theme,
            "refresh" => Command::Refresh,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                return Err(Error::new_asset(format!(
                    "unknown command {name}, type help"
                )));
            }
        };
        Ok(command)
    }
}

/// Applies one command, returns `false` once the session should stop.
pub fn apply(
    widget: &mut Widget,
    command: Command,
    output: &mut dyn Output,
) -> Result<bool, Error> {
    debug!("apply command {:?}", command);
    let result = match command {
        Command::Amount(text) => {
            widget.set_amount(&text);
            Ok(())
        }
        Command::From(asset) => {
            widget.select_from(asset);
            Ok(())
        }
        Command::To(asset) => {
            widget.select_to(asset);
            Ok(())
        }
        Command::Swap => {
            widget.swap();
            Ok(())
        }
        Command::Pair(asset) => widget.pick_popular(asset),
        Command::Top(asset) => widget.pick_top(asset),
        Command::Theme => {
            widget.toggle_theme();
            Ok(())
        }
        Command::Refresh => {
            widget.refresh();
            Ok(())
        }
        Command::Show => Ok(()),
        Command::Help => {
            output.write_message(HELP)?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    };
    match result {
        Ok(()) => output.write_view(&widget.render())?,
        Err(error) => output.write_message(&error.message)?,
    }
    Ok(true)
}

pub fn run<R: BufRead>(
    widget: &mut Widget,
    input: R,
    output: &mut dyn Output,
) -> Result<(), Error> {
    info!("interactive session started");
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !apply(widget, command, output)? {
                    break;
                }
            }
            Err(error) => output.write_message(&error.message)?,
        }
    }
    info!("interactive session done");
    Ok(())
}
