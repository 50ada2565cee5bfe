// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

use clap::Parser;
use eyre::{Result, WrapErr};
use monaco_report::{app, Config, Fubar, Order};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;


/// Shows the results table of the qualification, or the stats of one racer.
#[derive(Parser, Debug)]
#[command(name = "monaco-report", version)]
struct Cli {
  /// Directory containing abbreviations.txt, start.log and end.log
  #[arg(long, value_name = "DIR")]
  files: PathBuf,

  /// Show only the racer with this full name
  #[arg(long, value_name = "NAME")]
  driver: Option<String>,

  /// Fastest racer first (default)
  #[arg(long, conflicts_with = "desc")]
  asc: bool,

  /// Slowest racer with a valid time first
  #[arg(long)]
  desc: bool,
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Self {
    let order = if cli.desc {
      Order::Descending
    } else {
      Order::Ascending
    };
    Config::new(cli.files, cli.driver, order)
  }
}


fn main() -> Result<()> {
  color_eyre::install()?;

  // logs go to stderr, stdout is reserved for the report
  let filter = EnvFilter::try_from_default_env()
                 .unwrap_or_else(|_| EnvFilter::new("monaco_report=warn"));
  tracing_subscriber::fmt().with_env_filter(filter)
                           .with_writer(std::io::stderr)
                           .init();

  let config = Config::from(Cli::parse());

  match app::run(&config) {
    Ok(output) => {
      print!("{}", output);
      Ok(())
    }
    Err(Fubar::MissingFile { path, .. }) => {
      print!("{}", app::missing_file_message(&path));
      process::exit(1);
    }
    Err(err) => Err(err).wrap_err_with(|| {
                          format!("could not build report from '{}'",
                                  config.files().display())
                        }),
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;
  use pretty_assertions::assert_eq;

  #[test]
  fn cli_test() {
    Cli::command().debug_assert();

    let cli = Cli::try_parse_from(&["monaco-report",
                                    "--files",
                                    "fake/path",
                                    "--desc"]).unwrap();
    let config = Config::from(cli);
    assert_eq!(&PathBuf::from("fake/path"), config.files());
    assert_eq!(Order::Descending, config.order());
    assert_eq!(None, config.driver().as_deref());

    let cli = Cli::try_parse_from(&["monaco-report",
                                    "--files",
                                    "fake/path",
                                    "--driver",
                                    "Sebastian Vettel"]).unwrap();
    let config = Config::from(cli);
    assert_eq!(Order::Ascending, config.order());
    assert_eq!(Some("Sebastian Vettel"), config.driver().as_deref());

    assert!(Cli::try_parse_from(&["monaco-report", "--asc"]).is_err());
    assert!(Cli::try_parse_from(&["monaco-report",
                                  "--files",
                                  "fake/path",
                                  "--asc",
                                  "--desc"]).is_err());
  }
}
