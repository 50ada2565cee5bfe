// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

use super::report::Order;
use getset::{CopyGetters, Getters};
use std::path::PathBuf;


/// Everything a report run needs to know, populated once at process start.
#[derive(Clone, Debug, Default, PartialEq, CopyGetters, Getters)]
pub struct Config {
  /// Directory holding `abbreviations.txt`, `start.log` and `end.log`.
  #[getset(get = "pub")]
  files:  PathBuf,
  /// Print only this racer instead of the full report.
  #[getset(get = "pub")]
  driver: Option<String>,
  #[getset(get_copy = "pub")]
  order:  Order,
}

impl Config {
  pub fn new(files: PathBuf, driver: Option<String>, order: Order) -> Self {
    Self { files,
           driver,
           order }
  }
}
