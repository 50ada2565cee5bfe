// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Author: Florian Eich <florian@bmc-labs.com>

use super::{config::Config,
            fubar::Fubar,
            race_data::{RaceData, ABBREVIATIONS_FILE, END_FILE, START_FILE},
            Result};
use std::path::Path;
use tracing::{info, warn};


/// Runs the whole pipeline for `config` and returns the text to print.
///
/// Asking for a racer that doesn't exist is not an error, it produces a
/// message instead. Every other failure is handed back to the caller and
/// nothing is rendered.
pub fn run(config: &Config) -> Result<String> {
  let race_data = RaceData::load(config.files())?;

  match config.driver() {
    Some(name) => {
      info!(driver = %name, "rendering single racer");
      match race_data.render_racer(name) {
        Err(Fubar::UnknownRacer(name)) => {
          warn!(driver = %name, "no racer with that name");
          Ok(unknown_racer_message())
        }
        rendered => rendered,
      }
    }
    None => {
      info!(order = %config.order(), "rendering report");
      Ok(race_data.render_report(config.order()))
    }
  }
}

pub fn unknown_racer_message() -> String {
  "There is the wrong racers name. Please, check the spelling\n".to_string()
}

pub fn missing_file_message(path: &Path) -> String {
  format!("No such file or directory: '{}' Please, check the folder path and \
           if the files {}, {}, {} files are exist\n",
          path.display(),
          START_FILE,
          END_FILE,
          ABBREVIATIONS_FILE)
}
