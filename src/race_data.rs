// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Jonas Reitemeyer <jonas@bmc-labs.com>
//   Florian Eich <florian@bmc-labs.com>

use super::{racer::Racer,
            render,
            report::{self, Order},
            roster::Roster,
            timing::{self, TimingField},
            Result};
use getset::Getters;
use std::path::Path;
use tracing::debug;


pub const ABBREVIATIONS_FILE: &str = "abbreviations.txt";
pub const START_FILE: &str = "start.log";
pub const END_FILE: &str = "end.log";


/// Holds all racers of one event, in the order of the abbreviations file.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct RaceData {
  racers: Vec<Racer>,
}

impl RaceData {
  /// Loads the three input files from `dir`: roster first, then the start
  /// log, then the end log. Fails on the first missing or malformed file.
  pub fn load(dir: &Path) -> Result<Self> {
    let mut roster = Roster::load(&dir.join(ABBREVIATIONS_FILE))?;
    timing::merge_file(&dir.join(START_FILE),
                       &mut roster,
                       TimingField::StartTime)?;
    timing::merge_file(&dir.join(END_FILE),
                       &mut roster,
                       TimingField::FinishTime)?;

    debug!(dir = %dir.display(), racers = roster.len(), "loaded race data");
    Ok(Self::from(roster))
  }

  /// Same as `load`, but from the contents of the three files.
  pub fn parse(abbreviations: &str, start: &str, end: &str) -> Result<Self> {
    let mut roster = Roster::parse(abbreviations)?;
    timing::merge(start, &mut roster, TimingField::StartTime)?;
    timing::merge(end, &mut roster, TimingField::FinishTime)?;
    Ok(Self::from(roster))
  }

  pub fn number_of_racers(&self) -> usize {
    self.racers.len()
  }

  pub fn report(&self, order: Order) -> Vec<&Racer> {
    report::build_report(&self.racers, order)
  }

  pub fn render_report(&self, order: Order) -> String {
    render::render_report(&self.report(order), order)
  }

  pub fn render_racer(&self, name: &str) -> Result<String> {
    render::render_racer(&self.racers, name)
  }
}

impl From<Roster> for RaceData {
  fn from(roster: Roster) -> Self {
    Self { racers: roster.into_iter().map(Racer::from).collect() }
  }
}
