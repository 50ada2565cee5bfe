// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{fubar::Fubar, racer::Racer, report::Order, Result};
use getset::CopyGetters;
use std::fmt;


/// Last rank of the top group which the separator line cuts off.
pub const TOP_GROUP: usize = 15;
/// Width of the separator line, same as a row holding full-width columns.
pub const SEPARATOR_WIDTH: usize = 62;

const NAME_WIDTH: usize = 20;
const TEAM_WIDTH: usize = 25;
const NO_RANK: &str = "-";


/// A racer as it appears in the rendered report. Only racers with a valid lap
/// time have a rank; the fastest racer is always rank 1.
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
pub struct ReportEntry<'a> {
  #[getset(get_copy = "pub")]
  rank:  Option<usize>,
  #[getset(get_copy = "pub")]
  racer: &'a Racer,
}

impl fmt::Display for ReportEntry<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.rank {
      Some(rank) => write!(f, "{} ", rank)?,
      None => write!(f, "{} ", NO_RANK)?,
    }
    write!(f,
           "{:<name_w$.name_w$} | {:<team_w$.team_w$} | {}",
           self.racer.name(),
           self.racer.team(),
           self.racer.lap_time_str(),
           name_w = NAME_WIDTH,
           team_w = TEAM_WIDTH)
  }
}


/// Attaches ranks to a report built by `report::build_report`. Ranks count
/// up from the top for ascending order and down for descending order, so
/// that the fastest racer always ends up as rank 1.
pub fn rank_entries<'a>(report: &[&'a Racer], order: Order) -> Vec<ReportEntry<'a>> {
  let ranked = report.iter().filter(|racer| racer.has_lap_time()).count();

  let mut position = 0;
  report.iter()
        .map(|&racer| {
          let rank = if racer.has_lap_time() {
            position += 1;
            match order {
              Order::Ascending => Some(position),
              Order::Descending => Some(ranked + 1 - position),
            }
          } else {
            None
          };
          ReportEntry { rank, racer }
        })
        .collect()
}

/// Renders the ranked report, one line per racer. A separator line follows
/// the entry holding the boundary between the top group and the rest: rank
/// 15 in ascending order, rank 16 in descending order.
pub fn render_report(report: &[&Racer], order: Order) -> String {
  let boundary = match order {
    Order::Ascending => TOP_GROUP,
    Order::Descending => TOP_GROUP + 1,
  };

  let mut out = String::new();
  for entry in rank_entries(report, order) {
    out.push_str(&entry.to_string());
    out.push('\n');
    if entry.rank() == Some(boundary) {
      out.push_str(&"-".repeat(SEPARATOR_WIDTH));
      out.push('\n');
    }
  }
  out
}

/// Renders the three line block for the racer called `name`, skipping the
/// ranking altogether. Name and team lines keep a trailing blank. With more than one racer of that name the first one
/// in roster order is used.
pub fn render_racer(racers: &[Racer], name: &str) -> Result<String> {
  let racer = racers.iter()
                    .find(|racer| racer.name() == name)
                    .ok_or_else(|| Fubar::UnknownRacer(name.to_string()))?;

  Ok(format!("Racer - {} \nTeam - {} \nTime - {}\n",
             racer.name(),
             racer.team(),
             racer.lap_time_str()))
}
