// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::racer::Racer;
use serde::{de::{value::{self, StrDeserializer}, IntoDeserializer},
            Deserialize};
use std::{fmt, str::FromStr};
use tracing::debug;


/// Direction of the lap time ranking. Racers without a valid lap time are
/// listed last in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
  #[serde(alias = "asc")]
  Ascending,
  #[serde(alias = "desc")]
  Descending,
}

impl Default for Order {
  fn default() -> Self {
    Self::Ascending
  }
}

impl fmt::Display for Order {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Ascending => write!(f, "asc"),
      Self::Descending => write!(f, "desc"),
    }
  }
}

impl FromStr for Order {
  type Err = String;

  /// Accepts the same names as deserialization: `asc`, `ascending`, `desc`
  /// and `descending`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let de: StrDeserializer<value::Error> = s.into_deserializer();
    Self::deserialize(de).map_err(|err| err.to_string())
  }
}


/// Orders `racers` for the report: everybody with a valid lap time first,
/// sorted by lap time in the requested direction, then everybody else in the
/// order they were handed in.
///
/// The sort is a single stable sort on `Racer::sort_key`, so building the
/// same input twice always gives the same result.
pub fn build_report(racers: &[Racer], order: Order) -> Vec<&Racer> {
  let mut report: Vec<&Racer> = racers.iter().collect();
  report.sort_by_key(|racer| racer.sort_key(order));

  debug!(racers = report.len(),
         ranked = report.iter().filter(|racer| racer.has_lap_time()).count(),
         %order,
         "built report");
  report
}
