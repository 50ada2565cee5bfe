// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Jonas Reitemeyer <jonas@bmc-labs.com>
//   Florian Eich <florian@bmc-labs.com>

use super::{report::Order,
            roster::{Code, RosterEntry}};
use chrono::{Duration, NaiveDateTime};
use getset::{CopyGetters, Getters};
use std::cmp::Ordering;


/// Rendered in place of a lap time whenever there is no valid one.
pub const INCORRECT_DATA: &str = "Incorrect data";


/// One racer with everything the logs had to say about it.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct Racer {
  #[getset(get = "pub")]
  name:        String,
  #[getset(get = "pub")]
  code:        Code,
  #[getset(get = "pub")]
  team:        String,
  #[getset(get_copy = "pub")]
  start_time:  Option<NaiveDateTime>,
  #[getset(get_copy = "pub")]
  finish_time: Option<NaiveDateTime>,
}

impl Racer {
  pub fn new(name: String,
             code: Code,
             team: String,
             start_time: Option<NaiveDateTime>,
             finish_time: Option<NaiveDateTime>)
             -> Self {
    Self { name,
           code,
           team,
           start_time,
           finish_time }
  }

  /// Finish minus start, but only if both are known and the result is
  /// strictly positive.
  pub fn lap_time(&self) -> Option<Duration> {
    let lap_time = self.finish_time?.signed_duration_since(self.start_time?);
    if lap_time > Duration::zero() {
      Some(lap_time)
    } else {
      None
    }
  }

  pub fn has_lap_time(&self) -> bool {
    self.lap_time().is_some()
  }

  /// Lap time as `M:SS.mmm`, truncated to milliseconds, or `INCORRECT_DATA`.
  pub fn lap_time_str(&self) -> String {
    match self.lap_time() {
      Some(lap_time) => format_lap_time(lap_time),
      None => INCORRECT_DATA.to_string(),
    }
  }

  /// Composite sort key: racers without a lap time always go last, only the
  /// duration part is flipped for descending order. All racers without a lap
  /// time share one key so a stable sort keeps them in input order.
  ///
  /// Negating is lossless, the duration range is symmetric and any lap time
  /// between two valid timestamps lies well within it.
  pub fn sort_key(&self, order: Order) -> (bool, Duration) {
    match self.lap_time() {
      Some(lap_time) => match order {
        Order::Ascending => (false, lap_time),
        Order::Descending => (false, -lap_time),
      },
      None => (true, Duration::zero()),
    }
  }

  /// Valid before invalid, shorter before longer.
  pub fn cmp_lap_time(&self, other: &Self) -> Ordering {
    self.sort_key(Order::Ascending)
        .cmp(&other.sort_key(Order::Ascending))
  }
}

impl From<RosterEntry> for Racer {
  fn from(entry: RosterEntry) -> Self {
    let identity = entry.identity();
    Self::new(identity.name().clone(),
              identity.code().clone(),
              identity.team().clone(),
              entry.start_time(),
              entry.finish_time())
  }
}


fn format_lap_time(lap_time: Duration) -> String {
  let millis = lap_time.num_milliseconds();
  format!("{}:{:02}.{:03}",
          millis / 60_000,
          (millis / 1_000) % 60,
          millis % 1_000)
}


#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;
  use pretty_assertions::assert_eq;


  fn at(h: u32, m: u32, s: u32, micro: u32) -> Option<NaiveDateTime> {
    Some(NaiveDate::from_ymd(2018, 5, 24).and_hms_micro(h, m, s, micro))
  }

  fn racer(start: Option<NaiveDateTime>,
           finish: Option<NaiveDateTime>)
           -> Racer {
    Racer::new("Alex".to_string(),
               Code::new("ALX").unwrap(),
               "Red Bull".to_string(),
               start,
               finish)
  }

  #[test]
  fn lap_time_test() {
    let racer1 = racer(at(12, 2, 58, 917), at(12, 4, 3, 332));
    assert_eq!(Some(Duration::seconds(64) + Duration::microseconds(999_415)),
               racer1.lap_time());
    assert_eq!("1:04.999", &racer1.lap_time_str());
    assert_eq!(true, racer1.has_lap_time());

    let racer2 = racer(at(12, 13, 4, 512), None);
    assert_eq!(None, racer2.lap_time());
    assert_eq!("Incorrect data", &racer2.lap_time_str());
    assert_eq!(false, racer2.has_lap_time());

    assert_eq!(None, racer(None, at(12, 13, 4, 512)).lap_time());
    assert_eq!(None, racer(None, None).lap_time());
  }

  #[test]
  fn lap_time_not_positive_test() {
    // finish before start
    let racer1 = racer(at(12, 14, 12, 54), at(12, 11, 24, 67));
    assert_eq!(None, racer1.lap_time());
    assert_eq!("Incorrect data", &racer1.lap_time_str());

    // zero duration
    let racer2 = racer(at(12, 14, 12, 54), at(12, 14, 12, 54));
    assert_eq!(None, racer2.lap_time());

    let racer3 = racer(at(12, 14, 12, 54), at(12, 14, 12, 55));
    assert_eq!(Some(Duration::microseconds(1)), racer3.lap_time());
    assert_eq!("0:00.000", &racer3.lap_time_str());
  }

  #[test]
  fn lap_time_str_test() {
    assert_eq!("1:04.083",
               &racer(at(12, 2, 58, 917_000), at(12, 4, 3, 332)).lap_time_str());
    assert_eq!("1:12.999",
               &racer(at(12, 13, 4, 512), at(12, 14, 17, 169)).lap_time_str());
    assert_eq!("0:59.100",
               &racer(at(12, 0, 0, 0), at(12, 0, 59, 100_000)).lap_time_str());
    assert_eq!("62:00.000",
               &racer(at(12, 0, 0, 0), at(13, 2, 0, 0)).lap_time_str());
  }

  #[test]
  fn sort_key_test() {
    let fast = racer(at(12, 0, 0, 0), at(12, 1, 0, 0));
    let slow = racer(at(12, 0, 0, 0), at(12, 2, 0, 0));
    let invalid = racer(at(12, 2, 0, 0), at(12, 1, 0, 0));

    let minute = Duration::minutes(1);
    assert_eq!((false, minute), fast.sort_key(Order::Ascending));
    assert_eq!((false, -minute), fast.sort_key(Order::Descending));
    assert_eq!((true, Duration::zero()), invalid.sort_key(Order::Ascending));
    assert_eq!((true, Duration::zero()), invalid.sort_key(Order::Descending));

    assert_eq!(Ordering::Less, fast.cmp_lap_time(&slow));
    assert_eq!(Ordering::Greater, slow.cmp_lap_time(&fast));
    assert_eq!(Ordering::Less, slow.cmp_lap_time(&invalid));
    assert_eq!(Ordering::Equal,
               invalid.cmp_lap_time(&racer(None, at(12, 1, 0, 0))));
  }

  #[test]
  fn from_roster_entry_test() {
    let identity = crate::roster::IdentityRecord::new(Code::new("SVF").unwrap(),
                                                       "Sebastian Vettel".to_string(),
                                                       "FERRARI".to_string());
    let mut entry = RosterEntry::new(identity);
    entry.set_start_time(at(12, 2, 58, 917_000));

    let racer = Racer::from(entry);
    assert_eq!("Sebastian Vettel", racer.name());
    assert_eq!("SVF", racer.code().as_str());
    assert_eq!("FERRARI", racer.team());
    assert_eq!(at(12, 2, 58, 917_000), racer.start_time());
    assert_eq!(None, racer.finish_time());
    assert_eq!(None, racer.lap_time());
  }
}
