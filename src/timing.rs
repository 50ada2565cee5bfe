// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{fubar::Fubar,
            roster::{Code, Roster},
            service,
            Result};
use chrono::NaiveDateTime;
use getset::{CopyGetters, Getters};
use std::{fmt, path::Path};
use tracing::{debug, trace, warn};


/// Timestamp format of start and end logs, e.g. `2018-05-24_12:02:58.917`.
/// `%.f` on its own also accepts a missing fraction, see `check_fraction`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.f";
/// At most microseconds.
const MAX_FRACTION_DIGITS: usize = 6;


/// Which timestamp of a roster entry a timing log fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingField {
  StartTime,
  FinishTime,
}

impl fmt::Display for TimingField {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::StartTime => write!(f, "start_time"),
      Self::FinishTime => write!(f, "finish_time"),
    }
  }
}


/// One line of a timing log: a code immediately followed by a timestamp.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct TimingRecord {
  #[getset(get = "pub")]
  code:      Code,
  #[getset(get_copy = "pub")]
  timestamp: NaiveDateTime,
}

impl TimingRecord {
  /// Parses a line such as `SVF2018-05-24_12:02:58.917`. The caller is
  /// expected to hand in trimmed lines; `line_no` is only used for error
  /// reporting.
  pub fn parse(line_no: usize, line: &str) -> Result<Self> {
    let (code, value) = Code::split_prefix(line).ok_or_else(|| {
                          Fubar::UnknownCode { line: line_no,
                                               code: line.to_string(), }
                        })?;

    let malformed = |reason: String| Fubar::MalformedTimestamp {
                                       line: line_no,
                                       value: value.to_string(),
                                       reason,
                                     };

    check_fraction(value).map_err(|reason| malformed(reason.to_string()))?;
    let timestamp = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
                      .map_err(|err| malformed(err.to_string()))?;

    Ok(Self { code, timestamp })
  }
}


/// Merges the full text of a timing log into `roster`, setting `field` on the
/// entry matching each line's code.
///
/// Every code must already be known to the roster, an unknown one fails the
/// merge with `Fubar::UnknownCode`. Nothing is skipped silently: a bad
/// timestamp fails it with `Fubar::MalformedTimestamp`. If a code shows up
/// more than once the last timestamp wins.
pub fn merge(text: &str,
             roster: &mut Roster,
             field: TimingField)
             -> Result<()> {
  let mut merged = 0;
  for (line_no, line) in service::content_lines(text) {
    let record = TimingRecord::parse(line_no, line)?;
    let entry = roster.get_mut(record.code()).ok_or_else(|| {
                  Fubar::UnknownCode { line: line_no,
                                       code: record.code().to_string(), }
                })?;

    let previous = match field {
      TimingField::StartTime => entry.start_time(),
      TimingField::FinishTime => entry.finish_time(),
    };
    if previous.is_some() {
      warn!(code = %record.code(),
            %field,
            "repeated timing entry, last one wins");
    }

    match field {
      TimingField::StartTime => {
        entry.set_start_time(Some(record.timestamp()))
      }
      TimingField::FinishTime => {
        entry.set_finish_time(Some(record.timestamp()))
      }
    };

    trace!(line = line_no,
           code = %record.code(),
           %field,
           "merged timing line");
    merged += 1;
  }

  debug!(entries = merged, %field, "merged timing log");
  Ok(())
}

/// The seconds of a timestamp must carry a `.` followed by one to six
/// digits.
fn check_fraction(value: &str) -> std::result::Result<(), &'static str> {
  let fraction = match value.rfind('.') {
    Some(dot) => &value[dot + 1..],
    None => return Err("missing fractional seconds"),
  };
  if fraction.is_empty()
     || fraction.len() > MAX_FRACTION_DIGITS
     || !fraction.bytes().all(|byte| byte.is_ascii_digit())
  {
    return Err("fractional seconds must be 1 to 6 digits");
  }
  Ok(())
}

/// Reads the timing log at `path` and merges it into `roster`.
pub fn merge_file(path: &Path,
                  roster: &mut Roster,
                  field: TimingField)
                  -> Result<()> {
  merge(&service::read_input(path)?, roster, field)
}
