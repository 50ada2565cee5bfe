// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <jonas@bmc-labs.com>
//   Jannik Schütz <jannik@bmc-labs.com>

use serde::Deserialize;
use std::{error, fmt, io, path::PathBuf, result};


/// The crate's result type `Result` always carries a `Fubar` on the error
/// side, so callers can match on the kind of failure instead of inspecting
/// strings.
pub type Result<T> = result::Result<T, Fubar>;


#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Everything that can go wrong while building a report.
///
/// All variants except `UnknownRacer` are fatal for report generation: the
/// pipeline stops on the first one and no partial report is produced.
/// `UnknownRacer` is only ever returned by the single-racer lookup.
///
/// Line numbers are 1-based positions in the respective input file.
///
/// FUBAR: Fucked Up Beyond All {Recognition, Repair, Reason}
pub enum Fubar {
  /// One of the input files does not exist or is not a regular file.
  MissingFile { path: PathBuf, reason: String },
  /// A roster line did not split into exactly `CODE_Name_Team`.
  MalformedRoster { line: usize, content: String },
  /// A timing log references a code the roster doesn't know.
  UnknownCode { line: usize, code: String },
  /// A timing log value is not a `YYYY-MM-DD_HH:MM:SS.ffffff` timestamp.
  MalformedTimestamp {
    line:   usize,
    value:  String,
    reason: String,
  },
  /// Lookup by name found nobody.
  UnknownRacer(String),
  /// Any other I/O failure while reading an input file.
  Io(String),
}

impl fmt::Display for Fubar {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::MissingFile { path, reason } => {
        write!(f, "no such file '{}' ({})", path.display(), reason)
      }
      Self::MalformedRoster { line, content } => {
        write!(f,
               "line {}: expected 'CODE_Name_Team', got '{}'",
               line, content)
      }
      Self::UnknownCode { line, code } => {
        write!(f, "line {}: code '{}' not found in roster", line, code)
      }
      Self::MalformedTimestamp { line,
                                 value,
                                 reason, } => {
        write!(f, "line {}: invalid timestamp '{}' ({})", line, value, reason)
      }
      Self::UnknownRacer(name) => write!(f, "no racer named '{}'", name),
      Self::Io(reason) => write!(f, "{}", reason),
    }
  }
}

impl error::Error for Fubar {}


/// This macro - internal use only - generates the implementation of the
/// `From` trait for `Fubar` for a given list of types, all of which end up in
/// the catch-all `Io` variant.
macro_rules! implement_from {
  ($($ErrType:ty),*) => {$(
    impl From<$ErrType> for Fubar {
      fn from(error: $ErrType) -> Self {
        Self::Io(error.to_string())
      }
    }
  )*}
}

implement_from!(io::Error);


/// The `ensure!` macro provides and easy way to make sure a condition is true,
/// and if not, return the given `Fubar` variant. Use it as follows:
///
/// ```ignore
/// fn my_function(line: &str) -> Result<()> {
///   ensure!(!line.is_empty(), Fubar::Io("empty line".to_string()));
///   Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
  ($cond:expr, $err:expr) => {
    if !($cond) {
      return Err($err);
    }
  };
}


#[cfg(test)]
mod test {
  use super::{Fubar, Result};
  use pretty_assertions::assert_eq;
  use std::{io, path::PathBuf};

  #[test]
  fn fubar_display_test() {
    let err = Fubar::MissingFile { path:   PathBuf::from("fake/start.log"),
                                   reason: "not found".to_string(), };
    assert_eq!("no such file 'fake/start.log' (not found)",
               &format!("{}", err));

    let err = Fubar::MalformedRoster { line:    3,
                                       content: "SVF_Vettel".to_string(), };
    assert_eq!("line 3: expected 'CODE_Name_Team', got 'SVF_Vettel'",
               &format!("{}", err));

    let err = Fubar::UnknownCode { line: 1,
                                   code: "XXX".to_string(), };
    assert_eq!("line 1: code 'XXX' not found in roster", &format!("{}", err));

    let err = Fubar::UnknownRacer("warblgarbl".to_string());
    assert_eq!("no racer named 'warblgarbl'", &format!("{}", err));
  }

  #[test]
  fn from_io_test() {
    let err: Fubar = io::Error::new(io::ErrorKind::Other, "warblgarbl").into();
    assert_eq!(Fubar::Io("warblgarbl".to_string()), err);
  }

  #[test]
  fn ensure_test() {
    fn wrapper(cond: bool, msg: &str) -> Result<()> {
      ensure!(cond, Fubar::Io(msg.to_string()));
      Ok(())
    }

    let test_str = "warblgarbl";
    assert_eq!(wrapper(true, test_str), Ok(()));
    assert_eq!(wrapper(false, test_str), Err(Fubar::Io(test_str.to_string())));
  }
}
