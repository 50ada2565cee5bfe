// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use super::{ensure, fubar::Fubar, service, Result};
use chrono::NaiveDateTime;
use getset::{CopyGetters, Getters, Setters};
use std::{collections::HashMap, fmt, path::Path};
use tracing::{debug, trace, warn};


const CODE_LEN: usize = 3;
const FIELD_SEPARATOR: char = '_';


/// Three character racer code, the join key between all input files.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
  /// Returns `None` unless `code` is exactly three characters long.
  pub fn new(code: &str) -> Option<Self> {
    if code.chars().count() == CODE_LEN {
      Some(Self(code.to_string()))
    } else {
      None
    }
  }

  /// Splits the leading code off `line`, returning the code and the rest.
  pub fn split_prefix(line: &str) -> Option<(Self, &str)> {
    let (split_at, _) = line.char_indices().nth(CODE_LEN - 1)?;
    let split_at = split_at + line[split_at..].chars().next()?.len_utf8();
    Some((Self(line[..split_at].to_string()), &line[split_at..]))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Code {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}


/// Identity of one racer as listed in the abbreviations file. Never changes
/// once parsed.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct IdentityRecord {
  code: Code,
  name: String,
  team: String,
}

impl IdentityRecord {
  pub fn new(code: Code, name: String, team: String) -> Self {
    Self { code, name, team }
  }

  /// Parses a single `CODE_Full Name_Team Name` line. `line_no` is only used
  /// for error reporting.
  pub fn parse(line_no: usize, line: &str) -> Result<Self> {
    let malformed = || Fubar::MalformedRoster { line:    line_no,
                                                content: line.to_string(), };

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    ensure!(fields.len() == 3, malformed());
    ensure!(fields.iter().all(|field| !field.is_empty()), malformed());

    let code = Code::new(fields[0]).ok_or_else(malformed)?;
    Ok(Self::new(code, fields[1].to_string(), fields[2].to_string()))
  }
}


/// A roster entry accumulates the start and finish timestamps of a racer on
/// top of its identity while the timing logs are merged in.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters, Setters)]
pub struct RosterEntry {
  #[getset(get = "pub")]
  identity:    IdentityRecord,
  #[getset(get_copy = "pub", set = "pub")]
  start_time:  Option<NaiveDateTime>,
  #[getset(get_copy = "pub", set = "pub")]
  finish_time: Option<NaiveDateTime>,
}

impl RosterEntry {
  pub fn new(identity: IdentityRecord) -> Self {
    Self { identity,
           start_time: None,
           finish_time: None }
  }
}


/// Code keyed mapping of roster entries which keeps the order in which codes
/// first appeared in the abbreviations file. Every code is unique; a repeated
/// code replaces the earlier entry in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
  entries: Vec<RosterEntry>,
  index:   HashMap<Code, usize>,
}

impl Roster {
  /// Parses the full text of an abbreviations file. Blank lines are skipped,
  /// any malformed line fails the whole roster.
  pub fn parse(text: &str) -> Result<Self> {
    let mut roster = Self::default();
    for (line_no, line) in service::content_lines(text) {
      let identity = IdentityRecord::parse(line_no, line)?;
      trace!(line = line_no, code = %identity.code(), "parsed roster line");
      roster.insert(identity);
    }

    debug!(racers = roster.len(), "parsed roster");
    Ok(roster)
  }

  /// Reads and parses the abbreviations file at `path`.
  pub fn load(path: &Path) -> Result<Self> {
    Self::parse(&service::read_input(path)?)
  }

  /// Inserts `identity`, overwriting any previous entry for the same code
  /// while keeping that entry's position.
  pub fn insert(&mut self, identity: IdentityRecord) {
    let entry = RosterEntry::new(identity);
    match self.index.get(entry.identity().code()) {
      Some(&idx) => {
        warn!(code = %entry.identity().code(),
              "duplicate roster code, last occurrence wins");
        self.entries[idx] = entry;
      }
      None => {
        self.index
            .insert(entry.identity().code().clone(), self.entries.len());
        self.entries.push(entry);
      }
    }
  }

  pub fn get(&self, code: &Code) -> Option<&RosterEntry> {
    self.index.get(code).map(|&idx| &self.entries[idx])
  }

  pub fn get_mut(&mut self, code: &Code) -> Option<&mut RosterEntry> {
    match self.index.get(code) {
      Some(&idx) => Some(&mut self.entries[idx]),
      None => None,
    }
  }

  /// Iterates entries in roster order.
  pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl IntoIterator for Roster {
  type IntoIter = std::vec::IntoIter<RosterEntry>;
  type Item = RosterEntry;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}
