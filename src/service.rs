// Copyright 2020 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <jonas@bmc-labs.com>

use super::{ensure, fubar::Fubar, Result};
use std::{fs, io, path::Path};
use tracing::debug;


/// Reads the whole file at `path` into a `String`. The file handle only lives
/// for the duration of this call.
///
/// A path which does not resolve to a regular file yields
/// `Fubar::MissingFile`, every other read failure ends up as `Fubar::Io`.
pub fn read_input(path: &Path) -> Result<String> {
  let missing = |reason: String| Fubar::MissingFile { path: path.to_owned(),
                                                      reason };

  ensure!(path.exists() && path.is_file(),
          missing("path does not exist or is not a file".to_string()));

  let text = fs::read_to_string(path).map_err(|err| match err.kind() {
                                       io::ErrorKind::NotFound => {
                                         missing(err.to_string())
                                       }
                                       _ => Fubar::from(err),
                                     })?;

  debug!(path = %path.display(), bytes = text.len(), "read input file");
  Ok(text)
}

/// Splits `text` into trimmed, non-blank lines, each paired with its 1-based
/// line number in `text` (blank lines still count).
pub fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
  text.lines()
      .enumerate()
      .map(|(idx, line)| (idx + 1, line.trim()))
      .filter(|(_, line)| !line.is_empty())
}
