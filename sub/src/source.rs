/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Line sources feeding the text readers.
//!
//! Readers pull one line at a time through [`LineSource`], so a parse holds at most one line
//! of input in memory regardless of file size. End of input is signalled by `None`.


use std::io::BufRead;
use std::str::Lines;

use tracing::warn;

/// Produces the next line of input, or `None` at end of input.
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
}

/// A line source over an in-memory string.
pub struct StringLineSource<'a> {
    lines: Lines<'a>,
}

impl<'a> StringLineSource<'a> {
    pub fn new(text: &'a str) -> StringLineSource<'a> {
        StringLineSource {
            lines: text.lines(),
        }
    }
}

impl LineSource for StringLineSource<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(str::to_owned)
    }
}

/// A line source over any buffered reader, typically an open file.
pub struct ReadLineSource<R: BufRead> {
    input: R,
}

impl<R: BufRead> ReadLineSource<R> {
    pub fn new(input: R) -> ReadLineSource<R> {
        ReadLineSource { input }
    }
}

impl<R: BufRead> LineSource for ReadLineSource<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
            Err(error) => {
                warn!(%error, "read error treated as end of input");
                None
            }
        }
    }
}

/// Strips a Unicode byte order mark from the start of a line.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Whether a line is empty or contains only white space.
pub fn empty_or_white_space(line: &str) -> bool {
    line.trim().is_empty()
}
