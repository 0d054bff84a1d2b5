/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Reader for SubRip timed text.
//!
//! A SubRip file is a sequence of captions, each one a counter line, a metadata line with the
//! display interval (`00:00:01,000 --> 00:00:02,000`, optionally followed by coordinate
//! fields), and one or more lines of tagged text, closed off by a blank line. Text lines go
//! through the inline [markup](crate::markup) parser, one template per line with the line
//! counter as its vertical position.


use std::io::{BufReader, Read};

use thiserror::Error as ThisError;

use crate::markup;
use crate::source::{strip_bom, LineSource, ReadLineSource, StringLineSource};
use crate::subtitle::{FontSize, RawSubtitle, Rgb, VerticalPosition};
use crate::time::Time;
use crate::Reader;

pub type SubripResult<T> = Result<T, SubripError>;

#[derive(ThisError, Debug)]
pub enum SubripError {
    #[error("malformed subtitle data {line:?}: expected {expected}")]
    Format { line: String, expected: &'static str },
}

/// Nominal line count a caption is positioned against.
const LINES: u32 = 32;

pub struct SubripReader {
    subs: Vec<RawSubtitle>,
}

enum State {
    Counter,
    Metadata,
    Content { from: Time, to: Time, line: u32 },
}

impl SubripReader {
    pub fn new<R: Read>(input: R) -> SubripResult<SubripReader> {
        Self::read(&mut ReadLineSource::new(BufReader::new(input)))
    }

    pub fn from_string(text: &str) -> SubripResult<SubripReader> {
        Self::read(&mut StringLineSource::new(text))
    }

    fn read(source: &mut dyn LineSource) -> SubripResult<SubripReader> {
        let mut subs = Vec::new();
        let mut state = State::Counter;

        while let Some(line) = source.next_line() {
            let line = strip_bom(&line);

            state = match state {
                State::Counter => {
                    if line.is_empty() {
                        // blank lines before the counter are fine
                        State::Counter
                    } else {
                        State::Metadata
                    }
                }
                State::Metadata => {
                    let parts: Vec<&str> = line.split(' ').collect();
                    if parts.len() != 3 && parts.len() != 7 {
                        return Err(SubripError::Format {
                            line: line.to_owned(),
                            expected: "a time/position line",
                        });
                    }

                    // trailing coordinate fields are parsed past but not yet acted upon
                    State::Content {
                        from: convert_time(parts[0])?,
                        to: convert_time(parts[2])?,
                        line: 0,
                    }
                }
                State::Content { from, to, line: line_number } => {
                    if line.is_empty() {
                        State::Counter
                    } else {
                        let template = RawSubtitle {
                            text: String::new(),
                            font: Some("Arial".to_owned()),
                            font_size: FontSize::Points(48),
                            bold: false,
                            italic: false,
                            underline: false,
                            colour: Rgb::white(),
                            from,
                            to,
                            vertical_position: VerticalPosition::Lines {
                                line: line_number,
                                lines: LINES,
                            },
                            fade_up: None,
                            fade_down: None,
                        };
                        subs.extend(markup::parse_line(line, &template));
                        State::Content {
                            from,
                            to,
                            line: line_number + 1,
                        }
                    }
                }
            };
        }

        Ok(SubripReader { subs })
    }
}

impl Reader for SubripReader {
    fn raw_subtitles(&self) -> &[RawSubtitle] {
        &self.subs
    }
}

fn convert_time(text: &str) -> SubripResult<Time> {
    const EXPECTED: &str = "a time in the format h:m:s,ms";

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(SubripError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    let (seconds, milliseconds) = parts[2].split_once(',').ok_or_else(|| SubripError::Format {
        line: text.to_owned(),
        expected: EXPECTED,
    })?;

    let hours = parse_field(parts[0], EXPECTED)?;
    let minutes: u32 = parse_field(parts[1], EXPECTED)?;
    let seconds: u32 = parse_field(seconds, EXPECTED)?;
    let milliseconds: u32 = parse_field(milliseconds, EXPECTED)?;

    if minutes >= 60 || seconds >= 60 || milliseconds >= 1000 {
        return Err(SubripError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    Ok(Time::from_hms(hours, minutes, seconds, milliseconds))
}

fn parse_field<T: std::str::FromStr>(text: &str, expected: &'static str) -> SubripResult<T> {
    text.trim().parse().map_err(|_| SubripError::Format {
        line: text.to_owned(),
        expected,
    })
}
