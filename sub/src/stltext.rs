/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Reader for line-oriented timed text.
//!
//! The format is a plain text file of `//` comment lines, `$Name = Value` directive lines,
//! and subtitle lines of the form `HH:MM:SS:FF,HH:MM:SS:FF,text`, with `|` separating the
//! vertical lines of one caption. Timecodes count frames, and the file itself never names a
//! frame rate, so every time this reader emits is frame-based with the rate left open.
//!
//! Directives set running state that applies to every following subtitle line. Only the font
//! directives are meaningful to the data model; the rest are ignored.

#[cfg(test)]
mod tests;

use std::io::{BufReader, Read};

use thiserror::Error as ThisError;
use tracing::debug;

use crate::source::{empty_or_white_space, strip_bom, LineSource, ReadLineSource, StringLineSource};
use crate::subtitle::{FontSize, RawSubtitle, Rgb, VerticalPosition};
use crate::time::Time;
use crate::Reader;

pub type StlTextResult<T> = Result<T, StlTextError>;

#[derive(ThisError, Debug)]
pub enum StlTextError {
    #[error("malformed subtitle data {line:?}: expected {expected}")]
    Format { line: String, expected: &'static str },
}

const LINES: u32 = 32;

pub struct StlTextReader {
    subs: Vec<RawSubtitle>,
}

struct Style {
    font: Option<String>,
    size: i64,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl StlTextReader {
    pub fn new<R: Read>(input: R) -> StlTextResult<StlTextReader> {
        Self::read(&mut ReadLineSource::new(BufReader::new(input)))
    }

    pub fn from_string(text: &str) -> StlTextResult<StlTextReader> {
        Self::read(&mut StringLineSource::new(text))
    }

    fn read(source: &mut dyn LineSource) -> StlTextResult<StlTextReader> {
        let mut subs = Vec::new();
        let mut style = Style {
            font: None,
            size: 48,
            bold: false,
            italic: false,
            underline: false,
        };

        while let Some(line) = source.next_line() {
            let line = strip_bom(&line).trim();

            if empty_or_white_space(line) || line.starts_with("//") {
                continue;
            }

            if line.starts_with('$') {
                apply_directive(line, &mut style)?;
                continue;
            }

            convert_line(line, &style, &mut subs)?;
        }

        Ok(StlTextReader { subs })
    }
}

impl Reader for StlTextReader {
    fn raw_subtitles(&self) -> &[RawSubtitle] {
        &self.subs
    }
}

fn apply_directive(line: &str, style: &mut Style) -> StlTextResult<()> {
    let (key, value) = line.split_once('=').ok_or_else(|| StlTextError::Format {
        line: line.to_owned(),
        expected: "a directive in the form $Name = Value",
    })?;
    let key = key.trim().to_ascii_lowercase();
    let value = value.trim();

    match key.as_str() {
        "$fontname" => style.font = Some(value.to_owned()),
        "$fontsize" => {
            style.size = value.parse().map_err(|_| StlTextError::Format {
                line: line.to_owned(),
                expected: "an integer font size",
            })?;
        }
        "$bold" => style.bold = parse_flag(line, value)?,
        "$italic" => style.italic = parse_flag(line, value)?,
        "$underlined" => style.underline = parse_flag(line, value)?,
        _ => {
            debug!(directive = %key, "ignoring unrecognized directive");
        }
    }

    Ok(())
}

fn parse_flag(line: &str, value: &str) -> StlTextResult<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(StlTextError::Format {
            line: line.to_owned(),
            expected: "TRUE or FALSE",
        })
    }
}

fn convert_line(line: &str, style: &Style, subs: &mut Vec<RawSubtitle>) -> StlTextResult<()> {
    const EXPECTED: &str = "a line in the form HH:MM:SS:FF,HH:MM:SS:FF,text";

    let parts: Vec<&str> = line.splitn(3, ',').collect();
    if parts.len() != 3 {
        return Err(StlTextError::Format {
            line: line.to_owned(),
            expected: EXPECTED,
        });
    }

    let from = convert_time(parts[0])?;
    let to = convert_time(parts[1])?;

    for (line_number, text) in parts[2].split('|').enumerate() {
        if text.is_empty() {
            continue;
        }

        subs.push(RawSubtitle {
            text: text.to_owned(),
            font: style.font.clone(),
            font_size: FontSize::Points(style.size),
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            colour: Rgb::white(),
            from,
            to,
            vertical_position: VerticalPosition::Lines {
                line: line_number as u32,
                lines: LINES,
            },
            fade_up: None,
            fade_down: None,
        });
    }

    Ok(())
}

fn convert_time(text: &str) -> StlTextResult<Time> {
    const EXPECTED: &str = "a timecode in the format HH:MM:SS:FF";

    let text = text.trim();
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 4 {
        return Err(StlTextError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    let hours = parse_field(parts[0], EXPECTED)?;
    let minutes: u32 = parse_field(parts[1], EXPECTED)?;
    let seconds: u32 = parse_field(parts[2], EXPECTED)?;
    let frames: i64 = parse_field(parts[3], EXPECTED)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(StlTextError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    // the file names no frame rate; the caller supplies one when converting
    Ok(Time::from_hmsf(hours, minutes, seconds, frames, None))
}

fn parse_field<T: std::str::FromStr>(text: &str, expected: &'static str) -> StlTextResult<T> {
    text.trim().parse().map_err(|_| StlTextError::Format {
        line: text.to_owned(),
        expected,
    })
}
