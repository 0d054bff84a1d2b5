/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Reader for SubStation Alpha scripts.
//!
//! Only the `[Events]` section is consumed. The `Format:` line fixes the field order for the
//! `Dialogue:` lines that follow; each dialogue's text is split on `\N` line breaks and
//! `{\b1}`-style override blocks into style runs. Unknown override codes are ignored, the
//! same leniency the inline markup parser applies to unknown tags.

#[cfg(test)]
mod tests;

use std::io::{BufReader, Read};

use thiserror::Error as ThisError;
use tracing::debug;

use crate::source::{empty_or_white_space, strip_bom, LineSource, ReadLineSource, StringLineSource};
use crate::subtitle::{FontSize, RawSubtitle, Rgb, VerticalPosition};
use crate::time::Time;
use crate::Reader;

pub type SsaResult<T> = Result<T, SsaError>;

#[derive(ThisError, Debug)]
pub enum SsaError {
    #[error("malformed subtitle data {line:?}: expected {expected}")]
    Format { line: String, expected: &'static str },
}

const LINES: u32 = 32;

pub struct SsaReader {
    subs: Vec<RawSubtitle>,
}

impl SsaReader {
    pub fn new<R: Read>(input: R) -> SsaResult<SsaReader> {
        Self::read(&mut ReadLineSource::new(BufReader::new(input)))
    }

    pub fn from_string(text: &str) -> SsaResult<SsaReader> {
        Self::read(&mut StringLineSource::new(text))
    }

    fn read(source: &mut dyn LineSource) -> SsaResult<SsaReader> {
        let mut subs = Vec::new();
        let mut in_events = false;
        let mut format: Option<Vec<String>> = None;

        while let Some(line) = source.next_line() {
            let line = strip_bom(&line).trim();

            if empty_or_white_space(line) || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                in_events = line.eq_ignore_ascii_case("[events]");
                continue;
            }

            if !in_events {
                continue;
            }

            if let Some(rest) = line.strip_prefix("Format:") {
                format = Some(
                    rest.split(',')
                        .map(|field| field.trim().to_ascii_lowercase())
                        .collect(),
                );
            } else if let Some(rest) = line.strip_prefix("Dialogue:") {
                let format = format.as_ref().ok_or_else(|| SsaError::Format {
                    line: line.to_owned(),
                    expected: "a Format line before the first Dialogue",
                })?;

                let fields: Vec<&str> = rest.splitn(format.len(), ',').collect();
                if fields.len() != format.len() {
                    return Err(SsaError::Format {
                        line: line.to_owned(),
                        expected: "a Dialogue line matching the Format declaration",
                    });
                }

                let mut start = None;
                let mut end = None;
                let mut text = None;
                for (name, value) in format.iter().zip(&fields) {
                    match name.as_str() {
                        "start" => start = Some(convert_time(value.trim())?),
                        "end" => end = Some(convert_time(value.trim())?),
                        "text" => text = Some(*value),
                        _ => {}
                    }
                }

                match (start, end, text) {
                    (Some(from), Some(to), Some(text)) => {
                        convert_dialogue(text.trim(), from, to, &mut subs);
                    }
                    _ => {
                        return Err(SsaError::Format {
                            line: line.to_owned(),
                            expected: "Start, End and Text fields in the Format declaration",
                        })
                    }
                }
            }
        }

        Ok(SsaReader { subs })
    }
}

impl Reader for SsaReader {
    fn raw_subtitles(&self) -> &[RawSubtitle] {
        &self.subs
    }
}

fn convert_time(text: &str) -> SsaResult<Time> {
    const EXPECTED: &str = "a time in the format h:mm:ss.cc";

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(SsaError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    let (seconds, centiseconds) = parts[2].split_once('.').ok_or_else(|| SsaError::Format {
        line: text.to_owned(),
        expected: EXPECTED,
    })?;

    let hours = parse_field(parts[0], EXPECTED)?;
    let minutes: u32 = parse_field(parts[1], EXPECTED)?;
    let seconds: u32 = parse_field(seconds, EXPECTED)?;
    let centiseconds: u32 = parse_field(centiseconds, EXPECTED)?;

    if minutes >= 60 || seconds >= 60 || centiseconds >= 100 {
        return Err(SsaError::Format {
            line: text.to_owned(),
            expected: EXPECTED,
        });
    }

    Ok(Time::from_hms(hours, minutes, seconds, centiseconds * 10))
}

fn parse_field<T: std::str::FromStr>(text: &str, expected: &'static str) -> SsaResult<T> {
    text.trim().parse().map_err(|_| SsaError::Format {
        line: text.to_owned(),
        expected,
    })
}

fn convert_dialogue(text: &str, from: Time, to: Time, subs: &mut Vec<RawSubtitle>) {
    let mut line_number = 0;
    let mut current = RawSubtitle {
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

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' {
            let mut block = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                block.push(c);
            }
            for code in block.split('\\').filter(|code| !code.is_empty()) {
                apply_override(code, &mut current, subs);
            }
        } else if c == '\\' && matches!(chars.peek(), Some('N') | Some('n')) {
            chars.next();
            maybe_content(&mut current, subs);
            line_number += 1;
            current.vertical_position = VerticalPosition::Lines {
                line: line_number,
                lines: LINES,
            };
        } else {
            current.text.push(c);
        }
    }

    maybe_content(&mut current, subs);
}

fn apply_override(code: &str, current: &mut RawSubtitle, subs: &mut Vec<RawSubtitle>) {
    match code {
        "b1" => {
            maybe_content(current, subs);
            current.bold = true;
        }
        "b0" => {
            maybe_content(current, subs);
            current.bold = false;
        }
        "i1" => {
            maybe_content(current, subs);
            current.italic = true;
        }
        "i0" => {
            maybe_content(current, subs);
            current.italic = false;
        }
        "u1" => {
            maybe_content(current, subs);
            current.underline = true;
        }
        "u0" => {
            maybe_content(current, subs);
            current.underline = false;
        }
        _ => {
            debug!(code, "ignoring unrecognized style override");
        }
    }
}

fn maybe_content(current: &mut RawSubtitle, subs: &mut Vec<RawSubtitle>) {
    if !current.text.is_empty() {
        subs.push(current.clone());
        current.text.clear();
    }
}
