/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Reader for fixed-field binary subtitle files.
//!
//! # Overview
//!
//! A file is one 1024-byte General Subtitle Information (GSI) block followed by any number of
//! 128-byte Text and Timing Information (TTI) blocks. The GSI block carries administrative
//! fields as fixed-width character codes, decoded through the [tables](crate::stltables); its
//! disk format code also fixes the frame rate for every timecode in the file.
//!
//! Each TTI block carries one subtitle's timing, vertical position, and justification, plus
//! 112 bytes of text. The text mixes Latin characters with teletext control codes: italic and
//! underline toggles, colour selections, and a line-break code. Unused space is padded with
//! 0x8F.

#[cfg(test)]
mod tests;

use std::io::{Error as IoError, ErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error as ThisError;
use tracing::debug;

use crate::stltables::{
    tables, Comment, DisplayStandard, Language, LanguageGroup, TimecodeStatus, UnknownCodeError,
};
use crate::subtitle::{FontSize, RawSubtitle, Rgb, VerticalPosition};
use crate::time::{Rational, Time};
use crate::Reader;

pub type StlBinaryResult<T> = Result<T, StlBinaryError>;

#[derive(ThisError, Debug)]
pub enum StlBinaryError {
    #[error("IO error reading subtitle data")]
    Io {
        #[from]
        source: IoError,
    },
    #[error("malformed {field} field {value:?}: expected {expected}")]
    Format {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("unrecognized code in subtitle data")]
    UnknownCode {
        #[from]
        source: UnknownCodeError,
    },
}

/// The decoded GSI block.
#[derive(Clone, Debug)]
pub struct GsiBlock {
    pub code_page_number: String,
    pub disk_format_code: String,
    pub frame_rate: Rational,
    pub display_standard: DisplayStandard,
    pub language_group: LanguageGroup,
    pub language: Language,
    pub original_programme_title: String,
    pub original_episode_title: String,
    pub translator_name: String,
    pub timecode_status: TimecodeStatus,
    pub start_of_programme: Time,
    pub maximum_rows: u32,
}

pub struct StlBinaryReader {
    header: GsiBlock,
    subs: Vec<RawSubtitle>,
}

impl StlBinaryReader {
    pub fn new<R: Read>(mut input: R) -> StlBinaryResult<StlBinaryReader> {
        let mut gsi = [0u8; 1024];
        input.read_exact(&mut gsi)?;
        let header = parse_gsi(&gsi)?;

        let mut subs = Vec::new();
        let mut tti = [0u8; 128];
        loop {
            match input.read_exact(&mut tti) {
                Ok(()) => {}
                Err(error) if error.kind() == ErrorKind::UnexpectedEof => break,
                Err(error) => return Err(error.into()),
            }
            parse_tti(&tti, &header, &mut subs)?;
        }

        Ok(StlBinaryReader { header, subs })
    }

    /// The administrative header fields.
    pub fn header(&self) -> &GsiBlock {
        &self.header
    }
}

impl Reader for StlBinaryReader {
    fn raw_subtitles(&self) -> &[RawSubtitle] {
        &self.subs
    }
}

fn parse_gsi(block: &[u8; 1024]) -> StlBinaryResult<GsiBlock> {
    let tables = tables();

    let disk_format_code = field_string(block, 3, 11);
    let frame_rate = match disk_format_code.as_str() {
        "STL25.01" => Rational::new(25, 1),
        "STL30.01" => Rational::new(30, 1),
        _ => {
            return Err(StlBinaryError::Format {
                field: "disk format code",
                value: disk_format_code,
                expected: "STL25.01 or STL30.01",
            })
        }
    };

    let maximum_rows = {
        let text = field_string(block, 253, 255);
        if text.is_empty() {
            // open-subtitling files commonly leave the row count blank
            23
        } else {
            text.parse().map_err(|_| StlBinaryError::Format {
                field: "maximum number of rows",
                value: text,
                expected: "a number",
            })?
        }
    };

    Ok(GsiBlock {
        code_page_number: field_string(block, 0, 3),
        disk_format_code,
        frame_rate,
        display_standard: tables
            .display_standard_from_file(&(block[11] as char).to_string())?,
        language_group: tables.language_group_from_file(&field_string(block, 12, 14))?,
        language: tables.language_from_file(&field_string(block, 14, 16))?,
        original_programme_title: field_string(block, 16, 48),
        original_episode_title: field_string(block, 48, 80),
        translator_name: field_string(block, 144, 176),
        timecode_status: tables
            .timecode_status_from_file(&(block[255] as char).to_string())?,
        start_of_programme: parse_start_of_programme(block, frame_rate)?,
        maximum_rows,
    })
}

fn field_string(block: &[u8], start: usize, end: usize) -> String {
    block[start..end]
        .iter()
        .map(|b| *b as char)
        .collect::<String>()
        .trim_end()
        .to_owned()
}

fn parse_start_of_programme(block: &[u8], rate: Rational) -> StlBinaryResult<Time> {
    let text = field_string(block, 256, 264);
    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 8 {
        return Err(StlBinaryError::Format {
            field: "start of programme",
            value: text,
            expected: "a timecode in the form HHMMSSFF",
        });
    }

    let pair = |i: usize| digits[i] * 10 + digits[i + 1];
    timecode(
        "start of programme",
        pair(0) as u8,
        pair(2) as u8,
        pair(4) as u8,
        pair(6) as u8,
        rate,
    )
}

fn timecode(
    field: &'static str,
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
    rate: Rational,
) -> StlBinaryResult<Time> {
    if minutes >= 60 || seconds >= 60 {
        return Err(StlBinaryError::Format {
            field,
            value: format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames),
            expected: "a timecode with minutes and seconds below 60",
        });
    }

    Ok(Time::from_hmsf(
        hours as i64,
        minutes as u32,
        seconds as u32,
        frames as i64,
        Some(rate),
    ))
}

fn parse_tti(
    tti: &[u8; 128],
    header: &GsiBlock,
    subs: &mut Vec<RawSubtitle>,
) -> StlBinaryResult<()> {
    let tables = tables();

    let _subtitle_group_number = tti[0];
    let subtitle_number = (&tti[1..3]).read_u16::<LittleEndian>()?;
    let extension_block_number = tti[3];

    if (0xF0..=0xFE).contains(&extension_block_number) {
        debug!(subtitle_number, "skipping reserved or user data block");
        return Ok(());
    }

    let _cumulative_status = tables.cumulative_status_from_file(tti[4] as i32)?;
    let from = timecode("timecode in", tti[5], tti[6], tti[7], tti[8], header.frame_rate)?;
    let to = timecode("timecode out", tti[9], tti[10], tti[11], tti[12], header.frame_rate)?;
    let row = tti[13] as u32;
    let _justification = tables.justification_from_file(tti[14] as i32)?;
    let comment = tables.comment_from_file(tti[15] as i32)?;

    if comment == Comment::Yes {
        debug!(subtitle_number, "skipping comment block");
        return Ok(());
    }

    parse_text(&tti[16..], row, from, to, header.maximum_rows, subs);
    Ok(())
}

fn parse_text(
    text: &[u8],
    row: u32,
    from: Time,
    to: Time,
    rows: u32,
    subs: &mut Vec<RawSubtitle>,
) {
    let mut line = 0;
    let mut current = RawSubtitle {
        text: String::new(),
        font: None,
        font_size: FontSize::Proportional(1.0 / rows as f64),
        bold: false,
        italic: false,
        underline: false,
        colour: Rgb::white(),
        from,
        to,
        vertical_position: VerticalPosition::Lines { line: row, lines: rows },
        fade_up: None,
        fade_down: None,
    };

    for &b in text {
        match b {
            // unused space; nothing follows it
            0x8F => break,
            0x8A => {
                maybe_content(&mut current, subs);
                line += 1;
                current.vertical_position = VerticalPosition::Lines {
                    line: row + line,
                    lines: rows,
                };
            }
            0x80 => {
                maybe_content(&mut current, subs);
                current.italic = true;
            }
            0x81 => {
                maybe_content(&mut current, subs);
                current.italic = false;
            }
            0x82 => {
                maybe_content(&mut current, subs);
                current.underline = true;
            }
            0x83 => {
                maybe_content(&mut current, subs);
                current.underline = false;
            }
            0x00..=0x07 => {
                maybe_content(&mut current, subs);
                current.colour = teletext_colour(b);
            }
            0x20..=0x7E | 0xA0..=0xFF => {
                current.text.push(b as char);
            }
            _ => {
                debug!(code = b, "ignoring control code");
            }
        }
    }

    maybe_content(&mut current, subs);
}

fn teletext_colour(code: u8) -> Rgb {
    let channel = |on: bool| if on { 1.0 } else { 0.0 };

    Rgb {
        red: channel(code & 0x01 != 0),
        green: channel(code & 0x02 != 0),
        blue: channel(code & 0x04 != 0),
    }
}

fn maybe_content(current: &mut RawSubtitle, subs: &mut Vec<RawSubtitle>) {
    if !current.text.is_empty() {
        subs.push(current.clone());
        current.text.clear();
    }
}
