/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! The format-agnostic subtitle model.
//!
//! # Overview
//!
//! Readers emit a flat stream of [`RawSubtitle`] values, one per run of text with a single
//! style. The [`collect`](crate::collect::collect) pass folds consecutive runs that share
//! timing, position, and fades into [`Subtitle`] values; within a subtitle the runs live in
//! [`Block`]s, ordered as they arrived.
//!
//! Font sizes and vertical positions each have two representations. Which one a reader
//! produces depends on what its format can express, so both are kept as tagged variants and
//! only resolved against a concrete screen once one is known.


use std::cmp::Ordering;

use crate::time::Time;

/// A colour, with each channel in the range 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub fn white() -> Rgb {
        Rgb {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }

    /// Parses a `rrggbb` hex triplet.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        if hex.len() != 6 {
            return None;
        }

        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb {
            red: red as f64 / 255.0,
            green: green as f64 / 255.0,
            blue: blue as f64 / 255.0,
        })
    }
}

/// A font size, as either an absolute point size or a fraction of the screen height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Points(i64),
    Proportional(f64),
}

impl FontSize {
    pub fn points(&self, screen_height_in_points: i64) -> i64 {
        match *self {
            FontSize::Points(points) => points,
            FontSize::Proportional(proportion) => {
                (proportion * screen_height_in_points as f64).round() as i64
            }
        }
    }

    pub fn proportional(&self, screen_height_in_points: i64) -> f64 {
        match *self {
            FontSize::Points(points) => points as f64 / screen_height_in_points as f64,
            FontSize::Proportional(proportion) => proportion,
        }
    }
}

/// The screen edge a proportional vertical position is measured from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VerticalReference {
    /// Distance is from the top of the screen, positive moves down.
    TopOfScreen,
    /// Distance is from the centre of the screen, positive moves down.
    CentreOfScreen,
    /// Distance is from the bottom of the screen, positive moves up.
    BottomOfScreen,
}

/// A vertical position, as either a line number out of a nominal line count or a proportional
/// offset from a reference edge.
#[derive(Clone, Copy, Debug)]
pub enum VerticalPosition {
    Lines { line: u32, lines: u32 },
    Proportional {
        proportion: f64,
        reference: VerticalReference,
    },
}

impl PartialEq for VerticalPosition {
    /// Two line-based positions compare by line number alone; two proportional positions
    /// compare by offset and reference; a line-based and a proportional position are never
    /// equal.
    fn eq(&self, other: &VerticalPosition) -> bool {
        match (self, other) {
            (
                VerticalPosition::Lines { line: a, .. },
                VerticalPosition::Lines { line: b, .. },
            ) => a == b,
            (
                VerticalPosition::Proportional {
                    proportion: a,
                    reference: ra,
                },
                VerticalPosition::Proportional {
                    proportion: b,
                    reference: rb,
                },
            ) => a == b && ra == rb,
            _ => false,
        }
    }
}

/// One run of text with a single style, as emitted by a reader.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSubtitle {
    pub text: String,
    pub font: Option<String>,
    pub font_size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub colour: Rgb,
    pub from: Time,
    pub to: Time,
    pub vertical_position: VerticalPosition,
    pub fade_up: Option<Time>,
    pub fade_down: Option<Time>,
}

/// A styled fragment within a [`Block`].
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub text: String,
    pub font: Option<String>,
    pub font_size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub colour: Rgb,
}

impl From<&RawSubtitle> for Run {
    fn from(raw: &RawSubtitle) -> Run {
        Run {
            text: raw.text.clone(),
            font: raw.font.clone(),
            font_size: raw.font_size,
            bold: raw.bold,
            italic: raw.italic,
            underline: raw.underline,
            colour: raw.colour,
        }
    }
}

/// An ordered sequence of differently-styled runs sharing one timing and position.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub runs: Vec<Run>,
}

/// The grouped unit: one or more blocks sharing timing, position, and fades.
#[derive(Clone, Debug, PartialEq)]
pub struct Subtitle {
    pub from: Time,
    pub to: Time,
    pub vertical_position: VerticalPosition,
    pub fade_up: Option<Time>,
    pub fade_down: Option<Time>,
    pub blocks: Vec<Block>,
}

impl Subtitle {
    /// Opens a new subtitle seeded from a raw run.
    pub fn from_raw(raw: &RawSubtitle) -> Subtitle {
        Subtitle {
            from: raw.from,
            to: raw.to,
            vertical_position: raw.vertical_position,
            fade_up: raw.fade_up,
            fade_down: raw.fade_down,
            blocks: vec![Block {
                runs: vec![Run::from(raw)],
            }],
        }
    }

    /// Whether a raw run may be folded into this subtitle.
    pub fn same_metadata(&self, raw: &RawSubtitle) -> bool {
        self.vertical_position == raw.vertical_position
            && self.from == raw.from
            && self.to == raw.to
            && self.fade_up == raw.fade_up
            && self.fade_down == raw.fade_down
    }

    /// Orders two subtitles by their `from` times.
    ///
    /// `None` when the times carry no common representation; callers sorting a mixed list
    /// must convert the times first.
    pub fn compare_from(&self, other: &Subtitle) -> Option<Ordering> {
        self.from.partial_cmp(&other.from)
    }
}
