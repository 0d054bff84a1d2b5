/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Inline markup tag parser.
//!
//! Walks one line of tagged text and splits it into style-consistent runs. Tags may use
//! either `<...>` or `{...}` delimiters. `b`, `i`, and `u` (and their closing forms) toggle
//! bare style flags; `font` tags carrying a `color="#rrggbb"` attribute push a colour stack
//! that `/font` pops. Unrecognized tags are ignored without error.
//!
//! Bold, italic, and underline are flags rather than stacks, so nested tags of the same kind
//! lose the outer state on the first close. This matches how the text formats that use this
//! markup behave in the wild.


use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::subtitle::{RawSubtitle, Rgb};

static COLOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"color="#([0-9a-fA-F]{6})""##).unwrap());

enum State {
    Text,
    Tag,
}

/// Splits `line` into style runs, copying timing, position, font, and size from `template`.
pub fn parse_line(line: &str, template: &RawSubtitle) -> Vec<RawSubtitle> {
    let mut out = Vec::new();
    let mut current = template.clone();
    current.text.clear();
    let mut colours = vec![template.colour];
    let mut tag = String::new();
    let mut state = State::Text;

    for c in line.chars() {
        match state {
            State::Text => {
                if c == '<' || c == '{' {
                    state = State::Tag;
                } else {
                    current.text.push(c);
                }
            }
            State::Tag => {
                if c == '>' || c == '}' {
                    apply_tag(&tag, &mut current, &mut colours, &mut out);
                    tag.clear();
                    state = State::Text;
                } else {
                    tag.push(c);
                }
            }
        }
    }

    maybe_content(&mut current, &mut out);
    out
}

fn apply_tag(
    tag: &str,
    current: &mut RawSubtitle,
    colours: &mut Vec<Rgb>,
    out: &mut Vec<RawSubtitle>,
) {
    match tag {
        "b" => {
            maybe_content(current, out);
            current.bold = true;
        }
        "/b" => {
            maybe_content(current, out);
            current.bold = false;
        }
        "i" => {
            maybe_content(current, out);
            current.italic = true;
        }
        "/i" => {
            maybe_content(current, out);
            current.italic = false;
        }
        "u" => {
            maybe_content(current, out);
            current.underline = true;
        }
        "/u" => {
            maybe_content(current, out);
            current.underline = false;
        }
        "/font" => {
            maybe_content(current, out);
            if colours.len() > 1 {
                colours.pop();
            } else {
                warn!("unbalanced /font tag");
            }
            if let Some(colour) = colours.last() {
                current.colour = *colour;
            }
        }
        _ if tag.starts_with("font") => {
            maybe_content(current, out);
            if let Some(hex) = COLOUR.captures(tag).and_then(|m| m.get(1)) {
                if let Some(colour) = Rgb::from_hex(hex.as_str()) {
                    colours.push(colour);
                    current.colour = colour;
                }
            }
        }
        _ => {
            debug!(tag, "ignoring unrecognized tag");
        }
    }
}

fn maybe_content(current: &mut RawSubtitle, out: &mut Vec<RawSubtitle>) {
    if !current.text.is_empty() {
        out.push(current.clone());
        current.text.clear();
    }
}
