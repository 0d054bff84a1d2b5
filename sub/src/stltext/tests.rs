/*
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use crate::subtitle::VerticalPosition;
use crate::time::{Rational, UnknownFrameRateError};

#[test]
fn test_subtitle_line() {
    let reader = StlTextReader::from_string("00:00:01:02,00:00:02:05,Hello world\n").unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].text, "Hello world");

    // times are frame-based and carry no rate of their own
    assert_eq!(raw[0].from.frame(), Some(2));
    assert_eq!(raw[0].from.metric(), None);
    assert_eq!(raw[0].from.seconds(), 1);
    assert_eq!(raw[0].to.frame(), Some(5));
    assert_eq!(raw[0].from.all_as_seconds(), Err(UnknownFrameRateError));
    assert_eq!(raw[0].from.frames_at(Rational::new(25, 1)), 2);
}

#[test]
fn test_vertical_line_separator() {
    let reader =
        StlTextReader::from_string("00:00:01:00,00:00:02:00,upper|lower\n").unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].text, "upper");
    assert_eq!(raw[0].vertical_position, VerticalPosition::Lines { line: 0, lines: 32 });
    assert_eq!(raw[1].text, "lower");
    assert_eq!(raw[1].vertical_position, VerticalPosition::Lines { line: 1, lines: 32 });
}

#[test]
fn test_directives_set_running_state() {
    let reader = StlTextReader::from_string(
        "$FontName = Helvetica\n\
         $FontSize = 42\n\
         $Bold = TRUE\n\
         00:00:01:00,00:00:02:00,first\n\
         $Bold = FALSE\n\
         00:00:03:00,00:00:04:00,second\n",
    )
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].font.as_deref(), Some("Helvetica"));
    assert_eq!(raw[0].font_size.points(960), 42);
    assert!(raw[0].bold);
    assert!(!raw[1].bold);
}

#[test]
fn test_unknown_directive_is_ignored() {
    let reader = StlTextReader::from_string(
        "$TapeOffset = FALSE\n00:00:01:00,00:00:02:00,text\n",
    )
    .unwrap();
    assert_eq!(reader.raw_subtitles().len(), 1);
}

#[test]
fn test_comments_and_blank_lines() {
    let reader = StlTextReader::from_string(
        "// a comment\n\n00:00:01:00,00:00:02:00,text\n",
    )
    .unwrap();
    assert_eq!(reader.raw_subtitles().len(), 1);
}

#[test]
fn test_malformed_subtitle_line() {
    match StlTextReader::from_string("00:00:01:00,text\n") {
        Err(StlTextError::Format { line, expected }) => {
            assert_eq!(line, "00:00:01:00,text");
            assert_eq!(expected, "a line in the form HH:MM:SS:FF,HH:MM:SS:FF,text");
        }
        other => panic!("expected a format error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_timecode() {
    assert!(StlTextReader::from_string("00:00:01,00:00:02:00,text\n").is_err());
    assert!(StlTextReader::from_string("00:61:01:00,00:00:02:00,text\n").is_err());
}

#[test]
fn test_malformed_directive_flag() {
    assert!(StlTextReader::from_string("$Bold = maybe\n").is_err());
}
