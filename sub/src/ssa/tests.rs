/*
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use crate::subtitle::VerticalPosition;
use crate::time::Time;

const HEADER: &str = "[Script Info]\nTitle: test\n\n[Events]\n\
    Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n";

#[test]
fn test_dialogue() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.50,Default,,0,0,0,,Hello world\n"
    ))
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].text, "Hello world");
    assert_eq!(raw[0].from, Time::from_hms(0, 0, 1, 0));
    assert_eq!(raw[0].to, Time::from_hms(0, 0, 2, 500));
}

#[test]
fn test_style_overrides() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,plain {{\\b1}}bold{{\\b0}} plain\n"
    ))
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 3);
    assert!(!raw[0].bold);
    assert!(raw[1].bold);
    assert_eq!(raw[1].text, "bold");
    assert!(!raw[2].bold);
}

#[test]
fn test_combined_overrides() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{{\\i1\\u1}}both\n"
    ))
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert!(raw[0].italic);
    assert!(raw[0].underline);
}

#[test]
fn test_unknown_override_is_ignored() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{{\\pos(10,20)}}text\n"
    ))
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].text, "text");
}

#[test]
fn test_line_break_moves_down() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,upper\\Nlower\n"
    ))
    .unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].vertical_position, VerticalPosition::Lines { line: 0, lines: 32 });
    assert_eq!(raw[1].vertical_position, VerticalPosition::Lines { line: 1, lines: 32 });
}

#[test]
fn test_text_may_contain_commas() {
    let reader = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,one, two, three\n"
    ))
    .unwrap();

    assert_eq!(reader.raw_subtitles()[0].text, "one, two, three");
}

#[test]
fn test_dialogue_without_format() {
    let result = SsaReader::from_string(
        "[Events]\nDialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,text\n",
    );
    match result {
        Err(SsaError::Format { expected, .. }) => {
            assert_eq!(expected, "a Format line before the first Dialogue");
        }
        other => panic!("expected a format error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_short_dialogue_line() {
    let result = SsaReader::from_string(&format!("{HEADER}Dialogue: 0,0:00:01.00\n"));
    assert!(matches!(result, Err(SsaError::Format { .. })));
}

#[test]
fn test_other_sections_are_ignored() {
    let reader = SsaReader::from_string(
        "[V4 Styles]\nFormat: Name, Fontname\nStyle: Default,Arial\n\n[Events]\n\
         Format: Start, End, Text\nDialogue: 0:00:01.00,0:00:02.00,text\n",
    )
    .unwrap();

    assert_eq!(reader.raw_subtitles().len(), 1);
}

#[test]
fn test_malformed_time() {
    let result = SsaReader::from_string(&format!(
        "{HEADER}Dialogue: 0,0:00:01,0:00:02.00,Default,,0,0,0,,text\n"
    ));
    assert!(matches!(result, Err(SsaError::Format { .. })));
}
