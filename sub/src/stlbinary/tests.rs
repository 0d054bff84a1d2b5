/*
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use std::io::Cursor;

fn gsi() -> Vec<u8> {
    let mut block = vec![0x20u8; 1024];
    block[0..3].copy_from_slice(b"850");
    block[3..11].copy_from_slice(b"STL25.01");
    block[11] = b'1';
    block[12..14].copy_from_slice(b"00");
    block[14..16].copy_from_slice(b"09");
    block[16..20].copy_from_slice(b"Test");
    block[253..255].copy_from_slice(b"23");
    block[255] = b'1';
    block[256..264].copy_from_slice(b"00000000");
    block
}

fn tti(number: u16, text: &[u8]) -> Vec<u8> {
    let mut block = vec![0x8Fu8; 128];
    block[0] = 0;
    block[1..3].copy_from_slice(&number.to_le_bytes());
    block[3] = 0xFF;
    block[4] = 0;
    block[5..9].copy_from_slice(&[0, 0, 1, 4]);
    block[9..13].copy_from_slice(&[0, 0, 2, 16]);
    block[13] = 20;
    block[14] = 2;
    block[15] = 0;
    block[16..16 + text.len()].copy_from_slice(text);
    block
}

fn file(blocks: &[Vec<u8>]) -> Cursor<Vec<u8>> {
    let mut data = gsi();
    for block in blocks {
        data.extend_from_slice(block);
    }
    Cursor::new(data)
}

#[test]
fn test_header() {
    let reader = StlBinaryReader::new(file(&[tti(0, b"Hello")])).unwrap();
    let header = reader.header();

    assert_eq!(header.code_page_number, "850");
    assert_eq!(header.disk_format_code, "STL25.01");
    assert_eq!(header.frame_rate, Rational::new(25, 1));
    assert_eq!(header.display_standard, DisplayStandard::Level1Teletext);
    assert_eq!(header.language_group, LanguageGroup::Latin);
    assert_eq!(header.language, Language::English);
    assert_eq!(header.original_programme_title, "Test");
    assert_eq!(header.timecode_status, TimecodeStatus::IntendedForUse);
    assert_eq!(header.maximum_rows, 23);
    assert_eq!(header.start_of_programme.frame(), Some(0));
}

#[test]
fn test_simple_text() {
    let reader = StlBinaryReader::new(file(&[tti(0, b"Hello")])).unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].text, "Hello");
    assert_eq!(raw[0].from.frame(), Some(4));
    // the rate was retained from the header, so conversion needs nothing more
    assert_eq!(raw[0].from.milliseconds(), Ok(160));
    assert_eq!(raw[0].to.seconds(), 2);
    assert_eq!(raw[0].vertical_position, VerticalPosition::Lines { line: 20, lines: 23 });
}

#[test]
fn test_italic_toggle_splits_runs() {
    let reader =
        StlBinaryReader::new(file(&[tti(0, b"a \x80slanted\x81 b")])).unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[0].text, "a ");
    assert!(!raw[0].italic);
    assert_eq!(raw[1].text, "slanted");
    assert!(raw[1].italic);
    assert_eq!(raw[2].text, " b");
    assert!(!raw[2].italic);
}

#[test]
fn test_line_break_moves_down() {
    let reader = StlBinaryReader::new(file(&[tti(0, b"upper\x8Alower")])).unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].vertical_position, VerticalPosition::Lines { line: 20, lines: 23 });
    assert_eq!(raw[1].vertical_position, VerticalPosition::Lines { line: 21, lines: 23 });
}

#[test]
fn test_teletext_colour() {
    let reader = StlBinaryReader::new(file(&[tti(0, b"\x02green")])).unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(
        raw[0].colour,
        Rgb {
            red: 0.0,
            green: 1.0,
            blue: 0.0,
        }
    );
}

#[test]
fn test_comment_blocks_are_skipped() {
    let mut comment = tti(0, b"internal note");
    comment[15] = 1;
    let reader = StlBinaryReader::new(file(&[comment, tti(1, b"shown")])).unwrap();

    let raw = reader.raw_subtitles();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].text, "shown");
}

#[test]
fn test_user_data_blocks_are_skipped() {
    let mut user_data = tti(0, b"payload");
    user_data[3] = 0xFE;
    let reader = StlBinaryReader::new(file(&[user_data])).unwrap();
    assert!(reader.raw_subtitles().is_empty());
}

#[test]
fn test_unknown_language_code() {
    let mut block = gsi();
    block[14..16].copy_from_slice(b"ZZ");
    match StlBinaryReader::new(Cursor::new(block)) {
        Err(StlBinaryError::UnknownCode { source }) => {
            assert_eq!(source.kind, "language");
            assert_eq!(source.code, "ZZ");
        }
        other => panic!("expected an unknown code error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unknown_justification_code() {
    let mut block = tti(0, b"text");
    block[14] = 9;
    assert!(matches!(
        StlBinaryReader::new(file(&[block])),
        Err(StlBinaryError::UnknownCode { .. })
    ));
}

#[test]
fn test_bad_disk_format_code() {
    let mut block = gsi();
    block[3..11].copy_from_slice(b"STL99.01");
    match StlBinaryReader::new(Cursor::new(block)) {
        Err(StlBinaryError::Format { field, value, .. }) => {
            assert_eq!(field, "disk format code");
            assert_eq!(value, "STL99.01");
        }
        other => panic!("expected a format error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_bad_timecode() {
    let mut block = tti(0, b"text");
    block[6] = 61;
    assert!(matches!(
        StlBinaryReader::new(file(&[block])),
        Err(StlBinaryError::Format { .. })
    ));
}

#[test]
fn test_short_header_is_an_io_error() {
    assert!(matches!(
        StlBinaryReader::new(Cursor::new(vec![0u8; 100])),
        Err(StlBinaryError::Io { .. })
    ));
}

#[test]
fn test_grouping_across_runs() {
    let reader = StlBinaryReader::new(file(&[tti(0, b"a \x80b\x81 c")])).unwrap();

    let subtitles = reader.subtitles();
    assert_eq!(subtitles.len(), 1);
    assert_eq!(subtitles[0].blocks[0].runs.len(), 3);
}
