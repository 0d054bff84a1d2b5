/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Conversion tables for the fixed-field binary subtitle format.
//!
//! Each field kind has one process-wide immutable table mapping its file codes to semantic
//! values and human-readable descriptions. Decoding an absent code is an error carrying the
//! raw code; encoding is total, so a value missing from its table is a table-completeness bug
//! and panics.


use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Debug;

use once_cell::sync::Lazy;
use thiserror::Error as ThisError;

/// A file code has no entry in its conversion table.
#[derive(ThisError, Clone, Debug, Eq, PartialEq)]
#[error("unknown {kind} code {code:?}")]
pub struct UnknownCodeError {
    pub kind: &'static str,
    pub code: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisplayStandard {
    Undefined,
    OpenSubtitling,
    Level1Teletext,
    Level2Teletext,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LanguageGroup {
    Latin,
    LatinCyrillic,
    LatinArabic,
    LatinGreek,
    LatinHebrew,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimecodeStatus {
    NotIntendedForUse,
    IntendedForUse,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CumulativeStatus {
    NotCumulative,
    First,
    Intermediate,
    Last,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Justification {
    None,
    Left,
    Centre,
    Right,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Comment {
    No,
    Yes,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Language {
    Unknown,
    Albanian,
    Breton,
    Catalan,
    Croatian,
    Welsh,
    Czech,
    Danish,
    German,
    English,
    Spanish,
    Esperanto,
    Estonian,
    Basque,
    Faroese,
    French,
    Frisian,
    Irish,
    Gaelic,
    Galacian,
    Icelandic,
    Italian,
    Lappish,
    Latin,
    Latvian,
    Luxemborgian,
    Lithuanian,
    Hungarian,
    Maltese,
    Dutch,
    Norwegian,
    Occitan,
    Polish,
    Portugese,
    Romanian,
    Romansh,
    Serbian,
    Slovak,
    Slovenian,
    Finnish,
    Swedish,
    Turkish,
    Flemish,
    Wallon,
    Amharic,
    Arabic,
    Armenian,
    Assamese,
    Azerbaijani,
    Bambora,
    Bielorussian,
    Bengali,
    Bulgarian,
    Burmese,
    Chinese,
    Churash,
    Dari,
    Fulani,
    Georgian,
    Greek,
    Gujurati,
    Gurani,
    Hausa,
    Hebrew,
    Hindi,
    Indonesian,
    Japanese,
    Kannada,
    Kazakh,
    Khmer,
    Korean,
    Laotian,
    Macedonian,
    Malagasay,
    Malaysian,
    Moldavian,
    Marathi,
    Ndebele,
    Nepali,
    Oriya,
    Papamiento,
    Persian,
    Punjabi,
    Pushtu,
    Quechua,
    Russian,
    Ruthenian,
    SerboCroat,
    Shona,
    Sinhalese,
    Somali,
    SrananTongo,
    Swahili,
    Tadzhik,
    Tamil,
    Tatar,
    Telugu,
    Thai,
    Ukranian,
    Urdu,
    Uzbek,
    Vietnamese,
    Zulu,
}

const DISPLAY_STANDARDS: &[(&str, DisplayStandard, &str)] = &[
    (" ", DisplayStandard::Undefined, "Undefined"),
    ("0", DisplayStandard::OpenSubtitling, "Open subtitling"),
    ("1", DisplayStandard::Level1Teletext, "Level-1 teletext"),
    ("2", DisplayStandard::Level2Teletext, "Level-2 teletext"),
];

const LANGUAGE_GROUPS: &[(&str, LanguageGroup, &str)] = &[
    ("00", LanguageGroup::Latin, "Latin"),
    ("01", LanguageGroup::LatinCyrillic, "Latin/Cyrillic"),
    ("02", LanguageGroup::LatinArabic, "Latin/Arabic"),
    ("03", LanguageGroup::LatinGreek, "Latin/Greek"),
    ("04", LanguageGroup::LatinHebrew, "Latin/Hebrew"),
];

const TIMECODE_STATUSES: &[(&str, TimecodeStatus, &str)] = &[
    ("0", TimecodeStatus::NotIntendedForUse, "Not intended for use"),
    ("1", TimecodeStatus::IntendedForUse, "Intended for use"),
];

const CUMULATIVE_STATUSES: &[(i32, CumulativeStatus, &str)] = &[
    (0, CumulativeStatus::NotCumulative, "Not part of a cumulative set"),
    (1, CumulativeStatus::First, "First subtitle of a cumulative set"),
    (2, CumulativeStatus::Intermediate, "Intermediate subtitle of a cumulative set"),
    (3, CumulativeStatus::Last, "Last subtitle of a cumulative set"),
];

const JUSTIFICATIONS: &[(i32, Justification, &str)] = &[
    (0, Justification::None, "None"),
    (1, Justification::Left, "Left"),
    (2, Justification::Centre, "Centre"),
    (3, Justification::Right, "Right"),
];

const COMMENTS: &[(i32, Comment, &str)] = &[
    (0, Comment::No, "Not a comment"),
    (1, Comment::Yes, "Comment"),
];

const LANGUAGES: &[(&str, Language, &str)] = &[
    ("00", Language::Unknown, "Unknown"),
    ("01", Language::Albanian, "Albanian"),
    ("02", Language::Breton, "Breton"),
    ("03", Language::Catalan, "Catalan"),
    ("04", Language::Croatian, "Croatian"),
    ("05", Language::Welsh, "Welsh"),
    ("06", Language::Czech, "Czech"),
    ("07", Language::Danish, "Danish"),
    ("08", Language::German, "German"),
    ("09", Language::English, "English"),
    ("0A", Language::Spanish, "Spanish"),
    ("0B", Language::Esperanto, "Esperanto"),
    ("0C", Language::Estonian, "Estonian"),
    ("0D", Language::Basque, "Basque"),
    ("0E", Language::Faroese, "Faroese"),
    ("0F", Language::French, "French"),
    ("10", Language::Frisian, "Frisian"),
    ("11", Language::Irish, "Irish"),
    ("12", Language::Gaelic, "Gaelic"),
    ("13", Language::Galacian, "Galacian"),
    ("14", Language::Icelandic, "Icelandic"),
    ("15", Language::Italian, "Italian"),
    ("16", Language::Lappish, "Lappish"),
    ("17", Language::Latin, "Latin"),
    ("18", Language::Latvian, "Latvian"),
    ("19", Language::Luxemborgian, "Luxemborgian"),
    ("1A", Language::Lithuanian, "Lithuanian"),
    ("1B", Language::Hungarian, "Hungarian"),
    ("1C", Language::Maltese, "Maltese"),
    ("1D", Language::Dutch, "Dutch"),
    ("1E", Language::Norwegian, "Norwegian"),
    ("1F", Language::Occitan, "Occitan"),
    ("20", Language::Polish, "Polish"),
    ("21", Language::Portugese, "Portugese"),
    ("22", Language::Romanian, "Romanian"),
    ("23", Language::Romansh, "Romansh"),
    ("24", Language::Serbian, "Serbian"),
    ("25", Language::Slovak, "Slovak"),
    ("26", Language::Slovenian, "Slovenian"),
    ("27", Language::Finnish, "Finnish"),
    ("28", Language::Swedish, "Swedish"),
    ("29", Language::Turkish, "Turkish"),
    ("2A", Language::Flemish, "Flemish"),
    ("2B", Language::Wallon, "Wallon"),
    ("7F", Language::Amharic, "Amharic"),
    ("7E", Language::Arabic, "Arabic"),
    ("7D", Language::Armenian, "Armenian"),
    ("7C", Language::Assamese, "Assamese"),
    ("7B", Language::Azerbaijani, "Azerbaijani"),
    ("7A", Language::Bambora, "Bambora"),
    ("79", Language::Bielorussian, "Bielorussian"),
    ("78", Language::Bengali, "Bengali"),
    ("77", Language::Bulgarian, "Bulgarian"),
    ("76", Language::Burmese, "Burmese"),
    ("75", Language::Chinese, "Chinese"),
    ("74", Language::Churash, "Churash"),
    ("73", Language::Dari, "Dari"),
    ("72", Language::Fulani, "Fulani"),
    ("71", Language::Georgian, "Georgian"),
    ("70", Language::Greek, "Greek"),
    ("6F", Language::Gujurati, "Gujurati"),
    ("6E", Language::Gurani, "Gurani"),
    ("6D", Language::Hausa, "Hausa"),
    ("6C", Language::Hebrew, "Hebrew"),
    ("6B", Language::Hindi, "Hindi"),
    ("6A", Language::Indonesian, "Indonesian"),
    ("69", Language::Japanese, "Japanese"),
    ("68", Language::Kannada, "Kannada"),
    ("67", Language::Kazakh, "Kazakh"),
    ("66", Language::Khmer, "Khmer"),
    ("65", Language::Korean, "Korean"),
    ("64", Language::Laotian, "Laotian"),
    ("63", Language::Macedonian, "Macedonian"),
    ("62", Language::Malagasay, "Malagasay"),
    ("61", Language::Malaysian, "Malaysian"),
    ("60", Language::Moldavian, "Moldavian"),
    ("5F", Language::Marathi, "Marathi"),
    ("5E", Language::Ndebele, "Ndebele"),
    ("5D", Language::Nepali, "Nepali"),
    ("5C", Language::Oriya, "Oriya"),
    ("5B", Language::Papamiento, "Papamiento"),
    ("5A", Language::Persian, "Persian"),
    ("59", Language::Punjabi, "Punjabi"),
    ("58", Language::Pushtu, "Pushtu"),
    ("57", Language::Quechua, "Quechua"),
    ("56", Language::Russian, "Russian"),
    ("55", Language::Ruthenian, "Ruthenian"),
    ("54", Language::SerboCroat, "Serbo-Croat"),
    ("53", Language::Shona, "Shona"),
    ("52", Language::Sinhalese, "Sinhalese"),
    ("51", Language::Somali, "Somali"),
    ("50", Language::SrananTongo, "Sranan Tongo"),
    ("4F", Language::Swahili, "Swahili"),
    ("4E", Language::Tadzhik, "Tadzhik"),
    ("4D", Language::Tamil, "Tamil"),
    ("4C", Language::Tatar, "Tatar"),
    ("4B", Language::Telugu, "Telugu"),
    ("4A", Language::Thai, "Thai"),
    ("49", Language::Ukranian, "Ukranian"),
    ("48", Language::Urdu, "Urdu"),
    ("47", Language::Uzbek, "Uzbek"),
    ("46", Language::Vietnamese, "Vietnamese"),
    ("45", Language::Zulu, "Zulu"),
];

struct Code<T> {
    value: T,
    description: &'static str,
}

/// The conversion tables, one map per field kind.
pub struct StlTables {
    display_standard: BTreeMap<&'static str, Code<DisplayStandard>>,
    language_group: BTreeMap<&'static str, Code<LanguageGroup>>,
    language: BTreeMap<&'static str, Code<Language>>,
    timecode_status: BTreeMap<&'static str, Code<TimecodeStatus>>,
    cumulative_status: BTreeMap<i32, Code<CumulativeStatus>>,
    justification: BTreeMap<i32, Code<Justification>>,
    comment: BTreeMap<i32, Code<Comment>>,
}

static TABLES: Lazy<StlTables> = Lazy::new(|| StlTables {
    display_standard: build(DISPLAY_STANDARDS),
    language_group: build(LANGUAGE_GROUPS),
    language: build(LANGUAGES),
    timecode_status: build(TIMECODE_STATUSES),
    cumulative_status: build(CUMULATIVE_STATUSES),
    justification: build(JUSTIFICATIONS),
    comment: build(COMMENTS),
});

/// The shared table set, built once on first use and immutable afterwards.
pub fn tables() -> &'static StlTables {
    &TABLES
}

fn build<K, T>(entries: &'static [(K, T, &'static str)]) -> BTreeMap<K, Code<T>>
where
    K: Copy + Ord,
    T: Copy,
{
    entries
        .iter()
        .map(|&(code, value, description)| (code, Code { value, description }))
        .collect()
}

fn decode<K, Q, T>(
    map: &BTreeMap<K, Code<T>>,
    kind: &'static str,
    code: &Q,
) -> Result<T, UnknownCodeError>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ToString + ?Sized,
    T: Copy,
{
    map.get(code).map(|c| c.value).ok_or_else(|| UnknownCodeError {
        kind,
        code: code.to_string(),
    })
}

fn encode<K, T>(map: &BTreeMap<K, Code<T>>, kind: &'static str, value: T) -> K
where
    K: Copy + Ord,
    T: Copy + Debug + PartialEq,
{
    match map.iter().find(|(_, code)| code.value == value) {
        Some((key, _)) => *key,
        None => panic!("no {} file code for {:?}", kind, value),
    }
}

fn describe<K, T>(map: &BTreeMap<K, Code<T>>, kind: &'static str, value: T) -> &'static str
where
    K: Ord,
    T: Copy + Debug + PartialEq,
{
    match map.values().find(|code| code.value == value) {
        Some(code) => code.description,
        None => panic!("no {} description for {:?}", kind, value),
    }
}

impl StlTables {
    pub fn display_standard_from_file(
        &self,
        code: &str,
    ) -> Result<DisplayStandard, UnknownCodeError> {
        decode(&self.display_standard, "display standard", code)
    }

    pub fn language_group_from_file(&self, code: &str) -> Result<LanguageGroup, UnknownCodeError> {
        decode(&self.language_group, "language group", code)
    }

    pub fn language_from_file(&self, code: &str) -> Result<Language, UnknownCodeError> {
        decode(&self.language, "language", code)
    }

    pub fn timecode_status_from_file(
        &self,
        code: &str,
    ) -> Result<TimecodeStatus, UnknownCodeError> {
        decode(&self.timecode_status, "timecode status", code)
    }

    pub fn cumulative_status_from_file(
        &self,
        code: i32,
    ) -> Result<CumulativeStatus, UnknownCodeError> {
        decode(&self.cumulative_status, "cumulative status", &code)
    }

    pub fn justification_from_file(&self, code: i32) -> Result<Justification, UnknownCodeError> {
        decode(&self.justification, "justification", &code)
    }

    pub fn comment_from_file(&self, code: i32) -> Result<Comment, UnknownCodeError> {
        decode(&self.comment, "comment", &code)
    }

    pub fn display_standard_to_file(&self, value: DisplayStandard) -> &'static str {
        encode(&self.display_standard, "display standard", value)
    }

    pub fn language_group_to_file(&self, value: LanguageGroup) -> &'static str {
        encode(&self.language_group, "language group", value)
    }

    pub fn language_to_file(&self, value: Language) -> &'static str {
        encode(&self.language, "language", value)
    }

    pub fn timecode_status_to_file(&self, value: TimecodeStatus) -> &'static str {
        encode(&self.timecode_status, "timecode status", value)
    }

    pub fn cumulative_status_to_file(&self, value: CumulativeStatus) -> i32 {
        encode(&self.cumulative_status, "cumulative status", value)
    }

    pub fn justification_to_file(&self, value: Justification) -> i32 {
        encode(&self.justification, "justification", value)
    }

    pub fn comment_to_file(&self, value: Comment) -> i32 {
        encode(&self.comment, "comment", value)
    }

    pub fn display_standard_description(&self, value: DisplayStandard) -> &'static str {
        describe(&self.display_standard, "display standard", value)
    }

    pub fn language_group_description(&self, value: LanguageGroup) -> &'static str {
        describe(&self.language_group, "language group", value)
    }

    pub fn language_description(&self, value: Language) -> &'static str {
        describe(&self.language, "language", value)
    }

    pub fn timecode_status_description(&self, value: TimecodeStatus) -> &'static str {
        describe(&self.timecode_status, "timecode status", value)
    }

    pub fn cumulative_status_description(&self, value: CumulativeStatus) -> &'static str {
        describe(&self.cumulative_status, "cumulative status", value)
    }

    pub fn justification_description(&self, value: Justification) -> &'static str {
        describe(&self.justification, "justification", value)
    }

    pub fn comment_description(&self, value: Comment) -> &'static str {
        describe(&self.comment, "comment", value)
    }

    /// Finds a language by its human-readable description.
    ///
    /// Descriptions come from outside the format and sometimes use foreign or partial
    /// spellings, so a miss is expected and not an error.
    pub fn language_from_description(&self, description: &str) -> Option<Language> {
        self.language
            .values()
            .find(|code| code.description.eq_ignore_ascii_case(description))
            .map(|code| code.value)
    }
}
