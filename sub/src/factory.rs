/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Picks and runs a reader for a file on disk.
//!
//! Dispatch is by lowercased extension. `.stl` is ambiguous between the text and binary
//! formats, so the first bytes are sniffed: a binary file's disk format code places the
//! ASCII text "STL" at bytes 3 to 5. Unrecognized extensions (including the XML-wrapped
//! reel formats, which this crate does not read) yield no reader rather than an error.


use std::fs::File;
use std::io::{Error as IoError, Read, Seek, SeekFrom};
use std::path::Path;

use thiserror::Error as ThisError;

use crate::ssa::{SsaError, SsaReader};
use crate::stlbinary::{StlBinaryError, StlBinaryReader};
use crate::stltext::{StlTextError, StlTextReader};
use crate::subrip::{SubripError, SubripReader};
use crate::Reader;

pub type FactoryResult<T> = Result<T, FactoryError>;

#[derive(ThisError, Debug)]
pub enum FactoryError {
    #[error("IO error opening subtitle file")]
    Io {
        #[from]
        source: IoError,
    },
    #[error("SubRip parse error")]
    Subrip {
        #[from]
        source: SubripError,
    },
    #[error("SubStation Alpha parse error")]
    Ssa {
        #[from]
        source: SsaError,
    },
    #[error("text subtitle parse error")]
    StlText {
        #[from]
        source: StlTextError,
    },
    #[error("binary subtitle parse error")]
    StlBinary {
        #[from]
        source: StlBinaryError,
    },
}

/// Constructs the reader matching `path`, parsing the file to completion, or `None` when the
/// format is not recognized.
pub fn reader_for(path: &Path) -> FactoryResult<Option<Box<dyn Reader>>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("srt") => Ok(Some(Box::new(SubripReader::new(File::open(path)?)?))),
        Some("ssa") | Some("ass") => Ok(Some(Box::new(SsaReader::new(File::open(path)?)?))),
        Some("stl") => {
            let mut file = File::open(path)?;
            let mut header = Vec::new();
            file.by_ref().take(11).read_to_end(&mut header)?;
            file.seek(SeekFrom::Start(0))?;

            if header.len() == 11 && &header[3..6] == b"STL" {
                Ok(Some(Box::new(StlBinaryReader::new(file)?)))
            } else {
                Ok(Some(Box::new(StlTextReader::new(file)?)))
            }
        }
        _ => Ok(None),
    }
}
