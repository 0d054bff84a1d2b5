/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Normalizes subtitle data from heterogeneous source formats into one format-agnostic model.
//!
//! # Overview
//!
//! Each supported format has a reader that walks its byte or line stream and emits
//! [`RawSubtitle`] runs, one per stretch of text with a single style. The
//! [`collect`](collect::collect) pass then folds consecutive runs that share timing, position,
//! and fades into grouped [`Subtitle`] values. Downstream code works on that model alone and
//! needs no knowledge of the originating format.
//!
//! Timestamps are [`Time`] values and keep whichever representation the source format had:
//! exact milliseconds, or a frame count that only becomes a wall-clock quantity once a frame
//! rate is supplied.
//!
//! Parsing is eager: constructing a reader consumes its whole input, and a single malformed
//! line fails the construction with an error naming the offending text. Use
//! [`factory::reader_for`] to pick a reader for a file by extension and magic bytes.

pub mod collect;
pub mod factory;
pub mod markup;
pub mod source;
pub mod ssa;
pub mod stlbinary;
pub mod stltables;
pub mod stltext;
pub mod subrip;
pub mod subtitle;
pub mod time;

pub use subtitle::{
    Block, FontSize, RawSubtitle, Rgb, Run, Subtitle, VerticalPosition, VerticalReference,
};
pub use time::{Rational, Time, UnknownFrameRateError};

/// A fully parsed subtitle source.
///
/// Construction has already consumed the input, so both views are cheap to take.
pub trait Reader {
    /// The runs in arrival order, one per style-consistent stretch of text.
    fn raw_subtitles(&self) -> &[RawSubtitle];

    /// The runs grouped into subtitles.
    fn subtitles(&self) -> Vec<Subtitle> {
        collect::collect(self.raw_subtitles().iter().cloned())
    }
}
