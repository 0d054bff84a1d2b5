/*
 * SPDX-License-Identifier: MPL-2.0
 */

//! Timestamps with two sub-second representations.
//!
//! A [`Time`] always carries metric hours, minutes, and seconds. The part below one second is
//! either an exact millisecond count or a frame count. A frame count only becomes a wall-clock
//! quantity once a frame rate is known; the rate may be attached at construction or supplied to
//! the individual conversion calls. Conversions that need a rate and have none fail with
//! [`UnknownFrameRateError`].

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error as ThisError;

/// A frame-based [`Time`] was asked to convert without ever having been given a rate.
#[derive(ThisError, Clone, Copy, Debug, Eq, PartialEq)]
#[error("time is frame-based but no frame rate has been supplied")]
pub struct UnknownFrameRateError;

/// A frame rate expressed as an exact integer ratio, so that fractional rates such as
/// 24000/1001 do not drift.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub fn new(numerator: i64, denominator: i64) -> Rational {
        assert!(numerator > 0 && denominator > 0, "frame rate must be positive");
        Rational {
            numerator,
            denominator,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum SubSecond {
    Milliseconds(u32),
    Frames { frames: i64, rate: Option<Rational> },
}

/// An instant within a subtitle presentation.
///
/// Two times compare like-for-like: a millisecond-based time and a frame-based time are never
/// equal, and ordering between them is defined only when the whole-second parts already differ.
/// Callers that need to order across representations must convert first, via
/// [`milliseconds`](Time::milliseconds) or [`frames_at`](Time::frames_at).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Time {
    hours: i64,
    minutes: u32,
    seconds: u32,
    fraction: SubSecond,
}

impl Time {
    /// Builds a fully metric time. Minutes and seconds must be below 60, milliseconds below
    /// 1000; out-of-range values are a caller bug.
    pub fn from_hms(hours: i64, minutes: u32, seconds: u32, milliseconds: u32) -> Time {
        assert!(minutes < 60, "minutes out of range");
        assert!(seconds < 60, "seconds out of range");
        assert!(milliseconds < 1000, "milliseconds out of range");

        Time {
            hours,
            minutes,
            seconds,
            fraction: SubSecond::Milliseconds(milliseconds),
        }
    }

    /// Builds a frame-based time. The rate is optional; when present it is retained so that
    /// later conversions do not need it re-supplied, and `from_hmsf(h, m, s, f,
    /// Some(r)).frames_at(r)` reproduces `f` exactly.
    pub fn from_hmsf(
        hours: i64,
        minutes: u32,
        seconds: u32,
        frames: i64,
        rate: Option<Rational>,
    ) -> Time {
        assert!(minutes < 60, "minutes out of range");
        assert!(seconds < 60, "seconds out of range");

        Time {
            hours,
            minutes,
            seconds,
            fraction: SubSecond::Frames { frames, rate },
        }
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// The sub-second part in milliseconds, converting from frames when necessary.
    pub fn milliseconds(&self) -> Result<u32, UnknownFrameRateError> {
        match self.fraction {
            SubSecond::Milliseconds(milliseconds) => Ok(milliseconds),
            SubSecond::Frames { frames, rate } => {
                let rate = rate.ok_or(UnknownFrameRateError)?;
                Ok(frames_to_milliseconds(frames, rate) as u32)
            }
        }
    }

    /// The raw frame count, or `None` for a metric time.
    pub fn frame(&self) -> Option<i64> {
        match self.fraction {
            SubSecond::Frames { frames, .. } => Some(frames),
            SubSecond::Milliseconds(_) => None,
        }
    }

    /// The raw millisecond count, or `None` for a frame-based time.
    pub fn metric(&self) -> Option<u32> {
        match self.fraction {
            SubSecond::Milliseconds(milliseconds) => Some(milliseconds),
            SubSecond::Frames { .. } => None,
        }
    }

    /// The sub-second part as a frame count at `rate`.
    ///
    /// A frame-based time with no retained rate is taken to already be at `rate`; one retained
    /// at a different rate is rescaled rather than returned as-is.
    pub fn frames_at(&self, rate: Rational) -> i64 {
        match self.fraction {
            SubSecond::Milliseconds(milliseconds) => {
                milliseconds_to_frames(milliseconds as i64, rate)
            }
            SubSecond::Frames { frames, rate: stored } => match stored {
                None => frames,
                Some(stored) if stored == rate => frames,
                Some(stored) => {
                    milliseconds_to_frames(frames_to_milliseconds(frames, stored), rate)
                }
            },
        }
    }

    /// The whole instant in seconds.
    pub fn all_as_seconds(&self) -> Result<f64, UnknownFrameRateError> {
        let whole = (self.hours * 3600 + self.minutes as i64 * 60 + self.seconds as i64) as f64;
        let fraction = match self.fraction {
            SubSecond::Milliseconds(milliseconds) => milliseconds as f64 / 1000.0,
            SubSecond::Frames { frames, rate } => {
                let rate = rate.ok_or(UnknownFrameRateError)?;
                frames as f64 * rate.denominator as f64 / rate.numerator as f64
            }
        };

        Ok(whole + fraction)
    }

    /// Adds an offset, for re-timing.
    ///
    /// Two frame-based times at an equal (or equally absent) rate stay frame-based; any other
    /// combination is normalized through milliseconds, which needs every frame-based side to
    /// carry a rate.
    pub fn add(&self, other: Time) -> Result<Time, UnknownFrameRateError> {
        match (self.fraction, other.fraction) {
            (
                SubSecond::Frames { frames: a, rate: rate_a },
                SubSecond::Frames { frames: b, rate: rate_b },
            ) if rate_a == rate_b => {
                let (hours, minutes, seconds) = add_hms(self, other);
                Ok(Time {
                    hours,
                    minutes,
                    seconds,
                    fraction: SubSecond::Frames {
                        frames: a + b,
                        rate: rate_a,
                    },
                })
            }
            _ => {
                let total = self.total_milliseconds()? + other.total_milliseconds()?;
                Ok(Time::from_total_milliseconds(total))
            }
        }
    }

    fn total_milliseconds(&self) -> Result<i64, UnknownFrameRateError> {
        let whole = (self.hours * 3600 + self.minutes as i64 * 60 + self.seconds as i64) * 1000;
        Ok(whole + self.milliseconds()? as i64)
    }

    fn from_total_milliseconds(total: i64) -> Time {
        let hours = total / 3_600_000;
        let minutes = (total / 60_000) % 60;
        let seconds = (total / 1000) % 60;
        let milliseconds = total % 1000;

        Time::from_hms(
            hours,
            minutes as u32,
            seconds as u32,
            milliseconds as u32,
        )
    }
}

impl PartialOrd for Time {
    /// `None` when the whole-second parts tie and the sub-second representations have no
    /// common ground.
    fn partial_cmp(&self, other: &Time) -> Option<Ordering> {
        let whole = (self.hours, self.minutes, self.seconds).cmp(&(
            other.hours,
            other.minutes,
            other.seconds,
        ));
        if whole != Ordering::Equal {
            return Some(whole);
        }

        match (self.fraction, other.fraction) {
            (SubSecond::Milliseconds(a), SubSecond::Milliseconds(b)) => Some(a.cmp(&b)),
            (
                SubSecond::Frames { frames: a, rate: rate_a },
                SubSecond::Frames { frames: b, rate: rate_b },
            ) if rate_a == rate_b => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fraction {
            SubSecond::Milliseconds(milliseconds) => write!(
                f,
                "{:02}:{:02}:{:02},{:03}",
                self.hours, self.minutes, self.seconds, milliseconds
            ),
            SubSecond::Frames { frames, .. } => write!(
                f,
                "{:02}:{:02}:{:02}:{:02}",
                self.hours, self.minutes, self.seconds, frames
            ),
        }
    }
}

fn add_hms(a: &Time, b: Time) -> (i64, u32, u32) {
    let mut seconds = a.seconds + b.seconds;
    let mut minutes = a.minutes + b.minutes + seconds / 60;
    seconds %= 60;
    let hours = a.hours + b.hours + (minutes / 60) as i64;
    minutes %= 60;

    (hours, minutes, seconds)
}

fn frames_to_milliseconds(frames: i64, rate: Rational) -> i64 {
    ((frames * 1000 * rate.denominator) as f64 / rate.numerator as f64).round() as i64
}

fn milliseconds_to_frames(milliseconds: i64, rate: Rational) -> i64 {
    ((milliseconds * rate.numerator) as f64 / (1000 * rate.denominator) as f64).round() as i64
}
