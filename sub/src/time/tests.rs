/*
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_construction() {
    let t = Time::from_hms(3, 5, 7, 40);
    assert_eq!(t.hours(), 3);
    assert_eq!(t.minutes(), 5);
    assert_eq!(t.seconds(), 7);
    assert_eq!(t.milliseconds(), Ok(40));

    let t = Time::from_hms(591353, 1, 2, 3);
    assert_eq!(t.hours(), 591353);
    assert_eq!(t.minutes(), 1);
    assert_eq!(t.seconds(), 2);
    assert_eq!(t.milliseconds(), Ok(3));
}

#[test]
fn test_conversion() {
    // 40ms is one frame at 25fps
    let t = Time::from_hms(3, 5, 7, 40);
    assert_eq!(t.frames_at(Rational::new(25, 1)), 1);
    let t = Time::from_hmsf(3, 5, 7, 1, Some(Rational::new(25, 1)));
    assert_eq!(t.milliseconds(), Ok(40));

    // 120ms is three frames at 25fps
    let t = Time::from_hms(3, 5, 7, 120);
    assert_eq!(t.frames_at(Rational::new(25, 1)), 3);
    let t = Time::from_hmsf(3, 5, 7, 3, Some(Rational::new(25, 1)));
    assert_eq!(t.milliseconds(), Ok(120));
}

#[test]
fn test_frame_round_trip() {
    let rate = Rational::new(24000, 1001);
    for frames in 0..24 {
        let t = Time::from_hmsf(0, 0, 0, frames, Some(rate));
        assert_eq!(t.frames_at(rate), frames);
    }
}

#[test]
fn test_operators() {
    assert_eq!(Time::from_hms(0, 0, 5, 792), Time::from_hms(0, 0, 5, 792));
    assert_ne!(Time::from_hms(0, 0, 55, 332), Time::from_hms(0, 0, 58, 332));

    assert!(Time::from_hms(0, 0, 55, 332) < Time::from_hms(0, 0, 58, 332));
    assert!(Time::from_hmsf(0, 1, 0, 4, None) < Time::from_hmsf(0, 1, 0, 7, None));
}

#[test]
fn test_unknown_frame_rate() {
    assert_eq!(
        Time::from_hmsf(2, 1, 58, 4, None).all_as_seconds(),
        Err(UnknownFrameRateError)
    );

    let seconds = Time::from_hmsf(2, 1, 58, 4, Some(Rational::new(24, 1)))
        .all_as_seconds()
        .unwrap();
    assert!((seconds - 7318.1667).abs() < 0.001);
}

#[test]
fn test_mixed_representations_do_not_compare() {
    let metric = Time::from_hms(0, 0, 1, 0);
    let frame = Time::from_hmsf(0, 0, 1, 0, None);

    assert_ne!(metric, frame);
    assert_eq!(metric.partial_cmp(&frame), None);

    // the whole-second parts settle it without consulting the fraction
    assert!(Time::from_hms(0, 0, 1, 500) < Time::from_hmsf(0, 0, 2, 0, None));
}

#[test]
fn test_add() {
    let sum = Time::from_hms(0, 59, 30, 800)
        .add(Time::from_hms(0, 0, 29, 300))
        .unwrap();
    assert_eq!(sum, Time::from_hms(1, 0, 0, 100));

    let sum = Time::from_hmsf(0, 0, 1, 10, None)
        .add(Time::from_hmsf(0, 0, 2, 5, None))
        .unwrap();
    assert_eq!(sum.frame(), Some(15));
    assert_eq!(sum.seconds(), 3);

    assert_eq!(
        Time::from_hmsf(0, 0, 1, 10, None).add(Time::from_hms(0, 0, 1, 0)),
        Err(UnknownFrameRateError)
    );
}

#[test]
fn test_display() {
    assert_eq!(Time::from_hms(1, 2, 3, 45).to_string(), "01:02:03,045");
    assert_eq!(Time::from_hmsf(1, 2, 3, 4, None).to_string(), "01:02:03:04");
}
