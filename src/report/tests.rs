// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{self, Write};

use super::{ConsoleReporter, RecordingReporter, SpeedReading, SpeedReporter};
use crate::drivetrain::Engagement;

fn reading(rpm: u32, engagement: Engagement) -> SpeedReading {
    SpeedReading {
        make: "Ford".to_string(),
        model: "Explorer".to_string(),
        rpm,
        engagement,
    }
}

#[test]
fn test_console_reporter_line_format() {
    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.report(reading(800, Engagement::Gear { gear: 1, speed: 10 }));
    reporter.report(reading(5000, Engagement::Fallback { speed: 5 }));

    let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    Ford Explorer: Driving at a current speed of 10 mph
    Ford Explorer: Driving at a current speed of 5 mph
    ");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_reporter_surfaces_write_error() {
    let mut reporter = ConsoleReporter::new(BrokenPipe);
    reporter.report(reading(800, Engagement::Gear { gear: 1, speed: 10 }));
    reporter.report(reading(1200, Engagement::Gear { gear: 2, speed: 30 }));

    let err = reporter.finish().err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_recording_reporter_keeps_order() {
    let mut reporter = RecordingReporter::new();
    reporter.report(reading(1200, Engagement::Gear { gear: 2, speed: 30 }));
    reporter.report(reading(800, Engagement::Gear { gear: 1, speed: 10 }));

    let rpms: Vec<_> = reporter.readings().iter().map(|r| r.rpm).collect();
    assert_eq!(rpms, [1200, 800]);
    assert_eq!(reporter.into_readings().len(), 2);
}

#[test]
fn test_reading_serializes_engagement_kind() {
    let json = serde_json::to_value(reading(1200, Engagement::Gear { gear: 2, speed: 30 })).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "make": "Ford",
            "model": "Explorer",
            "rpm": 1200,
            "engagement": { "kind": "gear", "gear": 2, "speed": 30 },
        })
    );
}
