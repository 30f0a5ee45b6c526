// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Elapsed time of an activity and the speed derived from it.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Elapsed time as separate hour/minute/second components.
///
/// Minutes and seconds are expected to be in `0..60` but this is not
/// enforced: values are stored and rendered verbatim, never carried over
/// into the next larger unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Duration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Duration prefilled for a new entry (0:59:59).
pub const DEFAULT_ENTRY_DURATION: Duration = Duration {
    hours: 0,
    minutes: 59,
    seconds: 59,
};

impl Duration {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total elapsed time in fractional hours.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0 + f64::from(self.seconds) / 3600.0
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Render a duration as `H:MM:SS`.
///
/// Hours are unpadded and unbounded; minutes and seconds are padded to two
/// digits but otherwise passed through, so 75 minutes renders as `:75:`.
pub fn format_duration(d: &Duration) -> String {
    format!("{}:{:02}:{:02}", d.hours, d.minutes, d.seconds)
}

/// Average speed in km/h, or `None` when it cannot be computed.
pub fn speed_kmh(distance_km: Option<f64>, duration: &Duration) -> Option<f64> {
    let distance = distance_km.filter(|d| *d > 0.0)?;
    let hours = duration.total_hours();
    if hours <= 0.0 {
        return None;
    }
    Some(distance / hours)
}

/// Average speed rendered with one decimal digit.
pub fn calculate_speed(distance_km: Option<f64>, duration: &Duration) -> Option<String> {
    speed_kmh(distance_km, duration).map(format_one_decimal)
}

/// Render a number with one decimal digit, rounding exact ties away from zero.
///
/// `{:.1}` alone rounds ties to even, so 10.25 would print as `10.2`.
pub fn format_one_decimal(value: f64) -> String {
    // A tie at the second decimal is an odd multiple of 0.25; scaling by 4 is exact.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
