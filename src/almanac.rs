//! Almanac sunrise/sunset approximation.
//!
//! Implements the sunrise/sunset algorithm published in the Almanac for Computers
//! (Nautical Almanac Office, United States Naval Observatory, 1990). It is a fixed-form
//! approximation with a typical error of about one minute outside polar regions, much
//! cheaper than iterating a full solar position model.
//!
//! The calculation runs in four stages, each a pure function exposed here so callers can
//! inspect intermediate values:
//!
//! 1. [`seed_time`]: approximate time of the event, in days since the start of the year
//! 2. [`sun_coordinates`]: right ascension and declination of the sun at that time
//! 3. [`zenith_crossing`]: local hour angle at which the sun crosses the zenith threshold
//! 4. [`assemble`]: UTC hour of the event and the calendar day it falls on
//!
//! All angles are in degrees.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{acos_deg, asin, atan_deg, cos, cos_deg, floor, sin_deg, tan_deg, wrap_once};
use crate::time::day_of_year;
use crate::types::{Coordinate, EventKind, HoursUtc, ZenithLevel};
use crate::Result;

/// Right ascension and declination of the sun, as used by the zenith crossing stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    /// Right ascension in hours (0 to 24).
    pub right_ascension_hours: f64,
    /// Sine of the declination.
    pub sin_declination: f64,
    /// Cosine of the declination.
    pub cos_declination: f64,
}

/// Outcome of solving for the hour angle at a zenith threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZenithCrossing {
    /// The sun crosses the threshold.
    Crossing {
        /// Local hour angle of the crossing in hours, on the requested side of noon.
        hour_angle_hours: f64,
    },
    /// The sun stays below the threshold all day (cos H ≥ 1).
    NeverRises {
        /// The out-of-range cosine of the hour angle.
        cos_h: f64,
    },
    /// The sun stays above the threshold all day (cos H ≤ -1).
    NeverSets {
        /// The out-of-range cosine of the hour angle.
        cos_h: f64,
    },
}

impl ZenithCrossing {
    /// Gets the hour angle in hours if the sun crosses the threshold.
    #[must_use]
    pub const fn hour_angle_hours(&self) -> Option<f64> {
        match self {
            Self::Crossing { hour_angle_hours } => Some(*hour_angle_hours),
            Self::NeverRises { .. } | Self::NeverSets { .. } => None,
        }
    }
}

// Approximate local solar time of each event, in hours.
const fn base_hour(kind: EventKind) -> f64 {
    match kind {
        EventKind::Sunrise => 6.0,
        EventKind::Sunset => 18.0,
    }
}

/// Approximate time of the event in days since the start of the year.
///
/// `day_of_year` is 1-based. The local solar hour of the event (6h for sunrise, 18h for
/// sunset) is shifted by the longitude, given in hours east of Greenwich, to get a UTC
/// fraction of the day.
#[must_use]
pub fn seed_time(day_of_year: u32, lng_hour: f64, kind: EventKind) -> f64 {
    f64::from(day_of_year) + (base_hour(kind) - lng_hour) / 24.0
}

/// Sun's right ascension and declination at seed time `t`.
#[must_use]
pub fn sun_coordinates(t: f64) -> SunCoordinates {
    // Mean anomaly
    let m = 0.9856 * t - 3.289;

    // True longitude
    let l = wrap_once(
        m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634,
        360.0,
    );

    // Right ascension, moved into the same quadrant as L
    let mut ra = wrap_once(atan_deg(0.91764 * tan_deg(l)), 360.0);
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    ra += l_quadrant - ra_quadrant;

    let sin_declination = 0.39782 * sin_deg(l);
    let cos_declination = cos(asin(sin_declination));

    SunCoordinates {
        right_ascension_hours: ra / 15.0,
        sin_declination,
        cos_declination,
    }
}

/// Local hour angle at which the sun crosses `zenith_angle` degrees.
///
/// Sunrise takes the morning solution (360° − acos), sunset the evening one.
#[must_use]
pub fn zenith_crossing(
    zenith_angle: f64,
    sun: &SunCoordinates,
    latitude: f64,
    kind: EventKind,
) -> ZenithCrossing {
    let cos_h = (cos_deg(zenith_angle) - sun.sin_declination * sin_deg(latitude))
        / (sun.cos_declination * cos_deg(latitude));

    if cos_h >= 1.0 {
        return ZenithCrossing::NeverRises { cos_h };
    }
    if cos_h <= -1.0 {
        return ZenithCrossing::NeverSets { cos_h };
    }

    let h = match kind {
        EventKind::Sunrise => 360.0 - acos_deg(cos_h),
        EventKind::Sunset => acos_deg(cos_h),
    };

    ZenithCrossing::Crossing {
        hour_angle_hours: h / 15.0,
    }
}

/// UTC hour of the event and the day it belongs to.
///
/// The day offset is -1 for a sunrise east of Greenwich whose UTC hour is past noon, +1
/// for a sunset west of Greenwich whose UTC hour is before noon, and 0 otherwise.
///
/// Near the antimeridian a single wrap can leave the UTC hour just outside `[0, 24)`.
/// That overflow carries into the adjacent day, so the returned hour is always in
/// `[0, 24)`.
#[must_use]
pub fn assemble(
    hour_angle_hours: f64,
    right_ascension_hours: f64,
    t: f64,
    lng_hour: f64,
    kind: EventKind,
) -> HoursUtc {
    // Local mean time
    let local = hour_angle_hours + right_ascension_hours - 0.06571 * t - 6.622;
    let ut = wrap_once(local - lng_hour, 24.0);

    let day_offset = match kind {
        EventKind::Sunrise if lng_hour > 0.0 && ut > 12.0 => -1,
        EventKind::Sunset if lng_hour < 0.0 && ut < 12.0 => 1,
        _ => 0,
    };

    let carry = if ut < 0.0 {
        -1
    } else if ut >= 24.0 {
        1
    } else {
        0
    };
    HoursUtc::from_day_and_hours(day_offset + carry, wrap_once(ut, 24.0))
}

/// Runs the three solving stages for one event, stopping at the crossing test.
#[must_use]
pub fn solve(
    day_of_year: u32,
    coordinate: &Coordinate,
    kind: EventKind,
    zenith_angle: f64,
) -> (ZenithCrossing, Option<HoursUtc>) {
    let lng_hour = coordinate.longitude_hours();
    let t = seed_time(day_of_year, lng_hour, kind);
    let sun = sun_coordinates(t);
    let crossing = zenith_crossing(zenith_angle, &sun, coordinate.latitude(), kind);
    let time = crossing
        .hour_angle_hours()
        .map(|h| assemble(h, sun.right_ascension_hours, t, lng_hour, kind));
    (crossing, time)
}

/// Calculates one event as hours relative to midnight UTC of the given date.
///
/// The chrono-free counterpart of [`SolarCalculator`](crate::SolarCalculator). Returns
/// `Ok(None)` when the sun does not cross the threshold on that date.
///
/// # Errors
/// Returns `InvalidCoordinate` for out-of-range coordinates and `InvalidDate` for a
/// year/month/day that does not exist.
///
/// # Example
/// ```
/// use solar_events::{almanac, EventKind, ZenithLevel};
///
/// let sunrise = almanac::event_time_utc(
///     2023, 6, 21,
///     37.7749,   // San Francisco latitude
///     -122.4194, // San Francisco longitude
///     EventKind::Sunrise,
///     ZenithLevel::Official,
/// ).unwrap().unwrap();
///
/// // About 12:48 UTC (05:48 PDT)
/// assert!((sunrise.hours() - 12.8).abs() < 0.1);
/// ```
pub fn event_time_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    kind: EventKind,
    zenith: ZenithLevel,
) -> Result<Option<HoursUtc>> {
    let coordinate = Coordinate::new(latitude, longitude)?;
    let ordinal = day_of_year(year, month, day)?;
    Ok(solve(ordinal, &coordinate, kind, zenith.zenith_angle()).1)
}
