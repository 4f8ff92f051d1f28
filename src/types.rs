//! Core data types for sunrise/sunset calculations.

use crate::error::check_coordinates;
use crate::math::floor;
use crate::Result;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// A validated geographic position.
///
/// Latitude is within -90 to +90 degrees and longitude within -180 to +180 degrees; both
/// are finite. A `Coordinate` can only be obtained through [`Coordinate::new`].
///
/// # Example
/// ```
/// # use solar_events::Coordinate;
/// let san_francisco = Coordinate::new(37.7749, -122.4194).unwrap();
/// assert_eq!(san_francisco.latitude(), 37.7749);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` if either value is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Longitude expressed as an hour offset from the Greenwich meridian (degrees / 15).
    #[must_use]
    pub fn longitude_hours(&self) -> f64 {
        self.longitude / 15.0
    }
}

/// Which side of local noon an event lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The sun crosses the threshold while rising.
    Sunrise,
    /// The sun crosses the threshold while setting.
    Sunset,
}

impl EventKind {
    /// Both event kinds, sunrise first.
    pub const ALL: [Self; 2] = [Self::Sunrise, Self::Sunset];

    /// Short lowercase name, used in log annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        }
    }
}

/// Elevation thresholds at which sunrise, sunset and twilight are defined.
///
/// Each level is a fixed zenith angle; deeper levels bracket the official event with
/// progressively darker twilight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZenithLevel {
    /// Official sunrise/sunset: 90°50' (upper limb on the horizon, standard refraction).
    Official,
    /// Civil twilight: sun 6° below the horizon.
    Civil,
    /// Nautical twilight: sun 12° below the horizon.
    Nautical,
    /// Astronomical twilight: sun 18° below the horizon.
    Astronomical,
}

impl ZenithLevel {
    /// All levels, from the official event outward to astronomical twilight.
    pub const ALL: [Self; 4] = [
        Self::Official,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
    ];

    /// Gets the zenith angle in degrees for this level.
    #[must_use]
    pub const fn zenith_angle(self) -> f64 {
        match self {
            Self::Official => 90.83,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }

    /// Gets the matching solar elevation angle in degrees (90° minus the zenith angle).
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub fn elevation_angle(self) -> f64 {
        90.0 - self.zenith_angle()
    }

    /// Short lowercase name, used in log annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }
}

/// One of the eight (event kind, zenith level) combinations a calculation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarEvent {
    /// Rising or setting.
    pub kind: EventKind,
    /// Elevation threshold.
    pub zenith: ZenithLevel,
}

impl SolarEvent {
    /// Every combination, grouped by zenith level with sunrise before sunset.
    pub const ALL: [Self; 8] = [
        Self::new(EventKind::Sunrise, ZenithLevel::Official),
        Self::new(EventKind::Sunset, ZenithLevel::Official),
        Self::new(EventKind::Sunrise, ZenithLevel::Civil),
        Self::new(EventKind::Sunset, ZenithLevel::Civil),
        Self::new(EventKind::Sunrise, ZenithLevel::Nautical),
        Self::new(EventKind::Sunset, ZenithLevel::Nautical),
        Self::new(EventKind::Sunrise, ZenithLevel::Astronomical),
        Self::new(EventKind::Sunset, ZenithLevel::Astronomical),
    ];

    /// Creates an event key.
    #[must_use]
    pub const fn new(kind: EventKind, zenith: ZenithLevel) -> Self {
        Self { kind, zenith }
    }

    // Position in `ALL`.
    const fn index(self) -> usize {
        let zenith = match self.zenith {
            ZenithLevel::Official => 0,
            ZenithLevel::Civil => 1,
            ZenithLevel::Nautical => 2,
            ZenithLevel::Astronomical => 3,
        };
        let kind = match self.kind {
            EventKind::Sunrise => 0,
            EventKind::Sunset => 1,
        };
        zenith * 2 + kind
    }
}

/// Hours since midnight UTC of the calculation date, possibly on an adjacent day.
///
/// Used for event times without a concrete calendar date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use solar_events::HoursUtc;
/// let evening_before = HoursUtc::from_day_and_hours(-1, 18.5);
/// assert_eq!(evening_before.hours(), -5.5);
/// assert_eq!(evening_before.day_and_hours(), (-1, 18.5));
///
/// let after_midnight = HoursUtc::from_hours(24.5);
/// assert_eq!(after_midnight.day_and_hours(), (1, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc {
    day_offset: i32,
    hours_in_day: f64,
}

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() {
            return Self {
                day_offset: 0,
                hours_in_day: hours,
            };
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        Self {
            day_offset,
            hours_in_day: normalized_hours,
        }
    }

    /// Creates a new `HoursUtc` from a whole-day offset and an hour within that day.
    ///
    /// `hours_in_day` is expected in `[0, 24)`; it is stored as given so the time-of-day
    /// fields derived from it are exactly those of the caller's value.
    #[must_use]
    pub const fn from_day_and_hours(day_offset: i32, hours_in_day: f64) -> Self {
        Self {
            day_offset,
            hours_in_day,
        }
    }

    /// Gets the raw hours value relative to midnight of the calculation date.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.day_offset) * 24.0 + self.hours_in_day
    }

    /// Gets the day offset and the hours within that day (0.0 to < 24.0).
    #[must_use]
    pub const fn day_and_hours(&self) -> (i32, f64) {
        (self.day_offset, self.hours_in_day)
    }
}

/// Sunrise, sunset and twilight instants for one date and place.
///
/// Each of the eight [`SolarEvent`] slots is either an instant or `None` when the sun
/// never crosses that threshold on the date (polar day or polar night). A `SolarResult`
/// is a plain value: recalculating means building a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarResult {
    date: DateTime<Utc>,
    events: [Option<DateTime<Utc>>; 8],
}

impl SolarResult {
    pub(crate) const fn new(date: DateTime<Utc>, events: [Option<DateTime<Utc>>; 8]) -> Self {
        Self { date, events }
    }

    /// The instant (in UTC) the calculation was made for.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Gets the instant of one event, or `None` if it does not occur.
    #[must_use]
    pub const fn get(&self, event: SolarEvent) -> Option<DateTime<Utc>> {
        self.events[event.index()]
    }

    /// Gets the instant of the given kind at the given level.
    #[must_use]
    pub const fn event(&self, kind: EventKind, zenith: ZenithLevel) -> Option<DateTime<Utc>> {
        self.get(SolarEvent::new(kind, zenith))
    }

    /// Official sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunrise, ZenithLevel::Official)
    }

    /// Official sunset.
    #[must_use]
    pub const fn sunset(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunset, ZenithLevel::Official)
    }

    /// Start of civil twilight.
    #[must_use]
    pub const fn civil_sunrise(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunrise, ZenithLevel::Civil)
    }

    /// End of civil twilight.
    #[must_use]
    pub const fn civil_sunset(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunset, ZenithLevel::Civil)
    }

    /// Start of nautical twilight.
    #[must_use]
    pub const fn nautical_sunrise(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunrise, ZenithLevel::Nautical)
    }

    /// End of nautical twilight.
    #[must_use]
    pub const fn nautical_sunset(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunset, ZenithLevel::Nautical)
    }

    /// Start of astronomical twilight.
    #[must_use]
    pub const fn astronomical_sunrise(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunrise, ZenithLevel::Astronomical)
    }

    /// End of astronomical twilight.
    #[must_use]
    pub const fn astronomical_sunset(&self) -> Option<DateTime<Utc>> {
        self.event(EventKind::Sunset, ZenithLevel::Astronomical)
    }

    /// Iterates over all eight events in [`SolarEvent::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SolarEvent, Option<DateTime<Utc>>)> + '_ {
        SolarEvent::ALL
            .iter()
            .zip(self.events.iter())
            .map(|(event, instant)| (*event, *instant))
    }

    /// Time from official sunrise to official sunset, when both occur.
    #[must_use]
    pub fn day_length(&self) -> Option<TimeDelta> {
        Some(self.sunset()? - self.sunrise()?)
    }

    /// Checks whether `instant` lies in `[sunrise, sunset)` of the official events.
    ///
    /// Returns `false` whenever official sunrise or sunset is absent. This covers polar
    /// night, and also polar day: the two are not told apart.
    ///
    /// # Example
    /// ```
    /// # use solar_events::SolarCalculator;
    /// use chrono::{DateTime, Utc};
    ///
    /// let date = "2023-03-20T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    /// let result = SolarCalculator::new(date, 0.0, 0.0).unwrap().calculate();
    ///
    /// let sunrise = result.sunrise().unwrap();
    /// let sunset = result.sunset().unwrap();
    /// assert!(result.is_daytime(&sunrise));
    /// assert!(!result.is_daytime(&sunset));
    /// ```
    #[must_use]
    pub fn is_daytime<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        match (self.sunrise(), self.sunset()) {
            (Some(sunrise), Some(sunset)) => sunrise <= *instant && *instant < sunset,
            _ => false,
        }
    }

    /// Logical complement of [`is_daytime`](Self::is_daytime).
    #[must_use]
    pub fn is_nighttime<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        !self.is_daytime(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    fn regular_day() -> SolarResult {
        let mut events = [None; 8];
        events[0] = Some(at("2023-06-21T05:30:00Z"));
        events[1] = Some(at("2023-06-21T18:30:00Z"));
        events[2] = Some(at("2023-06-21T05:00:00Z"));
        events[3] = Some(at("2023-06-21T19:00:00Z"));
        SolarResult::new(at("2023-06-21T12:00:00Z"), events)
    }

    #[test]
    fn test_coordinate_validation() {
        let c = Coordinate::new(-33.8688, 151.2093).unwrap();
        assert_eq!(c.latitude(), -33.8688);
        assert_eq!(c.longitude(), 151.2093);

        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_longitude_hours() {
        assert_eq!(Coordinate::new(0.0, 150.0).unwrap().longitude_hours(), 10.0);
        assert_eq!(Coordinate::new(0.0, -75.0).unwrap().longitude_hours(), -5.0);
    }

    #[test]
    fn test_zenith_angles() {
        assert_eq!(ZenithLevel::Official.zenith_angle(), 90.83);
        assert_eq!(ZenithLevel::Civil.zenith_angle(), 96.0);
        assert_eq!(ZenithLevel::Nautical.zenith_angle(), 102.0);
        assert_eq!(ZenithLevel::Astronomical.zenith_angle(), 108.0);

        assert_eq!(ZenithLevel::Civil.elevation_angle(), -6.0);
        assert_eq!(ZenithLevel::Astronomical.elevation_angle(), -18.0);
        assert!((ZenithLevel::Official.elevation_angle() + 0.83).abs() < 1e-12);
    }

    #[test]
    fn test_solar_event_indices_are_unique() {
        for (i, event) in SolarEvent::ALL.iter().enumerate() {
            assert_eq!(event.index(), i, "{event:?}");
        }
    }

    #[test]
    fn test_hours_utc_from_hours() {
        assert_eq!(HoursUtc::from_hours(12.5).day_and_hours(), (0, 12.5));
        assert_eq!(HoursUtc::from_hours(25.5).day_and_hours(), (1, 1.5));
        assert_eq!(HoursUtc::from_hours(-0.5).day_and_hours(), (-1, 23.5));
        assert_eq!(HoursUtc::from_hours(0.0).day_and_hours(), (0, 0.0));
        assert_eq!(HoursUtc::from_hours(24.0).day_and_hours(), (1, 0.0));

        let nan = HoursUtc::from_hours(f64::NAN);
        assert_eq!(nan.day_and_hours().0, 0);
        assert!(nan.hours().is_nan());
    }

    #[test]
    fn test_hours_utc_from_day_and_hours() {
        let next = HoursUtc::from_day_and_hours(1, 3.25);
        assert_eq!(next.hours(), 27.25);
        assert_eq!(next.day_and_hours(), (1, 3.25));

        let same = HoursUtc::from_day_and_hours(0, 23.75);
        assert_eq!(same.hours(), 23.75);
    }

    #[test]
    fn test_named_accessors_follow_keyed_lookup() {
        let result = regular_day();
        assert_eq!(result.sunrise(), Some(at("2023-06-21T05:30:00Z")));
        assert_eq!(result.sunset(), Some(at("2023-06-21T18:30:00Z")));
        assert_eq!(result.civil_sunrise(), Some(at("2023-06-21T05:00:00Z")));
        assert_eq!(result.civil_sunset(), Some(at("2023-06-21T19:00:00Z")));
        assert_eq!(result.nautical_sunrise(), None);
        assert_eq!(result.nautical_sunset(), None);
        assert_eq!(result.astronomical_sunrise(), None);
        assert_eq!(result.astronomical_sunset(), None);

        for (event, instant) in result.iter() {
            assert_eq!(result.get(event), instant);
        }
        assert_eq!(result.iter().count(), 8);
    }

    #[test]
    fn test_day_length() {
        assert_eq!(regular_day().day_length(), Some(TimeDelta::hours(13)));

        let polar = SolarResult::new(at("2023-12-21T12:00:00Z"), [None; 8]);
        assert_eq!(polar.day_length(), None);
    }

    #[test]
    fn test_daytime_is_half_open() {
        let result = regular_day();
        assert!(!result.is_daytime(&at("2023-06-21T05:29:59Z")));
        assert!(result.is_daytime(&at("2023-06-21T05:30:00Z")));
        assert!(result.is_daytime(&at("2023-06-21T18:29:59Z")));
        assert!(!result.is_daytime(&at("2023-06-21T18:30:00Z")));
        assert!(result.is_nighttime(&at("2023-06-21T18:30:00Z")));
    }

    #[test]
    fn test_daytime_accepts_any_timezone() {
        use chrono::FixedOffset;

        let result = regular_day();
        let local = "2023-06-21T14:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert!(result.is_daytime(&local));
    }

    #[test]
    fn test_missing_events_are_never_daytime() {
        let polar = SolarResult::new(at("2023-12-21T12:00:00Z"), [None; 8]);
        assert!(!polar.is_daytime(&at("2023-12-21T12:00:00Z")));
        assert!(polar.is_nighttime(&at("2023-12-21T12:00:00Z")));

        let mut events = [None; 8];
        events[0] = Some(at("2023-06-21T05:30:00Z"));
        let sunrise_only = SolarResult::new(at("2023-06-21T12:00:00Z"), events);
        assert!(!sunrise_only.is_daytime(&at("2023-06-21T12:00:00Z")));
    }
}
