//! Sunrise, sunset and twilight times for a date and place.

use crate::almanac::{self, ZenithCrossing};
use crate::observer::{Annotation, SolarObserver};
use crate::time::{instant_on, utc_date, utc_day_of_year};
use crate::types::{Coordinate, SolarEvent, SolarResult};
use crate::Result;
use chrono::{DateTime, TimeZone, Utc};

/// An instant and a place to calculate solar events for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// Instant whose UTC calendar date selects the day of the events.
    pub date: DateTime<Utc>,
    /// Observer position.
    pub coordinate: Coordinate,
}

impl CalculationInput {
    /// Creates an input, converting `date` to UTC.
    #[must_use]
    pub fn new<Tz: TimeZone>(date: DateTime<Tz>, coordinate: Coordinate) -> Self {
        Self {
            date: date.with_timezone(&Utc),
            coordinate,
        }
    }
}

/// Calculates the eight sunrise, sunset and twilight instants of one UTC day.
///
/// The calculator only holds its input; every call to [`calculate`](Self::calculate)
/// recomputes the result from scratch. An optional [`SolarObserver`] receives a report of
/// each computed event.
///
/// # Example
/// ```
/// use solar_events::SolarCalculator;
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let calculator = SolarCalculator::new(
///     date,
///     37.7749,   // San Francisco latitude
///     -122.4194, // San Francisco longitude
/// ).unwrap();
///
/// let result = calculator.calculate();
/// let sunrise = result.sunrise().unwrap();
/// let sunset = result.sunset().unwrap();
/// assert!(result.civil_sunrise().unwrap() < sunrise);
/// assert!(sunrise < sunset);
/// assert!(calculator.is_daytime());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolarCalculator<O = ()> {
    input: CalculationInput,
    observer: O,
}

impl SolarCalculator {
    /// Creates a calculator for the given instant and coordinates.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` if latitude is outside -90..=90, longitude is outside
    /// -180..=180, or either is not finite.
    pub fn new<Tz: TimeZone>(date: DateTime<Tz>, latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        Ok(Self::from_input(CalculationInput::new(date, coordinate)))
    }

    /// Creates a calculator from an input whose coordinate is already validated.
    #[must_use]
    pub const fn from_input(input: CalculationInput) -> Self {
        Self {
            input,
            observer: (),
        }
    }
}

impl<O: SolarObserver> SolarCalculator<O> {
    /// Replaces the observer that receives calculation reports.
    #[must_use]
    pub fn with_observer<P: SolarObserver>(self, observer: P) -> SolarCalculator<P> {
        SolarCalculator {
            input: self.input,
            observer,
        }
    }

    /// Gets the calculation input.
    #[must_use]
    pub const fn input(&self) -> &CalculationInput {
        &self.input
    }

    /// Calculates all eight events for the UTC calendar date of the input instant.
    ///
    /// Events that do not occur on that date (the sun stays above or below the threshold
    /// all day) are `None`.
    #[must_use]
    pub fn calculate(&self) -> SolarResult {
        self.observer.begin("calculate");

        let date = utc_date(&self.input.date);
        let ordinal = utc_day_of_year(&self.input.date);

        let mut events = [None; 8];
        for (slot, event) in events.iter_mut().zip(SolarEvent::ALL) {
            let (crossing, time) = almanac::solve(
                ordinal,
                &self.input.coordinate,
                event.kind,
                event.zenith.zenith_angle(),
            );
            *slot = time.and_then(|time| instant_on(date, time));

            if let ZenithCrossing::NeverRises { cos_h } | ZenithCrossing::NeverSets { cos_h } =
                crossing
            {
                self.observer.event(
                    "no_crossing",
                    &[
                        ("event", Annotation::Text(event.kind.name())),
                        ("zenith", Annotation::Text(event.zenith.name())),
                        ("cos_h", Annotation::Float(cos_h)),
                    ],
                );
            }
            self.observer.event(
                "solar_event",
                &[
                    ("event", Annotation::Text(event.kind.name())),
                    ("zenith", Annotation::Text(event.zenith.name())),
                    ("present", Annotation::Bool(slot.is_some())),
                ],
            );
        }

        let present: i64 = events.iter().map(|instant| i64::from(instant.is_some())).sum();
        let absent: i64 = events.iter().map(|instant| i64::from(instant.is_none())).sum();
        self.observer.event(
            "summary",
            &[
                ("present", Annotation::Int(present)),
                ("absent", Annotation::Int(absent)),
            ],
        );

        self.observer.end("calculate");
        SolarResult::new(self.input.date, events)
    }

    /// Checks whether the input instant lies between official sunrise and sunset.
    ///
    /// Always `false` when either official event is absent, in polar day as well as
    /// polar night.
    #[must_use]
    pub fn is_daytime(&self) -> bool {
        self.is_daytime_at(&self.input.date)
    }

    /// Logical complement of [`is_daytime`](Self::is_daytime).
    #[must_use]
    pub fn is_nighttime(&self) -> bool {
        !self.is_daytime()
    }

    /// Checks whether `instant` lies between official sunrise and sunset of the input date.
    #[must_use]
    pub fn is_daytime_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.calculate().is_daytime(instant)
    }

    /// Logical complement of [`is_daytime_at`](Self::is_daytime_at).
    #[must_use]
    pub fn is_nighttime_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        !self.is_daytime_at(instant)
    }
}
