//! Optional observability hooks.
//!
//! A [`SolarCalculator`](crate::SolarCalculator) reports what it computes to a
//! [`SolarObserver`] supplied by the caller. The calculator never reads anything back, so
//! results are the same with any observer or none. The unit type `()` is the disabled
//! observer and is used when none is given.

use core::fmt;

/// A value attached to an observability event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation<'a> {
    /// Floating-point value.
    Float(f64),
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Text(&'a str),
}

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Formats annotations as space-separated `key=value` pairs.
#[derive(Debug, Clone, Copy)]
pub struct Annotations<'a>(pub &'a [(&'a str, Annotation<'a>)]);

impl fmt::Display for Annotations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Receiver for structured events and timing markers.
///
/// Every method defaults to doing nothing, so implementors override only what they need.
/// Implementations must not panic.
pub trait SolarObserver {
    /// A named event with key/value annotations.
    fn event(&self, name: &str, annotations: &[(&str, Annotation<'_>)]) {
        let _ = (name, annotations);
    }

    /// Start of a named unit of work.
    fn begin(&self, name: &str) {
        let _ = name;
    }

    /// End of a named unit of work started with [`begin`](Self::begin).
    fn end(&self, name: &str) {
        let _ = name;
    }
}

impl SolarObserver for () {}

impl<O: SolarObserver + ?Sized> SolarObserver for &O {
    fn event(&self, name: &str, annotations: &[(&str, Annotation<'_>)]) {
        (**self).event(name, annotations);
    }

    fn begin(&self, name: &str) {
        (**self).begin(name);
    }

    fn end(&self, name: &str) {
        (**self).end(name);
    }
}

/// Forwards events to the [`log`] facade.
///
/// Events are logged at `debug` level and timing markers at `trace` level, under the
/// `solar_events` target.
///
/// # Example
/// ```
/// use solar_events::{LogObserver, SolarCalculator};
/// use chrono::{DateTime, Utc};
///
/// let date = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let result = SolarCalculator::new(date, 48.21, 16.37)
///     .unwrap()
///     .with_observer(LogObserver)
///     .calculate();
/// assert!(result.sunrise().is_some());
/// ```
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl SolarObserver for LogObserver {
    fn event(&self, name: &str, annotations: &[(&str, Annotation<'_>)]) {
        log::debug!(target: "solar_events", "{name} {}", Annotations(annotations));
    }

    fn begin(&self, name: &str) {
        log::trace!(target: "solar_events", "begin {name}");
    }

    fn end(&self, name: &str) {
        log::trace!(target: "solar_events", "end {name}");
    }
}
