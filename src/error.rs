//! Error types for the sunrise/sunset calculator.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when setting up a sunrise/sunset calculation.
///
/// A missing sunrise or sunset (polar day or polar night) is not an error; it is reported
/// as an absent value in [`SolarResult`](crate::SolarResult).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside -90..=90, longitude outside -180..=180, or either not finite.
    InvalidCoordinate {
        /// The latitude value provided.
        latitude: f64,
        /// The longitude value provided.
        longitude: f64,
    },
    /// Year/month/day components that do not name a day of the proleptic Gregorian calendar.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "invalid coordinate ({latitude}°, {longitude}°) (latitude must be between -90° and +90°, longitude between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid coordinate error.
    #[must_use]
    pub const fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinate {
            latitude,
            longitude,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Checks that latitude is finite and within -90 to +90 degrees.
#[must_use]
pub fn check_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

/// Checks that longitude is finite and within -180 to +180 degrees.
#[must_use]
pub fn check_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

/// Validates both latitude and longitude.
///
/// NaN and infinities fall outside both ranges and are rejected.
///
/// # Errors
/// Returns `InvalidCoordinate` if either component is out of range or not finite.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if check_latitude(latitude) && check_longitude(longitude) {
        Ok(())
    } else {
        Err(Error::invalid_coordinate(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0));
        assert!(check_latitude(90.0));
        assert!(check_latitude(-90.0));
        assert!(check_latitude(45.5));

        assert!(!check_latitude(91.0));
        assert!(!check_latitude(-91.0));
        assert!(!check_latitude(f64::NAN));
        assert!(!check_latitude(f64::INFINITY));
        assert!(!check_latitude(f64::NEG_INFINITY));
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0));
        assert!(check_longitude(180.0));
        assert!(check_longitude(-180.0));
        assert!(check_longitude(122.5));

        assert!(!check_longitude(181.0));
        assert!(!check_longitude(-180.000_001));
        assert!(!check_longitude(f64::NAN));
        assert!(!check_longitude(f64::INFINITY));
    }

    #[test]
    fn test_check_coordinates() {
        assert_eq!(check_coordinates(37.7749, -122.4194), Ok(()));
        assert_eq!(
            check_coordinates(95.0, 10.0),
            Err(Error::invalid_coordinate(95.0, 10.0))
        );
        assert_eq!(
            check_coordinates(10.0, -185.0),
            Err(Error::invalid_coordinate(10.0, -185.0))
        );
        assert!(check_coordinates(f64::NAN, 0.0).is_err());
        assert!(check_coordinates(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_coordinate(95.0, 10.0);
        assert_eq!(
            err.to_string(),
            "invalid coordinate (95°, 10°) (latitude must be between -90° and +90°, longitude between -180° and +180°)"
        );

        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );
    }
}
