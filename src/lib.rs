//! # Solar Events
//!
//! Sunrise, sunset and twilight times for any place and date, with a day/night check.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Times come from the almanac sunrise/sunset approximation (Almanac for Computers, 1990):
//! a closed-form calculation with a typical error of about one minute, cheap enough to run
//! for every location in a list on every clock tick.
//!
//! For each date the calculator produces eight instants: the rising and setting crossing
//! of four elevation thresholds.
//!
//! | Level | Zenith angle | Meaning |
//! |-------|--------------|---------|
//! | Official | 90.83° | upper limb on the horizon, with standard refraction |
//! | Civil | 96° | sun 6° below the horizon |
//! | Nautical | 102° | sun 12° below the horizon |
//! | Astronomical | 108° | sun 18° below the horizon |
//!
//! Near the poles a threshold may not be crossed at all on a given day. That is reported
//! as a missing (`None`) instant, never as an error.
//!
//! ## Features
//!
//! - Pure and stateless: results are plain `Copy` values, safe to share across threads
//! - `no_std` support with `libm` math
//! - Optional observability hooks, with a ready-made bridge to the `log` crate
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `log` (default): Enable [`LogObserver`], which forwards calculation reports to `log`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + log
//! solar-events = "0.1"
//!
//! # Minimal std, no logging bridge
//! solar-events = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # no_std
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and sunset
//! ```rust
//! use solar_events::SolarCalculator;
//! use chrono::{DateTime, FixedOffset};
//!
//! // San Francisco, June solstice
//! let date = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = SolarCalculator::new(date, 37.7749, -122.4194).unwrap().calculate();
//!
//! if let (Some(sunrise), Some(sunset)) = (result.sunrise(), result.sunset()) {
//!     println!("Sunrise: {}", sunrise.with_timezone(date.offset()));
//!     println!("Sunset: {}", sunset.with_timezone(date.offset()));
//! }
//! println!("Civil dawn: {:?}", result.civil_sunrise());
//! ```
//!
//! ### Numeric API (no dates)
//! ```rust
//! use solar_events::{almanac, EventKind, ZenithLevel};
//!
//! let sunset = almanac::event_time_utc(
//!     2023, 6, 21, 48.21, 16.37, EventKind::Sunset, ZenithLevel::Civil,
//! ).unwrap();
//!
//! if let Some(time) = sunset {
//!     let (day_offset, hours) = time.day_and_hours();
//!     println!("{hours:.2} h UTC, day offset {day_offset}");
//! }
//! ```
//!
//! ## Dates and days
//!
//! The calculation day is the UTC calendar date of the input instant. An event belonging
//! to that day can fall on the adjacent UTC date: a sunrise east of Greenwich may happen
//! the previous evening in UTC, and a sunset west of Greenwich the following morning.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled for math functions");

// Public API exports
pub use crate::calculator::{CalculationInput, SolarCalculator};
pub use crate::error::{Error, Result};
#[cfg(feature = "log")]
pub use crate::observer::LogObserver;
pub use crate::observer::{Annotation, SolarObserver};
pub use crate::types::{Coordinate, EventKind, HoursUtc, SolarEvent, SolarResult, ZenithLevel};

// Algorithm modules
pub mod almanac;
pub mod calculator;

// Core modules
pub mod error;
pub mod observer;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
