//! Mathematical utilities for the almanac approximation.
//!
//! The almanac formulas are stated in degrees, so the trig helpers here take and return
//! degrees and dispatch to `std` or `libm` depending on the enabled features.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Brings a value into `[0, period)` with at most one add or subtract.
///
/// Only valid for inputs within one period of the target range, which holds for every
/// quantity the almanac normalizes.
#[inline]
pub fn wrap_once(value: f64, period: f64) -> f64 {
    if value < 0.0 {
        value + period
    } else if value >= period {
        value - period
    } else {
        value
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arc tangent, in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Arc cosine, in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        let pi = core::f64::consts::PI;
        assert!((degrees_to_radians(180.0) - pi).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - pi / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(pi) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_wrap_once() {
        assert_eq!(wrap_once(0.0, 360.0), 0.0);
        assert_eq!(wrap_once(90.0, 360.0), 90.0);
        assert_eq!(wrap_once(360.0, 360.0), 0.0);
        assert_eq!(wrap_once(450.0, 360.0), 90.0);
        assert_eq!(wrap_once(-90.0, 360.0), 270.0);
        assert_eq!(wrap_once(-1.5, 24.0), 22.5);
        assert_eq!(wrap_once(25.0, 24.0), 1.0);

        // Single wrap only: values more than one period away stay out of range
        assert_eq!(wrap_once(800.0, 360.0), 440.0);
    }

    #[test]
    fn test_degree_trig() {
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(180.0) + 1.0).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((atan_deg(1.0) - 45.0).abs() < EPSILON);
        assert!((acos_deg(0.0) - 90.0).abs() < EPSILON);
        assert!((acos_deg(-1.0) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(floor(359.999 / 90.0), 3.0);
    }
}
