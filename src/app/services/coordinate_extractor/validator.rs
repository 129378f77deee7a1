//! Coordinate plausibility validation.
//!
//! A pure predicate separating plausible geographic coordinates from the
//! degenerate values that inconsistent sensor headers produce: defaulted
//! zeros, near-zero placeholders, and copy-paste duplicates.

use crate::constants::MIN_COORDINATE_MAGNITUDE;

/// Check whether a (latitude, longitude) pair is a plausible station location
///
/// A pair is accepted only if all of the following hold:
///
/// 1. `-90 <= lat <= 90` and `-180 <= lon <= 180`
/// 2. not both exactly zero (the null-island default)
/// 3. neither magnitude below 0.001 (near-zero placeholders)
/// 4. `lat != lon` (identical values are a copy-paste signature)
///
/// Integer-valued pairs receive no extra scrutiny; some stations genuinely
/// sit on whole-degree coordinates.
pub fn is_plausible_pair(lat: f64, lon: f64) -> bool {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return false;
    }

    // Null island: a parsing default, not a location
    if lat == 0.0 && lon == 0.0 {
        return false;
    }

    if lat.abs() < MIN_COORDINATE_MAGNITUDE || lon.abs() < MIN_COORDINATE_MAGNITUDE {
        return false;
    }

    if lat == lon {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_coordinates() {
        assert!(is_plausible_pair(40.0, -70.0));
        assert!(is_plausible_pair(-33.86, 151.21));
        assert!(is_plausible_pair(45.234, -93.456));
    }

    #[test]
    fn accepts_integer_valued_coordinates() {
        assert!(is_plausible_pair(12.0, 34.0));
        assert!(is_plausible_pair(-45.0, 170.0));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(!is_plausible_pair(91.0, 10.0));
        assert!(!is_plausible_pair(-90.5, 10.0));
        assert!(!is_plausible_pair(10.0, 180.5));
        assert!(!is_plausible_pair(10.0, -181.0));
    }

    #[test]
    fn rejects_null_island() {
        assert!(!is_plausible_pair(0.0, 0.0));
    }

    #[test]
    fn rejects_near_zero_placeholders() {
        assert!(!is_plausible_pair(0.0005, 70.0));
        assert!(!is_plausible_pair(70.0, -0.0009));
        assert!(!is_plausible_pair(0.0, 70.0));
    }

    #[test]
    fn rejects_identical_lat_lon() {
        assert!(!is_plausible_pair(45.0, 45.0));
        assert!(!is_plausible_pair(-12.5, -12.5));
    }

    #[test]
    fn accepts_values_at_range_limits() {
        assert!(is_plausible_pair(90.0, -180.0));
        assert!(is_plausible_pair(-90.0, 180.0));
    }
}
