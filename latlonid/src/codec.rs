//! The coordinate codec.
//!
//! Whole-degree coordinates are laid out row-major on a grid of
//! [`LAT_SPAN`] latitude rows by [`LON_SPAN`] longitude columns, starting at
//! the south-west corner `(-90, -180)`. The identifier of a coordinate is its
//! position in that layout plus one:
//!
//! ```text
//! id  = (lat + 90) * 361 + (lon + 180) + 1
//! lat = (id - 1) / 361 - 90
//! lon = (id - 1) % 361 - 180
//! ```
//!
//! Both poles and both sides of the antimeridian are distinct cells, so the
//! mapping is a bijection between valid coordinates and `1..=MAX_ID`.

use crate::coord::Coordinate;
use crate::error::{LatLonError, Result};

/// Southernmost latitude.
pub const LAT_MIN: i32 = -90;
/// Northernmost latitude.
pub const LAT_MAX: i32 = 90;
/// Westernmost longitude.
pub const LON_MIN: i32 = -180;
/// Easternmost longitude.
pub const LON_MAX: i32 = 180;

/// Number of distinct latitudes (grid rows).
pub const LAT_SPAN: u32 = (LAT_MAX - LAT_MIN + 1) as u32; // 181

/// Number of distinct longitudes (grid columns, and the row stride).
pub const LON_SPAN: u32 = (LON_MAX - LON_MIN + 1) as u32; // 361

/// Smallest identifier, assigned to `(-90, -180)`.
pub const MIN_ID: u32 = 1;

/// Largest identifier, assigned to `(90, 180)`.
pub const MAX_ID: u32 = LAT_SPAN * LON_SPAN; // 65,341

/// Encode a coordinate as its identifier.
///
/// # Panics
///
/// Panics if `lat` is outside `-90..=90` or `lon` is outside `-180..=180`.
/// Out-of-range input is a bug in the caller; use [`try_encode`] when the
/// values come from somewhere untrusted.
///
/// # Examples
///
/// ```
/// use latlonid::{encode, MAX_ID};
///
/// assert_eq!(encode(-90, -180), 1);
/// assert_eq!(encode(90, 180), MAX_ID);
/// assert_eq!(encode(35, 138), 45_444);
/// ```
#[track_caller]
pub fn encode(lat: i32, lon: i32) -> u32 {
    match try_encode(lat, lon) {
        Ok(id) => id,
        Err(err) => contract_violation(err),
    }
}

/// Decode an identifier back into `(lat, lon)`.
///
/// Every call returns its own pair; nothing is shared between calls.
///
/// # Panics
///
/// Panics if `id` is outside `1..=MAX_ID`. Use [`try_decode`] for untrusted
/// input.
///
/// # Examples
///
/// ```
/// use latlonid::{decode, MAX_ID};
///
/// assert_eq!(decode(1), (-90, -180));
/// assert_eq!(decode(MAX_ID), (90, 180));
/// assert_eq!(decode(45_444), (35, 138));
/// ```
#[track_caller]
pub fn decode(id: u32) -> (i32, i32) {
    match try_decode(id) {
        Ok(pair) => pair,
        Err(err) => contract_violation(err),
    }
}

/// Decode an identifier into a caller-supplied [`Coordinate`].
///
/// Lets hot loops reuse one output location instead of building a new value
/// per call.
///
/// # Panics
///
/// Panics if `id` is outside `1..=MAX_ID`. `out` is left untouched.
///
/// ```
/// use latlonid::{decode_into, Coordinate};
///
/// let mut out = Coordinate::default();
/// decode_into(45_444, &mut out);
/// assert_eq!((out.lat(), out.lon()), (35, 138));
/// ```
#[track_caller]
pub fn decode_into(id: u32, out: &mut Coordinate) {
    match try_decode(id) {
        Ok((lat, lon)) => {
            out.lat = lat;
            out.lon = lon;
        }
        Err(err) => contract_violation(err),
    }
}

/// Encode a coordinate, reporting out-of-range input as an error.
pub fn try_encode(lat: i32, lon: i32) -> Result<u32> {
    check_lat(lat)?;
    check_lon(lon)?;
    Ok(flatten(lat, lon))
}

/// Decode an identifier, reporting out-of-range input as an error.
pub fn try_decode(id: u32) -> Result<(i32, i32)> {
    if !is_valid_id(id) {
        return Err(LatLonError::IdOutOfRange { id: id as u64 });
    }
    Ok(split(id))
}

/// Returns `true` if `(lat, lon)` is a valid coordinate.
pub fn is_valid(lat: i32, lon: i32) -> bool {
    (LAT_MIN..=LAT_MAX).contains(&lat) && (LON_MIN..=LON_MAX).contains(&lon)
}

/// Returns `true` if `id` names a coordinate.
pub fn is_valid_id(id: u32) -> bool {
    (MIN_ID..=MAX_ID).contains(&id)
}

/// Every valid coordinate, in identifier order.
///
/// ```
/// use latlonid::{coordinates, MAX_ID};
///
/// let mut all = coordinates();
/// assert_eq!(all.len(), MAX_ID as usize);
/// assert_eq!(all.next().map(|c| (c.lat(), c.lon())), Some((-90, -180)));
/// assert_eq!(all.next_back().map(|c| (c.lat(), c.lon())), Some((90, 180)));
/// ```
pub fn coordinates() -> impl DoubleEndedIterator<Item = Coordinate> + ExactSizeIterator {
    (MIN_ID..MAX_ID + 1).map(|id| {
        let (lat, lon) = split(id);
        Coordinate { lat, lon }
    })
}

pub(crate) fn check_lat(lat: i32) -> Result<()> {
    if (LAT_MIN..=LAT_MAX).contains(&lat) {
        Ok(())
    } else {
        Err(LatLonError::LatitudeOutOfRange { lat })
    }
}

pub(crate) fn check_lon(lon: i32) -> Result<()> {
    if (LON_MIN..=LON_MAX).contains(&lon) {
        Ok(())
    } else {
        Err(LatLonError::LongitudeOutOfRange { lon })
    }
}

/// Identifier of an already validated coordinate.
pub(crate) fn flatten(lat: i32, lon: i32) -> u32 {
    let row = (lat - LAT_MIN) as u32;
    let col = (lon - LON_MIN) as u32;
    row * LON_SPAN + col + MIN_ID
}

/// Coordinate of an already validated identifier.
pub(crate) fn split(id: u32) -> (i32, i32) {
    let offset = id - MIN_ID;
    let lat = (offset / LON_SPAN) as i32 + LAT_MIN;
    let lon = (offset % LON_SPAN) as i32 + LON_MIN;
    (lat, lon)
}

#[cold]
#[track_caller]
fn contract_violation(err: LatLonError) -> ! {
    tracing::error!(error = %err, "latlonid contract violation");
    panic!("{}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_constants() {
        assert_eq!(LAT_SPAN, 181);
        assert_eq!(LON_SPAN, 361);
        assert_eq!(MAX_ID, 361 * 181);
        assert_eq!(MAX_ID, 65_341);
    }

    #[test]
    fn test_boundary_cases() {
        assert_eq!(encode(-90, -180), 1);
        assert_eq!(encode(90, 180), 361 * 181);
        assert_eq!(decode(1), (-90, -180));
        assert_eq!(decode(361 * 181), (90, 180));
    }

    #[test]
    fn test_row_edges() {
        // The eastern edge of one row and the western edge of the next are
        // neighbours in id space, not the same id.
        assert_eq!(encode(-90, 180), 361);
        assert_eq!(encode(-89, -180), 362);
        assert_eq!(decode(361), (-90, 180));
        assert_eq!(decode(362), (-89, -180));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode(0, 0), 90 * 361 + 180 + 1);
        assert_eq!(decode(90 * 361 + 180 + 1), (0, 0));
        assert_eq!(encode(35, 138), 45_444);
        assert_eq!(encode(-13, -78), 77 * 361 + 102 + 1);
    }

    #[test]
    fn test_roundtrip_all_coordinates() {
        for lat in LAT_MIN..=LAT_MAX {
            for lon in LON_MIN..=LON_MAX {
                assert_eq!(decode(encode(lat, lon)), (lat, lon));
            }
        }
    }

    #[test]
    fn test_inverse_roundtrip_all_ids() {
        for id in MIN_ID..=MAX_ID {
            let (lat, lon) = decode(id);
            assert_eq!(encode(lat, lon), id);
        }
    }

    #[test]
    fn test_encode_covers_id_range_exactly_once() {
        let mut seen = vec![false; MAX_ID as usize + 1];
        for lat in LAT_MIN..=LAT_MAX {
            for lon in LON_MIN..=LON_MAX {
                let id = encode(lat, lon);
                assert!(is_valid_id(id), "id {} out of range", id);
                assert!(!seen[id as usize], "duplicate id {}", id);
                seen[id as usize] = true;
            }
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "Latitude out of range: 91")]
    fn test_encode_rejects_latitude() {
        encode(91, 0);
    }

    #[test]
    #[should_panic(expected = "Longitude out of range: 181")]
    fn test_encode_rejects_longitude() {
        encode(0, 181);
    }

    #[test]
    #[should_panic(expected = "Identifier out of range: 0")]
    fn test_decode_rejects_zero() {
        decode(0);
    }

    #[test]
    #[should_panic(expected = "Identifier out of range: 65342")]
    fn test_decode_rejects_past_end() {
        decode(361 * 181 + 1);
    }

    #[test]
    fn test_try_variants() {
        assert_eq!(try_encode(90, 180), Ok(MAX_ID));
        assert_eq!(
            try_encode(-91, 0),
            Err(LatLonError::LatitudeOutOfRange { lat: -91 })
        );
        assert_eq!(
            try_encode(0, -181),
            Err(LatLonError::LongitudeOutOfRange { lon: -181 })
        );
        // Range check, not abs(): i32::MIN must not overflow.
        assert_eq!(
            try_encode(i32::MIN, 0),
            Err(LatLonError::LatitudeOutOfRange { lat: i32::MIN })
        );
        assert_eq!(try_decode(0), Err(LatLonError::IdOutOfRange { id: 0 }));
        assert_eq!(
            try_decode(u32::MAX),
            Err(LatLonError::IdOutOfRange {
                id: u32::MAX as u64
            })
        );
        assert_eq!(try_decode(MAX_ID), Ok((90, 180)));
    }

    #[test]
    fn test_decode_into_reuses_output() {
        let mut out = Coordinate::default();
        decode_into(1, &mut out);
        assert_eq!((out.lat(), out.lon()), (-90, -180));
        decode_into(MAX_ID, &mut out);
        assert_eq!((out.lat(), out.lon()), (90, 180));
    }

    #[test]
    fn test_decode_into_leaves_output_on_panic() {
        let mut out = Coordinate::default();
        decode_into(45_444, &mut out);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            decode_into(0, &mut out);
        }));
        assert!(result.is_err());
        assert_eq!((out.lat(), out.lon()), (35, 138));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(90, -180));
        assert!(is_valid(-90, 180));
        assert!(!is_valid(90, 181));
        assert!(!is_valid(-91, 0));
        assert!(!is_valid_id(0));
        assert!(is_valid_id(1));
        assert!(is_valid_id(MAX_ID));
        assert!(!is_valid_id(MAX_ID + 1));
    }

    #[test]
    fn test_coordinates_in_id_order() {
        let all: Vec<Coordinate> = coordinates().collect();
        assert_eq!(all.len(), MAX_ID as usize);
        for (i, coord) in all.iter().enumerate() {
            assert_eq!(encode(coord.lat(), coord.lon()), i as u32 + 1);
        }
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_decode_is_independent_per_call() {
        let first = decode(1);
        let second = decode(MAX_ID);
        assert_eq!(first, (-90, -180));
        assert_eq!(second, (90, 180));
    }

    #[test]
    fn test_parallel_decode() {
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                std::thread::spawn(move || {
                    (MIN_ID..=MAX_ID)
                        .filter(|id| id % 4 == t)
                        .all(|id| encode(decode(id).0, decode(id).1) == id)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    proptest! {
        #[test]
        fn prop_ordering_matches_ids(
            a in (LAT_MIN..=LAT_MAX, LON_MIN..=LON_MAX),
            b in (LAT_MIN..=LAT_MAX, LON_MIN..=LON_MAX),
        ) {
            prop_assert_eq!(a.cmp(&b), encode(a.0, a.1).cmp(&encode(b.0, b.1)));
        }

        #[test]
        fn prop_out_of_range_is_rejected(lat in any::<i32>(), lon in any::<i32>()) {
            let result = try_encode(lat, lon);
            prop_assert_eq!(result.is_ok(), is_valid(lat, lon));
        }
    }
}
