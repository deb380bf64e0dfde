//! Whole-degree coordinates and their cell names.
//!
//! A [`Coordinate`] names the 1° × 1° cell whose **south-west corner** sits at
//! `(lat, lon)`. Its text form follows the SRTM tile convention:
//! `{N|S}{lat:02}{E|W}{lon:03}`, e.g. `N35E138` or `S13W078`.

use std::fmt;
use std::str::FromStr;

use crate::codec::{self, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN};
use crate::error::{LatLonError, Result};
use crate::id::LatLonId;

/// An integer latitude/longitude pair within `-90..=90` and `-180..=180`.
///
/// Values can only be built through validating constructors, so every
/// `Coordinate` has an identifier. Ordering is latitude first, then
/// longitude, which is also identifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    pub(crate) lat: i32,
    pub(crate) lon: i32,
}

impl Coordinate {
    /// Build a coordinate from whole degrees.
    ///
    /// ```
    /// use latlonid::{Coordinate, LatLonError};
    ///
    /// assert!(Coordinate::new(35, 138).is_ok());
    /// assert_eq!(
    ///     Coordinate::new(91, 0),
    ///     Err(LatLonError::LatitudeOutOfRange { lat: 91 })
    /// );
    /// ```
    pub fn new(lat: i32, lon: i32) -> Result<Self> {
        codec::check_lat(lat)?;
        codec::check_lon(lon)?;
        Ok(Self { lat, lon })
    }

    /// The cell containing a point given in decimal degrees.
    ///
    /// Both values are floored, so negative fractions move south/west:
    /// `(-12.3, -77.1)` lies in the cell `(-13, -78)`.
    ///
    /// # Errors
    ///
    /// [`LatLonError::InvalidDegrees`] if either value is NaN, infinite, or
    /// outside ±90° / ±180°.
    ///
    /// ```
    /// use latlonid::Coordinate;
    ///
    /// let cell = Coordinate::from_degrees(-12.3, -77.1).unwrap();
    /// assert_eq!(cell.to_string(), "S13W078");
    /// ```
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self> {
        let lat_ok = (LAT_MIN as f64..=LAT_MAX as f64).contains(&lat);
        let lon_ok = (LON_MIN as f64..=LON_MAX as f64).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(LatLonError::InvalidDegrees { lat, lon });
        }

        Ok(Self {
            lat: lat.floor() as i32,
            lon: lon.floor() as i32,
        })
    }

    /// The coordinate an identifier stands for.
    pub fn from_id(id: LatLonId) -> Self {
        let (lat, lon) = codec::split(id.get());
        Self { lat, lon }
    }

    /// Latitude in whole degrees.
    pub fn lat(&self) -> i32 {
        self.lat
    }

    /// Longitude in whole degrees.
    pub fn lon(&self) -> i32 {
        self.lon
    }

    /// The identifier of this coordinate.
    pub fn id(&self) -> LatLonId {
        LatLonId::from_valid(codec::flatten(self.lat, self.lon))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_prefix = if self.lat >= 0 { 'N' } else { 'S' };
        let lon_prefix = if self.lon >= 0 { 'E' } else { 'W' };

        write!(
            f,
            "{}{:02}{}{:03}",
            lat_prefix,
            self.lat.abs(),
            lon_prefix,
            self.lon.abs()
        )
    }
}

impl FromStr for Coordinate {
    type Err = LatLonError;

    /// Parse a cell name such as `N35E138`.
    ///
    /// A leading directory and a trailing `.hgt` are ignored. Hemisphere
    /// letters and the extension are case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || LatLonError::Parse {
            input: s.to_string(),
        };

        // Extract just the name if a path is given
        let name = s.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(s);
        let name = strip_hgt_suffix(name);

        let bytes = name.as_bytes();
        if bytes.len() != 7 || !name.is_ascii() {
            return Err(parse_error());
        }

        let lat_sign = match bytes[0] {
            b'N' | b'n' => 1,
            b'S' | b's' => -1,
            _ => return Err(parse_error()),
        };
        let lon_sign = match bytes[3] {
            b'E' | b'e' => 1,
            b'W' | b'w' => -1,
            _ => return Err(parse_error()),
        };

        let lat = parse_digits(&name[1..3]).ok_or_else(parse_error)?;
        let lon = parse_digits(&name[4..7]).ok_or_else(parse_error)?;

        Self::new(lat * lat_sign, lon * lon_sign)
    }
}

fn strip_hgt_suffix(name: &str) -> &str {
    match name.len().checked_sub(4) {
        Some(at)
            if name
                .get(at..)
                .map_or(false, |ext| ext.eq_ignore_ascii_case(".hgt")) =>
        {
            &name[..at]
        }
        _ => name,
    }
}

fn parse_digits(digits: &str) -> Option<i32> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = LatLonError;

    fn try_from((lat, lon): (i32, i32)) -> Result<Self> {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

/// Unvalidated wire form, checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    lat: i32,
    lon: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = LatLonError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.lat, raw.lon)
    }
}
