//! The [`LatLonId`] identifier type.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::codec::{self, MAX_ID, MIN_ID};
use crate::coord::Coordinate;
use crate::error::{LatLonError, Result};

/// A validated identifier in `1..=65341`.
///
/// Identifiers are dense: `index()` maps them onto `0..MAX_ID`, so they can
/// address a plain slice of per-coordinate records directly. Zero is never a
/// valid identifier, which makes `Option<LatLonId>` the same size as `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct LatLonId(NonZeroU32);

impl LatLonId {
    /// The identifier of `(-90, -180)`.
    pub const MIN: LatLonId = LatLonId::from_valid(MIN_ID);

    /// The identifier of `(90, 180)`.
    pub const MAX: LatLonId = LatLonId::from_valid(MAX_ID);

    /// Wrap a raw identifier, checking its range.
    pub fn new(id: u32) -> Result<Self> {
        if codec::is_valid_id(id) {
            Ok(Self::from_valid(id))
        } else {
            Err(LatLonError::IdOutOfRange { id: id as u64 })
        }
    }

    /// The identifier stored at zero-based position `index`.
    ///
    /// ```
    /// use latlonid::LatLonId;
    ///
    /// assert_eq!(LatLonId::from_index(0), Ok(LatLonId::MIN));
    /// assert!(LatLonId::from_index(65_341).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        let id = (index as u64).saturating_add(MIN_ID as u64);
        if id > MAX_ID as u64 {
            return Err(LatLonError::IdOutOfRange { id });
        }
        Ok(Self::from_valid(id as u32))
    }

    /// Callers guarantee `MIN_ID <= id <= MAX_ID`.
    pub(crate) const fn from_valid(id: u32) -> Self {
        match NonZeroU32::new(id) {
            Some(id) => Self(id),
            None => panic!("identifier zero"),
        }
    }

    /// The raw identifier.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based position of this identifier, for slice indexing.
    pub fn index(self) -> usize {
        (self.get() - MIN_ID) as usize
    }

    /// The coordinate this identifier stands for.
    pub fn coordinate(self) -> Coordinate {
        Coordinate::from_id(self)
    }

    /// Every identifier in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = LatLonId> + ExactSizeIterator {
        (MIN_ID..MAX_ID + 1).map(Self::from_valid)
    }
}

impl fmt::Display for LatLonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LatLonId {
    type Err = LatLonError;

    fn from_str(s: &str) -> Result<Self> {
        let id: u32 = s.trim().parse().map_err(|_| LatLonError::Parse {
            input: s.to_string(),
        })?;
        Self::new(id)
    }
}

impl TryFrom<u32> for LatLonId {
    type Error = LatLonError;

    fn try_from(id: u32) -> Result<Self> {
        Self::new(id)
    }
}

impl From<LatLonId> for u32 {
    fn from(id: LatLonId) -> Self {
        id.get()
    }
}

impl From<Coordinate> for LatLonId {
    fn from(coord: Coordinate) -> Self {
        coord.id()
    }
}

impl From<LatLonId> for Coordinate {
    fn from(id: LatLonId) -> Self {
        Coordinate::from_id(id)
    }
}
