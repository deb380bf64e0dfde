//! # latlonid - Dense identifiers for latitude/longitude cells
//!
//! Maps every whole-degree coordinate `(lat, lon)` with `-90 ≤ lat ≤ 90` and
//! `-180 ≤ lon ≤ 180` to a unique integer in `1..=65341`, and back.
//!
//! ## Features
//!
//! - **Bijective**: every coordinate has exactly one identifier and every
//!   identifier in range has exactly one coordinate, poles and antimeridian
//!   included
//! - **Dense**: identifiers index a flat array directly (see [`CoordTable`])
//! - **Reentrant**: no shared state; decoding returns an owned value, or
//!   writes into a location the caller supplies
//! - **Fail fast**: out-of-range input to [`encode`]/[`decode`] panics instead
//!   of producing a wrong identifier; the `try_*` variants return errors
//!
//! ## Quick Start
//!
//! ```
//! use latlonid::{decode, encode, Coordinate};
//!
//! let id = encode(35, 138);
//! assert_eq!(decode(id), (35, 138));
//!
//! // Or work with validated types
//! let cell = Coordinate::from_degrees(35.3606, 138.7274)?;
//! assert_eq!(cell.to_string(), "N35E138");
//! assert_eq!(cell.id().get(), id);
//! # Ok::<(), latlonid::LatLonError>(())
//! ```
//!
//! ## Layout
//!
//! Identifiers are assigned row-major from the south-west corner: 181
//! latitude rows of 361 longitudes each.
//!
//! - `(-90, -180)` → `1`
//! - `(-90, 180)` → `361`
//! - `(-89, -180)` → `362`
//! - `(90, 180)` → `65341`
//!
//! ## Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Coordinate`] and [`LatLonId`],
//!   validating on the way in

pub mod codec;
pub mod coord;
pub mod error;
pub mod id;
pub mod table;

// Re-export main types at crate root for convenience
pub use codec::{
    coordinates, decode, decode_into, encode, is_valid, is_valid_id, try_decode, try_encode,
    LAT_MAX, LAT_MIN, LAT_SPAN, LON_MAX, LON_MIN, LON_SPAN, MAX_ID, MIN_ID,
};
pub use coord::Coordinate;
pub use error::{LatLonError, Result};
pub use id::LatLonId;
pub use table::CoordTable;
