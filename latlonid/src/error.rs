//! Error types for the latlonid library.

use thiserror::Error;

/// Errors that can occur when building coordinates or identifiers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatLonError {
    /// Latitude is outside -90..=90.
    #[error("Latitude out of range: {lat} (valid: -90 to 90)")]
    LatitudeOutOfRange { lat: i32 },

    /// Longitude is outside -180..=180.
    #[error("Longitude out of range: {lon} (valid: -180 to 180)")]
    LongitudeOutOfRange { lon: i32 },

    /// Identifier is outside 1..=65341.
    #[error("Identifier out of range: {id} (valid: 1 to 65341)")]
    IdOutOfRange { id: u64 },

    /// Decimal degrees are not finite or fall outside the globe.
    #[error("Coordinates out of bounds: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    InvalidDegrees { lat: f64, lon: f64 },

    /// Text is neither a cell name (e.g. `N35E138`) nor a decimal identifier.
    #[error("Cannot parse '{input}'")]
    Parse { input: String },
}

/// Result type alias using [`LatLonError`].
pub type Result<T> = std::result::Result<T, LatLonError>;
