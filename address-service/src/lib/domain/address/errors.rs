use thiserror::Error;

/// Error for AddressName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressNameError {
    #[error("Address name must not be empty")]
    Empty,
}

/// Error for SearchWord validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchWordError {
    #[error("Search word must not be empty")]
    Empty,
}

/// Error for geocoding resolution failures.
///
/// Kept distinct from generic failures so the boundary can tell the caller
/// "place not found" instead of a generic error. Not retried inside the
/// address service.
#[derive(Debug, Clone, Error)]
pub enum GeocodingError {
    #[error("No location found for the given search word")]
    NoMatch,

    #[error("Geocoding request timed out")]
    Timeout,

    #[error("Geocoding provider unreachable: {0}")]
    Unreachable(String),

    #[error("Geocoding provider returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Top-level error for all address operations
#[derive(Debug, Clone, Error)]
pub enum AddressError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid address name: {0}")]
    InvalidName(#[from] AddressNameError),

    #[error("Invalid search word: {0}")]
    InvalidSearchWord(#[from] SearchWordError),

    // Resolution failures surface as their own kind
    #[error("Could not resolve place: {0}")]
    Resolution(#[from] GeocodingError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AddressError {
    fn from(err: anyhow::Error) -> Self {
        AddressError::Unknown(err.to_string())
    }
}
