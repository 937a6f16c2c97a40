use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::address::errors::GeocodingError;
use crate::domain::address::models::Coordinates;
use crate::domain::address::models::SearchWord;
use crate::domain::address::ports::GeocodingPort;

/// Geocoding client for Nominatim-compatible search endpoints.
///
/// The whole request is bounded by the configured timeout so a slow
/// provider fails the resolution instead of hanging the caller.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

/// Single result entry from the provider's `/search` endpoint.
///
/// Nominatim serialises coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Provider base URL, e.g. `https://nominatim.openstreetmap.org`
    /// * `timeout` - Deadline applied to each resolution request
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("address-service/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl GeocodingPort for NominatimClient {
    async fn resolve(&self, search_word: &SearchWord) -> Result<Coordinates, GeocodingError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", search_word.as_str()),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::Unreachable(e.to_string())
                }
            })?;

        let response = response
            .error_for_status()
            .map_err(|e| GeocodingError::Unreachable(e.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        let place = places.into_iter().next().ok_or(GeocodingError::NoMatch)?;

        let lat = place
            .lat
            .parse::<f64>()
            .map_err(|e| GeocodingError::InvalidResponse(format!("bad latitude: {}", e)))?;
        let lng = place
            .lon
            .parse::<f64>()
            .map_err(|e| GeocodingError::InvalidResponse(format!("bad longitude: {}", e)))?;

        tracing::debug!(search_word = %search_word, lat, lng, "Search word resolved");

        Ok(Coordinates { lat, lng })
    }
}
