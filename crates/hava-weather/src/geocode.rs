//! Reverse geocoding: convert coordinates to place candidates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::types::{Coordinates, LocationError, PlaceCandidate};

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
    /// Set instead of `address` when nothing is found ("Unable to geocode")
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    province: Option<String>,
    state: Option<String>,
    county: Option<String>,
}

impl From<NominatimAddress> for PlaceCandidate {
    fn from(addr: NominatimAddress) -> Self {
        // Prefer city > town > village > municipality for the locality
        let locality = addr
            .city
            .or(addr.town)
            .or(addr.village)
            .or(addr.municipality);
        let region = addr.province.or(addr.state).or(addr.county);
        PlaceCandidate { locality, region }
    }
}

/// HTTP reverse geocoder against a Nominatim-compatible `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    /// # Errors
    /// `Provider` if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: &str,
        request_timeout: Duration,
    ) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                tracing::warn!("Failed to create geocoding client: {}", e);
                LocationError::provider(format!("geocoding client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reverse geocode a position. Nominatim returns at most one address, so
    /// the result has zero or one candidate.
    ///
    /// # Errors
    /// `Provider` on transport failure, non-success status or an
    /// unparseable body.
    pub async fn reverse(&self, coords: Coordinates) -> Result<Vec<PlaceCandidate>, LocationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
                ("zoom", "10".to_string()),
                ("accept-language", "tr".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Reverse geocode request failed: {}", e);
                if e.is_timeout() {
                    LocationError::provider("reverse geocoding timed out")
                } else {
                    LocationError::provider(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Reverse geocode returned status {}", status);
            return Err(LocationError::provider(format!(
                "geocoder returned status {}",
                status.as_u16()
            )));
        }

        let body: NominatimResponse = response.json().await.map_err(|e| {
            tracing::debug!("Reverse geocode parse error: {}", e);
            LocationError::provider(format!("invalid geocoder response: {e}"))
        })?;

        if let Some(reason) = body.error {
            tracing::debug!("Geocoder found nothing: {}", reason);
        }

        Ok(body.address.map(PlaceCandidate::from).into_iter().collect())
    }
}
