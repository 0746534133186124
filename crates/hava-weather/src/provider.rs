//! Concrete `LocationProvider`: a position source plus a reverse geocoder.

use std::time::Duration;

use async_trait::async_trait;
use hava_core::LocationConfig;

use crate::geocode::NominatimGeocoder;
use crate::location::{LocationProvider, LocationResolver, ResolverTimeouts};
use crate::position::ConfiguredPosition;
use crate::types::{Coordinates, LocationError, PlaceCandidate};

#[derive(Debug, Clone)]
pub struct DeviceLocationProvider {
    position: ConfiguredPosition,
    geocoder: NominatimGeocoder,
}

impl DeviceLocationProvider {
    pub fn new(position: ConfiguredPosition, geocoder: NominatimGeocoder) -> Self {
        Self { position, geocoder }
    }

    /// # Errors
    /// `Provider` if the geocoder HTTP client cannot be built.
    pub fn from_config(config: &LocationConfig) -> Result<Self, LocationError> {
        let geocoder = NominatimGeocoder::new(
            config.geocoder_url.clone(),
            &config.user_agent,
            Duration::from_secs(config.geocode_timeout_secs),
        )?;
        Ok(Self::new(ConfiguredPosition::from(config), geocoder))
    }
}

#[async_trait]
impl LocationProvider for DeviceLocationProvider {
    async fn request_permission(&self) -> Result<bool, LocationError> {
        Ok(self.position.permission_granted())
    }

    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        self.position.coordinates()
    }

    async fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<PlaceCandidate>, LocationError> {
        self.geocoder.reverse(coords).await
    }
}

/// Resolver wired to the device provider with timeouts from config.
///
/// # Errors
/// `Provider` if the geocoder HTTP client cannot be built.
pub fn device_resolver(
    config: &LocationConfig,
) -> Result<LocationResolver<DeviceLocationProvider>, LocationError> {
    let provider = DeviceLocationProvider::from_config(config)?;
    Ok(LocationResolver::with_timeouts(
        provider,
        ResolverTimeouts::from(config),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_city(city: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": { "city": city, "province": "İzmir" }
            })))
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer) -> LocationConfig {
        LocationConfig {
            latitude: Some(38.4237),
            longitude: Some(27.1428),
            geocoder_url: format!("{}/reverse", server.uri()),
            ..LocationConfig::default()
        }
    }

    #[tokio::test]
    async fn test_device_resolver_end_to_end() {
        let server = server_with_city("Konak").await;
        let resolver = device_resolver(&config_for(&server)).unwrap();

        let place = resolver.resolve_current_city().await.unwrap();
        assert_eq!(place.as_str(), "Konak");
    }

    #[tokio::test]
    async fn test_denied_permission_never_hits_geocoder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = LocationConfig {
            permission_granted: false,
            ..config_for(&server)
        };
        let err = device_resolver(&config)
            .unwrap()
            .resolve_current_city()
            .await
            .unwrap_err();

        assert_eq!(err, LocationError::PermissionDenied);
    }

    #[tokio::test]
    async fn test_no_configured_position() {
        let server = server_with_city("Konak").await;
        let config = LocationConfig {
            latitude: None,
            ..config_for(&server)
        };
        let err = device_resolver(&config)
            .unwrap()
            .resolve_current_city()
            .await
            .unwrap_err();

        assert_eq!(err, LocationError::PositionUnavailable);
    }
}
