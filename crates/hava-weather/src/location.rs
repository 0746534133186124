//! Device location to city name.
//!
//! `LocationResolver` runs permission, position and reverse geocoding in
//! sequence against a `LocationProvider`. Only one resolution may be in
//! flight per resolver; overlapping calls fail fast with `Busy`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hava_core::LocationConfig;
use tokio::time::timeout;

use crate::types::{Coordinates, LocationError, PlaceCandidate, PlaceName};

/// Platform capabilities the resolver needs.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask for foreground location permission. `Ok(false)` means denied.
    async fn request_permission(&self) -> Result<bool, LocationError>;

    /// Current device position.
    async fn current_coordinates(&self) -> Result<Coordinates, LocationError>;

    /// Place candidates for a position, best first. May be empty.
    async fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<PlaceCandidate>, LocationError>;
}

#[async_trait]
impl<P: LocationProvider + ?Sized> LocationProvider for Arc<P> {
    async fn request_permission(&self) -> Result<bool, LocationError> {
        (**self).request_permission().await
    }

    async fn current_coordinates(&self) -> Result<Coordinates, LocationError> {
        (**self).current_coordinates().await
    }

    async fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<PlaceCandidate>, LocationError> {
        (**self).reverse_geocode(coords).await
    }
}

/// Bounded waits for the hardware and network steps. The permission prompt
/// is not bounded; it waits on the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverTimeouts {
    pub position: Duration,
    pub geocode: Duration,
}

impl Default for ResolverTimeouts {
    fn default() -> Self {
        Self {
            position: Duration::from_secs(5),
            geocode: Duration::from_secs(10),
        }
    }
}

impl From<&LocationConfig> for ResolverTimeouts {
    fn from(config: &LocationConfig) -> Self {
        Self {
            position: Duration::from_secs(config.position_timeout_secs),
            geocode: Duration::from_secs(config.geocode_timeout_secs),
        }
    }
}

/// Resolves the device's current city.
#[derive(Debug)]
pub struct LocationResolver<P> {
    provider: P,
    timeouts: ResolverTimeouts,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the resolution finishes or its future is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P: LocationProvider> LocationResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_timeouts(provider, ResolverTimeouts::default())
    }

    pub fn with_timeouts(provider: P, timeouts: ResolverTimeouts) -> Self {
        Self {
            provider,
            timeouts,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn timeouts(&self) -> ResolverTimeouts {
        self.timeouts
    }

    /// True while a resolution is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<InFlight<'_>, LocationError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.in_flight))
            .map_err(|_| LocationError::Busy)
    }

    /// Resolve the device's current city.
    ///
    /// An empty or nameless geocoding result is not an error: it yields
    /// `PlaceName::unknown()`.
    ///
    /// # Errors
    /// `PermissionDenied` if the user refuses (no position or geocoding call
    /// is made), `PositionUnavailable` if no fix arrives in time,
    /// `Provider` for geocoder failures and timeouts, `Busy` if another
    /// resolution is running.
    pub async fn resolve_current_city(&self) -> Result<PlaceName, LocationError> {
        let _guard = self.begin().inspect_err(|_| {
            tracing::debug!("Location request rejected: already in flight");
        })?;

        if !self.provider.request_permission().await? {
            tracing::warn!("Location permission denied");
            return Err(LocationError::PermissionDenied);
        }

        let coords = match timeout(self.timeouts.position, self.provider.current_coordinates())
            .await
        {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    "Position not acquired within {:?}",
                    self.timeouts.position
                );
                return Err(LocationError::PositionUnavailable);
            }
        };
        tracing::info!("Got location: {}, {}", coords.latitude, coords.longitude);

        let candidates = match timeout(self.timeouts.geocode, self.provider.reverse_geocode(coords))
            .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(LocationError::provider(format!(
                    "reverse geocoding timed out after {}s",
                    self.timeouts.geocode.as_secs()
                )));
            }
        };

        let place = select_place(&candidates);
        if place.is_unknown() {
            tracing::info!(
                "No usable place among {} geocoding result(s)",
                candidates.len()
            );
        } else {
            tracing::info!("Reverse geocoded to: {}", place);
        }
        Ok(place)
    }
}

/// Locality of the first candidate, else its region. Later candidates are
/// never consulted; a blank first candidate yields `PlaceName::unknown()`.
pub fn select_place(candidates: &[PlaceCandidate]) -> PlaceName {
    candidates
        .first()
        .and_then(PlaceCandidate::best_name)
        .map(PlaceName::new)
        .unwrap_or_else(PlaceName::unknown)
}
