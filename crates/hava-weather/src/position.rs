//! Device position source for desktop builds.
//!
//! There is no OS permission prompt or positioning hardware on the desktop,
//! so both answers come from the `[location]` config section.

use hava_core::LocationConfig;

use crate::types::{Coordinates, LocationError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguredPosition {
    permission_granted: bool,
    coordinates: Option<Coordinates>,
}

impl ConfiguredPosition {
    pub fn new(permission_granted: bool, coordinates: Option<Coordinates>) -> Self {
        Self {
            permission_granted,
            coordinates,
        }
    }

    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    /// # Errors
    /// `PositionUnavailable` when no position is configured.
    pub fn coordinates(&self) -> Result<Coordinates, LocationError> {
        self.coordinates.ok_or(LocationError::PositionUnavailable)
    }
}

impl From<&LocationConfig> for ConfiguredPosition {
    fn from(config: &LocationConfig) -> Self {
        let coordinates = match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };
        Self::new(config.permission_granted, coordinates)
    }
}
