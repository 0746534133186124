//! Weather domain for Hava
//!
//! Condition-to-icon lookup, device location to city resolution and the
//! built-in sample weather bundle.

pub mod geocode;
pub mod icons;
pub mod location;
pub mod mock;
pub mod position;
pub mod provider;
pub mod types;

pub use geocode::NominatimGeocoder;
pub use icons::{icon_for, ConditionIconTable, IconKey, CONDITION_ICONS, DEFAULT_ICON};
pub use location::{select_place, LocationProvider, LocationResolver, ResolverTimeouts};
pub use mock::mock_weather;
pub use position::ConfiguredPosition;
pub use provider::{device_resolver, DeviceLocationProvider};
pub use types::*;
