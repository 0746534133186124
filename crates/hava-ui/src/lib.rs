//! Display layer for Hava: screen state, background location service and
//! a text renderer.

pub mod bridge;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;

pub use models::weather_model::{Notice, WeatherScreen};
pub use render::render;
pub use services::location_service::{LocateError, LocationServiceMessage};
