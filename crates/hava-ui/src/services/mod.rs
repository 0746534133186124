pub mod location_service;

pub use location_service::{request_locate, LocateError, LocationServiceMessage};
