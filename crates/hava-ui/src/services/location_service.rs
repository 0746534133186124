//! Location backend: resolves the device's city off the UI thread.
//! Results are sent back via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use hava_weather::{LocationError, LocationProvider, LocationResolver, PlaceName};

use crate::bridge;

/// Error type for locate operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    Location(LocationError),
    NotInitialized,
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::Location(e) => write!(f, "Location error: {}", e),
            LocateError::NotInitialized => write!(f, "Location service not initialized"),
        }
    }
}

impl std::error::Error for LocateError {}

impl From<LocationError> for LocateError {
    fn from(e: LocationError) -> Self {
        LocateError::Location(e)
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum LocationServiceMessage {
    /// Result of resolving the current city
    LocateDone(Result<PlaceName, LocateError>),
}

/// Request the current city asynchronously.
/// Sends `LocateDone` on the channel when complete.
pub fn request_locate<P>(tx: &Sender<LocationServiceMessage>, resolver: Arc<LocationResolver<P>>)
where
    P: LocationProvider + 'static,
{
    let tx = tx.clone();
    let runtime = match bridge::get_runtime() {
        Some(r) => r,
        None => {
            let _ = tx.send(LocationServiceMessage::LocateDone(Err(
                LocateError::NotInitialized,
            )));
            return;
        }
    };

    runtime.spawn(async move {
        let result = resolver
            .resolve_current_city()
            .await
            .map_err(LocateError::from);
        if let Err(e) = &result {
            tracing::warn!("Failed to resolve current city: {}", e);
        }
        let _ = tx.send(LocationServiceMessage::LocateDone(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_error_display() {
        assert!(format!("{}", LocateError::Location(LocationError::Busy)).contains("Location"));
        assert!(format!("{}", LocateError::NotInitialized).contains("not initialized"));
    }

    #[test]
    fn location_error_converts() {
        assert_eq!(
            LocateError::from(LocationError::PermissionDenied),
            LocateError::Location(LocationError::PermissionDenied)
        );
    }
}
