use crate::services::location_service::LocateError;
use hava_core::{AppError, LocationFailure};
use hava_weather::LocationError;

impl From<LocateError> for AppError {
    fn from(e: LocateError) -> Self {
        match e {
            LocateError::Location(LocationError::PermissionDenied) => {
                AppError::Location(LocationFailure::PermissionDenied)
            }
            LocateError::Location(LocationError::PositionUnavailable) => {
                AppError::Location(LocationFailure::PositionUnavailable)
            }
            LocateError::Location(LocationError::Provider(msg)) => {
                AppError::Location(LocationFailure::Provider(msg))
            }
            LocateError::Location(LocationError::Busy) => {
                AppError::Location(LocationFailure::Busy)
            }
            LocateError::NotInitialized => {
                AppError::Other(anyhow::anyhow!("location service not initialized"))
            }
        }
    }
}
