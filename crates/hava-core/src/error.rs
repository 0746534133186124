//! Centralized error types for the Hava application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging
//!
//! User-facing messages are Turkish; the screen is not localized.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Location error: {0}")]
    Location(#[from] LocationFailure),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Location(e) => e.user_message(),
            AppError::Config(e) => e.user_message().to_string(),
            AppError::Io(_) => "Dosya işlemi başarısız oldu. Lütfen tekrar deneyin.".to_string(),
            AppError::Other(_) => "Beklenmeyen bir hata oluştu. Lütfen tekrar deneyin.".to_string(),
        }
    }

    /// Dialog title to pair with `user_message()`.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Location(LocationFailure::PermissionDenied) => "İzin Gerekli",
            _ => "Hata",
        }
    }
}

/// Device location failures as seen by the application.
#[derive(Debug, Error)]
pub enum LocationFailure {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("Location provider error: {0}")]
    Provider(String),

    #[error("A location request is already running")]
    Busy,
}

impl LocationFailure {
    pub fn user_message(&self) -> String {
        match self {
            LocationFailure::PermissionDenied => "Konum izni verilmedi.".to_string(),
            LocationFailure::PositionUnavailable => {
                "Konum alınamadı: cihaz konumu şu anda kullanılamıyor.".to_string()
            }
            LocationFailure::Provider(msg) => format!("Konum alınamadı: {}", msg),
            LocationFailure::Busy => "Konum zaten alınıyor, lütfen bekleyin.".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Geçersiz yapılandırma. Ayarlarınızı kontrol edin.",
        }
    }
}
