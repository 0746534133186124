//! Maps UI service errors to hava_core::AppError for consistent user-facing messages.

mod location;
