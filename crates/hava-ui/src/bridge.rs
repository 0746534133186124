//! Process-wide tokio runtime shared by the screen's background services.

use std::sync::OnceLock;

// Static tokio runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Initialize the tokio runtime (call once at application startup).
/// Later calls return the existing handle.
///
/// # Errors
/// Returns the I/O error if the runtime cannot be built.
pub fn init_runtime() -> std::io::Result<tokio::runtime::Handle> {
    if let Some(rt) = RUNTIME.get() {
        return Ok(rt.handle().clone());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("hava-tokio")
        .build()?;

    let handle = RUNTIME.get_or_init(|| runtime).handle().clone();
    tracing::debug!("Tokio runtime initialized");
    Ok(handle)
}

/// Handle to the shared runtime, if initialized.
pub fn get_runtime() -> Option<tokio::runtime::Handle> {
    RUNTIME.get().map(|r| r.handle().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_runtime().unwrap();
        init_runtime().unwrap();
        assert!(get_runtime().is_some());
    }
}
