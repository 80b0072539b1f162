//! Host Interop Error Types

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The deferred render entry point failed to load
    #[error("Failed to load render entry point: {cause}")]
    RenderLoadFailed { cause: String },

    /// Mounting the application surface failed
    #[error("Failed to mount application '{app_id}': {cause}")]
    MountFailed { app_id: String, cause: String },
}

/// Result type for host interop operations
pub type HostResult<T> = Result<T, HostError>;
