use thiserror::Error;

/// The alarm tone source could not be built.
#[derive(Debug, Error)]
pub enum ToneError {
    #[error("{node} node creation failed: {detail}")]
    NodeCreation { node: &'static str, detail: String },
    #[error("tone source failed to start: {0}")]
    Start(String),
}

/// Microphone capture could not be started.
#[derive(Debug, Error)]
pub enum MicError {
    #[error("media devices are not available in this context")]
    NoMediaDevices,
    #[error("microphone access denied: {0}")]
    PermissionDenied(String),
    #[error("microphone audio graph failed: {0}")]
    Graph(String),
}
