// ABOUTME: Domain error taxonomy for container engine operations.
// ABOUTME: Flat set of failure kinds with SNAFU displays and a kind() accessor.

use snafu::Snafu;

/// Failures surfaced by the engine layers.
///
/// The adapter is the only place engine-native errors are caught and
/// reclassified into these kinds; layers above pass them through unchanged.
/// `Unavailable` is raised solely by the lifecycle service's availability
/// gate, never by the adapter itself.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum EngineError {
    #[snafu(display("container engine is not available"))]
    Unavailable,

    #[snafu(display("container not found: {id}"))]
    NotFound { id: String },

    #[snafu(display("container not running: {id}"))]
    NotRunning { id: String },

    #[snafu(display("engine operation failed: {message}"))]
    Operation { message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// Engine unreachable; nothing was attempted.
    Unavailable,
    /// Referenced container does not exist.
    NotFound,
    /// Operation requires a running container.
    NotRunning,
    /// Any other engine-reported failure.
    Operation,
}

impl EngineError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> EngineErrorKind {
        match self {
            EngineError::Unavailable => EngineErrorKind::Unavailable,
            EngineError::NotFound { .. } => EngineErrorKind::NotFound,
            EngineError::NotRunning { .. } => EngineErrorKind::NotRunning,
            EngineError::Operation { .. } => EngineErrorKind::Operation,
        }
    }

    pub(crate) fn operation(message: impl Into<String>) -> Self {
        EngineError::Operation {
            message: message.into(),
        }
    }
}
