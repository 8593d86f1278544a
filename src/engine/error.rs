// ABOUTME: Error taxonomy for container lifecycle operations.
// ABOUTME: Kind-based comparison keeps diagnostic text out of error identity.

use thiserror::Error;

/// Errors surfaced by container lifecycle operations.
///
/// Variants produced by classifying engine output carry the raw combined
/// stdout/stderr text for diagnosis. Callers branch on [`EngineError::kind`],
/// never on the attached text.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The handle tracks no container identity.
    #[error("container id not set")]
    IdNotSet,

    /// No image was configured before starting.
    #[error("image not set")]
    ImageNotSet,

    /// The handle already tracks an identity, or a stopped-state check
    /// found the container running.
    #[error("container is already started")]
    AlreadyStarted,

    /// The engine reported the container as not running.
    #[error("container is not running: {output}")]
    NotRunning { output: String },

    /// The requested container name is taken by another container.
    #[error("container name is already in use: {output}")]
    NameInUse { output: String },

    /// No container with the tracked identity exists.
    #[error("no such container: {output}")]
    NotExist { output: String },

    /// The engine exited successfully but its output had an unexpected shape.
    #[error("unrecognized engine output: {output}")]
    MalformedOutput { output: String },

    /// Engine failure whose output matched no known message pattern.
    #[error("{reason}: {output}")]
    Runtime { reason: String, output: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    IdNotSet,
    ImageNotSet,
    AlreadyStarted,
    NotRunning,
    NameInUse,
    NotExist,
    MalformedOutput,
    Runtime,
}

impl EngineError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> EngineErrorKind {
        match self {
            EngineError::IdNotSet => EngineErrorKind::IdNotSet,
            EngineError::ImageNotSet => EngineErrorKind::ImageNotSet,
            EngineError::AlreadyStarted => EngineErrorKind::AlreadyStarted,
            EngineError::NotRunning { .. } => EngineErrorKind::NotRunning,
            EngineError::NameInUse { .. } => EngineErrorKind::NameInUse,
            EngineError::NotExist { .. } => EngineErrorKind::NotExist,
            EngineError::MalformedOutput { .. } => EngineErrorKind::MalformedOutput,
            EngineError::Runtime { .. } => EngineErrorKind::Runtime,
        }
    }

    /// Returns the raw engine output attached to this error, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            EngineError::NotRunning { output }
            | EngineError::NameInUse { output }
            | EngineError::NotExist { output }
            | EngineError::MalformedOutput { output }
            | EngineError::Runtime { output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
