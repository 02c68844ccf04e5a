/// Result alias used across the crate.
pub type ArticulateResult<T> = Result<T, ArticulateError>;

#[derive(thiserror::Error, Debug)]
/// Error type returned by rig loading, pose evaluation and export.
pub enum ArticulateError {
    /// The authored rig table is malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pose lookup or sink handoff failed.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArticulateError {
    /// Build a [`ArticulateError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ArticulateError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ArticulateError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ArticulateError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

impl From<serde_json::Error> for ArticulateError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

impl From<std::io::Error> for ArticulateError {
    fn from(e: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
