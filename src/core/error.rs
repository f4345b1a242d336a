//! Error taxonomy for loading, validating, rendering and storage

use thiserror::Error;

/// Reasons a roadmap document could not be obtained or understood
#[derive(Error, Debug)]
pub enum LoadFailure {
    /// The local document could not be read
    #[error("failed to read {location}: {source}")]
    Io {
        /// Resolved path of the document
        location: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP transfer itself failed
    #[error("request to {location} failed: {source}")]
    Network {
        /// Resolved URL of the document
        location: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("failed to fetch roadmap data from {location}: HTTP {status}")]
    Status {
        /// Resolved URL of the document
        location: String,
        /// Status code returned by the server
        status: u16,
    },

    /// The payload is not a roadmap document
    #[error("malformed roadmap document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The location could not be turned into a path or URL
    #[error("invalid data source location '{location}': {message}")]
    Location {
        /// Location as configured
        location: String,
        /// Why it was rejected
        message: String,
    },
}

/// Top-level error type for the crate
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Fetching or parsing the data source failed
    #[error(transparent)]
    Load(#[from] LoadFailure),

    /// The document parsed but carries unusable values
    #[error("validation failed at {path}: {message}")]
    Validation {
        /// Location of the offending value (e.g. `specializations[0].courses[2].name`)
        path: String,
        /// Description of the problem
        message: String,
    },

    /// The key-value store could not be used
    #[error("storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of the failure
        message: String,
    },

    /// A template failed to render
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl From<serde_json::Error> for RoadmapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Load(LoadFailure::Malformed(err))
    }
}

impl RoadmapError {
    /// Shorthand for a storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Whether this error is a data-source failure
    #[must_use]
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load(_) | Self::Validation { .. })
    }
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, RoadmapError>;
