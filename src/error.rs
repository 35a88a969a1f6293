use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReconError>;

#[derive(Debug, Error)]
pub enum ReconError {
    /// Report URL could not be parsed when deriving the page domain
    #[error("invalid page URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Snapshot violates the node-list contract (parent ordering, etc.)
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Report counts disagree with its element list
    #[error("report counts sum to {actual}, expected {expected}")]
    CountMismatch { expected: usize, actual: usize },

    /// Report counts lack an entry for a semantic type
    #[error("report counts have no entry for '{0}'")]
    MissingCount(String),

    /// Extractor process failed to spawn
    #[error("failed to spawn extractor '{command}' (is it installed?): {source}")]
    ExtractorSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Extractor process exited with non-zero status
    #[error("extractor '{command}' exited with {status}: {stderr}")]
    ExtractorFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
}
