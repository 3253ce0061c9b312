//! Error types.

use thiserror::Error;

/// Failure of a single inventory query.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("response too large: {0} bytes")]
    OutputTooLarge(usize),

    #[error("invalid UTF-8 in response: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("error parsing response at path={path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("empty inventory command")]
    EmptyCommand,

    #[error("cancelled")]
    Cancelled,

    /// Anything a non-CLI fetcher wants to report.
    #[error("{0}")]
    Other(String),
}

/// Failure of [`crate::SubnetResolver::get`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("discovering subnets for cluster '{cluster}': {source}")]
    Discovery {
        cluster: String,
        #[source]
        source: InventoryError,
    },
}

impl ResolveError {
    /// Cluster the failed resolution was for.
    pub fn cluster(&self) -> &str {
        match self {
            ResolveError::Discovery { cluster, .. } => cluster,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            ResolveError::Discovery {
                source: InventoryError::Cancelled,
                ..
            }
        )
    }
}
