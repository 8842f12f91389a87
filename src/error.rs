use thiserror::Error;

/// Failure to list a directory on either side of the boundary.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("no container bound to this pane")]
    Unbound,

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot list {path}: {stderr}")]
    Status { path: String, stderr: String },

    #[error("unexpected listing output for {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// Failure to copy a single entry.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("copying from {from} to {to} is not supported")]
    Unsupported { from: &'static str, to: &'static str },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("copy of {source_path} failed: {stderr}")]
    Status { source_path: String, stderr: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("nothing under the cursor")]
    NoEntry,
}

/// Everything that can go wrong when entering a directory.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("container listing failed: {0}")]
    Status(String),

    #[error("cannot parse container listing: {0}")]
    Parse(#[from] serde_json::Error),
}
