use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that reach the caller. Validation and transport failures never do;
/// they are logged and turned into the operation's sentinel.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed target {target:?}: {source}")]
    MalformedTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to serialize JSON body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0:#}")]
    Client(anyhow::Error),
}
