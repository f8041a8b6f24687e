use thiserror::Error;

/// Crate-level error type.
///
/// Resolution and canonicalization never fail — every malformed token or
/// record degrades to a placeholder or default in place. The only fallible
/// paths are the boundaries: decoding a collaborator payload and loading
/// configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
