use thiserror::Error;

/// Failure of a remote daemon operation.
///
/// `Rejected` carries the daemon's own message (invalid key material,
/// malformed request) and is shown to the user mostly verbatim. `Transport`
/// covers everything between the processes. Neither variant mutates any
/// committed client state; every operation is safely retryable.
#[derive(Debug, Clone, Error)]
pub enum RemoteServiceError {
    #[error("{0}")]
    Rejected(String),

    #[error("daemon unreachable: {0}")]
    Transport(String),
}
