use thiserror::Error;

/// Failures surfaced by token decoding and the scope grammar.
///
/// The policy layer never returns these: authorization queries answer with
/// booleans or lists, and anything unverifiable reads as "no access".
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Other(anyhow::Error),

    #[error("Malformed scope string: {0:?}")]
    MalformedScope(String),

    #[error("Unrecognized permission: {0:?}")]
    UnrecognizedPermission(String),

    #[error("Unusable verification key: {0}")]
    MalformedKey(String),

    #[error("No verification key configured")]
    MissingVerificationKey,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unsupported signature algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}

impl From<anyhow::Error> for AuthError {
    fn from(error: anyhow::Error) -> Self {
        AuthError::Other(error)
    }
}
