use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoralogixError {
    #[error("object not found on the Coralogix backend: {0}")]
    NotFound(String),

    #[error("Coralogix API rejected the credentials (HTTP {0})")]
    Unauthorized(u16),

    #[error("Coralogix API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not reach the Coralogix API: {0}")]
    Transport(String),

    #[error("unsupported region: {0}")]
    UnknownRegion(String),
}

impl CoralogixError {
    pub fn is_not_found(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<CoralogixError>(), Some(CoralogixError::NotFound(_)))
    }
}
