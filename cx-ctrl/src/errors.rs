use std::ops::Deref;

use cx_core::errors::*;

// kube's reconcile functions need an error type that implements std::error::Error, which
// anyhow::Error doesn't; wrap it and deref back to the anyhow error wherever we need to inspect it
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AnyhowError(#[from] anyhow::Error);

impl Deref for AnyhowError {
    type Target = anyhow::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

err_impl! {CxControllerError,
    #[error("create response for {0} did not contain an id")]
    MissingRemoteId(String),

    #[error("object {0} has no namespace")]
    MissingNamespace(String),
}
