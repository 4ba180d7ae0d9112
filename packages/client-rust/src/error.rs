//! Facade error type.

use crate::transport::TransportError;

/// Failure of one facade operation.
///
/// One error kind per call: the message names the operation and its key
/// argument, and the source chain carries the transport failure unchanged.
/// Callers needing to distinguish timeout from not-found inspect [`cause`]
/// or walk `std::error::Error::source()`.
///
/// [`cause`]: ClientError::cause
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
    #[source]
    cause: TransportError,
}

impl ClientError {
    pub(crate) fn new(message: String, cause: TransportError) -> Self {
        Self { message, cause }
    }

    /// The underlying transport failure.
    #[must_use]
    pub fn cause(&self) -> &TransportError {
        &self.cause
    }
}
