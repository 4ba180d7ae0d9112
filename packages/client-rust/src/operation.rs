//! The per-call pattern shared by every facade operation.
//!
//! Each operation is: start a span, run the transport call, classify the
//! outcome, annotate the span, return the typed result or a contextualized
//! error. Centralizing this keeps a new backend operation down to a path
//! template plus request/response shapes, and makes the tracing and error
//! discipline impossible to forget at a call site.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::trace::Tracer;
use crate::transport::TransportError;

/// Runs one facade operation inside a span.
///
/// `mark_outcome` controls whether the span gets an explicit success/failure
/// marker; side-effecting calls use it, plain reads rely on the error
/// annotation alone. The failure description is built lazily, only when the
/// call actually fails.
///
/// The span finishes when it drops, so it closes exactly once on every exit
/// path, including an unwind out of the awaited future.
pub(crate) async fn execute<T, F, D>(
    tracer: &dyn Tracer,
    span_name: &'static str,
    mark_outcome: bool,
    describe_failure: D,
    call: F,
) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, TransportError>>,
    D: FnOnce() -> String,
{
    let mut span = tracer.start_span(span_name);

    match call.await {
        Ok(value) => {
            if mark_outcome {
                span.annotate_success(true);
            }
            Ok(value)
        }
        Err(cause) => {
            let err = ClientError::new(describe_failure(), cause);
            if mark_outcome {
                span.annotate_success(false);
            }
            span.annotate_error(&err);
            Err(err)
        }
    }
}

/// Encodes a request body for the transport.
pub(crate) fn encode<T: Serialize>(body: &T) -> Result<Value, TransportError> {
    serde_json::to_value(body).map_err(TransportError::Encode)
}

/// Decodes a transport response into its typed shape.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(TransportError::Decode)
}
