//! Tracing seam for facade operations.
//!
//! Facades depend on the [`Tracer`] trait rather than on a tracing library so
//! tests can count span lifecycles. The production implementation records
//! spans through the `tracing` ecosystem.

use std::fmt;

/// One traced facade operation.
///
/// A span finishes when it is dropped, which guarantees exactly one finish on
/// every exit path, including unwinds.
pub trait Span: Send {
    /// Records the operation outcome marker.
    fn annotate_success(&mut self, success: bool);

    /// Records the error an operation is about to return.
    fn annotate_error(&mut self, error: &dyn fmt::Display);
}

/// Span factory scoped to the caller's tracing context.
pub trait Tracer: Send + Sync {
    /// Starts a span for the named operation, parented to whatever tracing
    /// context is current for the caller.
    fn start_span(&self, operation: &'static str) -> Box<dyn Span>;
}

// ---------------------------------------------------------------------------
// TracingTracer
// ---------------------------------------------------------------------------

/// Default [`Tracer`] backed by the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTracer;

impl Tracer for TracingTracer {
    fn start_span(&self, operation: &'static str) -> Box<dyn Span> {
        // Outcome fields start empty and are recorded at completion.
        let span = tracing::info_span!(
            "rest_client_operation",
            operation = operation,
            success = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Box::new(TracingSpan { span })
    }
}

/// The span is held for its lifetime only, never entered: entering across
/// await points would misattribute unrelated work.
struct TracingSpan {
    span: tracing::Span,
}

impl Span for TracingSpan {
    fn annotate_success(&mut self, success: bool) {
        self.span.record("success", success);
    }

    fn annotate_error(&mut self, error: &dyn fmt::Display) {
        self.span.record("error", tracing::field::display(error));
        tracing::warn!(parent: &self.span, %error, "rest client operation failed");
    }
}
