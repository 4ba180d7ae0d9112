//! Hand-rolled doubles shared by the facade tests.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::trace::{Span, Tracer};
use crate::transport::{Transport, TransportConfig, TransportError};

// ---------------------------------------------------------------------------
// CountingTracer
// ---------------------------------------------------------------------------

/// Tracer double that counts span starts/finishes and logs annotations.
#[derive(Clone)]
pub(crate) struct CountingTracer {
    inner: Arc<TracerState>,
}

struct TracerState {
    started: AtomicUsize,
    finished: AtomicUsize,
    annotations: Mutex<Vec<String>>,
}

impl CountingTracer {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(TracerState {
                started: AtomicUsize::new(0),
                finished: AtomicUsize::new(0),
                annotations: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn started(&self) -> usize {
        self.inner.started.load(Ordering::SeqCst)
    }

    pub(crate) fn finished(&self) -> usize {
        self.inner.finished.load(Ordering::SeqCst)
    }

    pub(crate) fn annotations(&self) -> Vec<String> {
        self.inner.annotations.lock().clone()
    }
}

impl Tracer for CountingTracer {
    fn start_span(&self, _operation: &'static str) -> Box<dyn Span> {
        self.inner.started.fetch_add(1, Ordering::SeqCst);
        Box::new(CountingSpan {
            inner: self.inner.clone(),
        })
    }
}

struct CountingSpan {
    inner: Arc<TracerState>,
}

impl Span for CountingSpan {
    fn annotate_success(&mut self, success: bool) {
        self.inner
            .annotations
            .lock()
            .push(format!("success={success}"));
    }

    fn annotate_error(&mut self, error: &dyn fmt::Display) {
        self.inner.annotations.lock().push(format!("error={error}"));
    }
}

impl Drop for CountingSpan {
    fn drop(&mut self) {
        self.inner.finished.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// StubTransport
// ---------------------------------------------------------------------------

/// One request observed by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Transport double that records calls and replays queued responses.
///
/// Clones share state, so tests keep a handle for inspection after handing
/// a clone to the facade. An empty response queue answers `Value::Null`.
#[derive(Clone)]
pub(crate) struct StubTransport {
    inner: Arc<StubState>,
}

struct StubState {
    config: TransportConfig,
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(StubState {
                config: TransportConfig::default(),
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(VecDeque::new()),
            }),
        }
    }

    pub(crate) fn respond_with(self, response: Result<Value, TransportError>) -> Self {
        self.inner.responses.lock().push_back(response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.inner.calls.lock().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });

        self.inner
            .responses
            .lock()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn config(&self) -> &TransportConfig {
        &self.inner.config
    }

    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.record("GET", path, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.record("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        self.record("PUT", path, body)
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.record("DELETE", path, None)
    }
}
