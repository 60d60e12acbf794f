//! Single-flight remote lookup (the weather widget's controller).
//!
//! A trigger issues exactly one request for the current query and moves the
//! state to `Loading`. The outcome comes back over a channel as a
//! `LookupResolved` message and is applied by `resolve()` on the UI thread.
//! Triggers while a request is in flight are ignored.

use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;

/// Message used when the fetch task dies without producing an outcome
pub const LOOKUP_ABORTED: &str = "Lookup failed unexpectedly";

/// Why a lookup ended in `Failed`. Display is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Request never completed (DNS, connection, broken body, ...)
    #[error("{0}")]
    Transport(String),

    /// The service answered but reported a failure
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Success status but the payload could not be understood
    #[error("{0}")]
    Malformed(String),
}

/// Something that can answer a query asynchronously
pub trait LookupSource: Clone + Send + Sync + 'static {
    type Output: Clone + Send + 'static;

    fn fetch(&self, query: &str) -> impl Future<Output = Result<Self::Output, LookupError>> + Send;
}

/// Lookup status; the payload lives in the variant that owns it
#[derive(Debug, Clone, PartialEq)]
pub enum LookupStatus<T> {
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

/// One issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: u64,
    pub query: String,
}

/// Message from a finished request task
#[derive(Debug, Clone)]
pub struct LookupResolved<T> {
    pub request: LookupRequest,
    pub outcome: Result<T, LookupError>,
}

/// Inputs accepted by `LookupState::apply`
#[derive(Debug, Clone)]
pub enum LookupEvent<T> {
    SetQuery(String),
    Issue(LookupRequest),
    Resolve(LookupResolved<T>),
}

/// Query text, status and the request currently in flight
#[derive(Debug, Clone, PartialEq)]
pub struct LookupState<T> {
    query: String,
    status: LookupStatus<T>,
    in_flight: Option<LookupRequest>,
}

impl<T> Default for LookupState<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: LookupStatus::Idle,
            in_flight: None,
        }
    }
}

impl<T> LookupState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a trigger would issue a request right now
    pub fn can_trigger(&self) -> bool {
        !self.query.is_empty() && !self.is_loading()
    }

    pub fn apply(mut self, event: LookupEvent<T>) -> Self {
        match event {
            LookupEvent::SetQuery(query) => {
                self.query = query;
            }
            LookupEvent::Issue(request) => {
                if self.can_trigger() {
                    self.status = LookupStatus::Loading;
                    self.in_flight = Some(request);
                }
            }
            LookupEvent::Resolve(resolved) => {
                if self.in_flight.as_ref() != Some(&resolved.request) {
                    tracing::warn!(id = resolved.request.id, "Discarding resolution for unknown request");
                    return self;
                }
                self.in_flight = None;
                self.status = match resolved.outcome {
                    Ok(result) => LookupStatus::Success(result),
                    Err(e) => LookupStatus::Failed(e.to_string()),
                };
            }
        }
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &LookupStatus<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LookupStatus::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.status {
            LookupStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LookupStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<&LookupRequest> {
        self.in_flight.as_ref()
    }
}

/// Controller binding a `LookupState` to a source and a result channel
pub struct LookupController<S: LookupSource> {
    source: S,
    state: LookupState<S::Output>,
    next_request_id: u64,
    resolved_tx: mpsc::UnboundedSender<LookupResolved<S::Output>>,
}

impl<S: LookupSource> LookupController<S> {
    pub fn new(source: S, resolved_tx: mpsc::UnboundedSender<LookupResolved<S::Output>>) -> Self {
        Self {
            source,
            state: LookupState::new(),
            next_request_id: 0,
            resolved_tx,
        }
    }

    pub fn state(&self) -> &LookupState<S::Output> {
        &self.state
    }

    /// Update the query text; never issues a request
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.transition(LookupEvent::SetQuery(text.into()));
    }

    /// Issue one request for the current query.
    ///
    /// Returns false (and does nothing) when the query is empty or a request
    /// is already in flight. Must be called from within a tokio runtime.
    pub fn trigger(&mut self) -> bool {
        if !self.state.can_trigger() {
            tracing::debug!(
                loading = self.state.is_loading(),
                "Lookup trigger ignored"
            );
            return false;
        }

        self.next_request_id += 1;
        let request = LookupRequest {
            id: self.next_request_id,
            query: self.state.query().to_string(),
        };
        self.transition(LookupEvent::Issue(request.clone()));
        tracing::info!(id = request.id, query = %request.query, "Lookup issued");

        let source = self.source.clone();
        let resolved_tx = self.resolved_tx.clone();
        tokio::spawn(async move {
            // Run the fetch as its own task so a panic still resolves the request
            let query = request.query.clone();
            let fetch = tokio::spawn(async move { source.fetch(&query).await });
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(id = request.id, error = %e, "Lookup task aborted");
                    Err(LookupError::Transport(LOOKUP_ABORTED.to_string()))
                }
            };
            if let Err(e) = &outcome {
                tracing::warn!(id = request.id, error = %e, "Lookup failed");
            }
            if resolved_tx.send(LookupResolved { request, outcome }).is_err() {
                tracing::debug!("Lookup result dropped, controller is gone");
            }
        });
        true
    }

    /// Apply the outcome of the request in flight
    pub fn resolve(&mut self, resolved: LookupResolved<S::Output>) {
        if resolved.request.query != self.state.query() {
            // Applied anyway: the response answers the query that was sent
            tracing::debug!(
                sent = %resolved.request.query,
                current = %self.state.query(),
                "Applying response for an outdated query"
            );
        }
        self.transition(LookupEvent::Resolve(resolved));
    }

    fn transition(&mut self, event: LookupEvent<S::Output>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
