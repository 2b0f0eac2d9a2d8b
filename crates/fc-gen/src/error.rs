//! Generation failure taxonomy.
//!
//! Three externally distinguishable kinds — transport, malformed
//! response, schema violation — plus the in-flight guard. None are
//! fatal: every failure leaves the live graph untouched and the editor
//! usable.

use fc_core::model::GraphError;
use thiserror::Error;

/// The capability was unreachable or returned a failure status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("generation transport failed{}: {message}", status_suffix(.status))]
pub struct TransportError {
    /// HTTP-like status, when one was received.
    pub status: Option<u16>,
    pub message: String,
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

impl TransportError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// External capability unreachable or non-success status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response text contains no parseable JSON object.
    #[error("response contained no parseable graph object")]
    MalformedResponse,

    /// The parsed payload failed structural or referential validation.
    #[error("generated graph rejected: {0}")]
    SchemaViolation(#[from] GraphError),

    /// At most one generation may be in flight; a new request while one
    /// is pending is rejected, not queued.
    #[error("a generation request is already in flight")]
    InFlight,
}
