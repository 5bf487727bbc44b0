//! Relay event types and SSE framing

use actix_web::web;
use serde::Serialize;

/// Event emitted by the stream relay.
///
/// Every opened stream yields zero or more `Progress` events followed by
/// exactly one terminal `Complete` or `Error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Partial content fragment, forwarded verbatim
    #[serde(rename = "stream")]
    Progress {
        /// The fragment text as received from upstream
        content: String,
    },
    /// Finished structured payload
    Complete {
        /// The parsed course document
        course: serde_json::Value,
    },
    /// Terminal failure with a human-readable message
    Error {
        /// What went wrong, never raw exception internals
        error: String,
    },
}

impl StreamEvent {
    /// Create a progress event
    pub fn progress(content: impl Into<String>) -> Self {
        StreamEvent::Progress {
            content: content.into(),
        }
    }

    /// Create a completion event
    pub fn complete(course: serde_json::Value) -> Self {
        StreamEvent::Complete { course }
    }

    /// Create a terminal error event
    pub fn error(message: impl Into<String>) -> Self {
        StreamEvent::Error {
            error: message.into(),
        }
    }

    /// Whether this event terminates the stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StreamEvent::Progress { .. })
    }

    /// Encode as one SSE frame: `data: <json>\n\n`
    pub fn to_sse_bytes(&self) -> web::Bytes {
        let json = serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"type":"error","error":"event serialization failed"}"#.to_string()
        });
        web::Bytes::from(format!("data: {}\n\n", json))
    }
}
