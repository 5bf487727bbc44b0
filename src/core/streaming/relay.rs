//! Fragment-to-event relay

use super::types::StreamEvent;
use crate::core::generation::{CourseGenerator, CourseRequest, FragmentStream};
use crate::core::retry::RetryExecutor;
use crate::utils::error::{GatewayError, Result};
use futures::{Stream, StreamExt};
use tracing::{debug, error};

/// Open the upstream fragment stream under retry supervision.
///
/// The retried unit is the call that opens the stream plus the wait for its
/// first fragment: anything failing before a fragment reaches us retries
/// transparently. Once a fragment has been observed the stream is exposed
/// to the caller, so later failures must surface as in-stream error events
/// instead; a fragment already delivered cannot be un-sent.
pub async fn open_with_retry(
    generator: &dyn CourseGenerator,
    request: &CourseRequest,
    executor: &RetryExecutor,
) -> Result<(Option<String>, FragmentStream)> {
    executor
        .execute(move || async move {
            let mut fragments = generator.start(request).await?;
            match fragments.next().await {
                Some(Ok(first)) => Ok((Some(first), fragments)),
                Some(Err(e)) => Err(e),
                None => Ok((None, fragments)),
            }
        })
        .await
}

/// Bridge fragments to relay events.
///
/// Each fragment is appended to an accumulation buffer and forwarded
/// verbatim as a progress event, in arrival order. When the upstream
/// signals exhaustion the buffer is parsed as one JSON document and emitted
/// as the `complete` event; a parse failure or a mid-stream upstream error
/// produces a single terminal `error` event. `first` is the fragment
/// already pulled while opening the stream under retry; it is replayed
/// ahead of the live stream.
pub fn relay_events<S>(first: Option<String>, fragments: S) -> impl Stream<Item = StreamEvent>
where
    S: Stream<Item = Result<String>> + 'static,
{
    async_stream::stream! {
        let mut buffer = String::new();
        let mut failed = false;

        if let Some(fragment) = first {
            buffer.push_str(&fragment);
            yield StreamEvent::progress(fragment);
        }

        tokio::pin!(fragments);
        while let Some(item) = fragments.next().await {
            match item {
                Ok(fragment) => {
                    buffer.push_str(&fragment);
                    yield StreamEvent::progress(fragment);
                }
                Err(e) => {
                    error!("Upstream failed mid-stream: {}", e);
                    yield StreamEvent::error(format!("Course generation failed: {}", e));
                    failed = true;
                    break;
                }
            }
        }

        if !failed {
            match serde_json::from_str::<serde_json::Value>(&buffer) {
                Ok(course) => {
                    debug!("Stream complete, {} bytes accumulated", buffer.len());
                    yield StreamEvent::complete(course);
                }
                Err(e) => {
                    error!("Accumulated stream is not a valid course document: {}", e);
                    let parse_err =
                        GatewayError::parse("generated content could not be parsed as a course");
                    yield StreamEvent::error(parse_err.to_string());
                }
            }
        }
    }
}
