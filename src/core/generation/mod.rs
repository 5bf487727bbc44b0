//! Upstream course generation collaborator
//!
//! The relay only needs a lazy, finite sequence of text fragments that may
//! fail at any point, including before the first fragment.

mod http;
mod types;

pub use http::HttpCourseGenerator;
pub use types::{CourseLevel, CourseRequest};

use crate::utils::error::Result;
use futures::Stream;
use std::pin::Pin;

/// Lazy, finite sequence of text fragments from the upstream generator
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Asynchronous fragment source backing the stream relay
#[async_trait::async_trait]
pub trait CourseGenerator: Send + Sync {
    /// Open a fragment stream for one generation request.
    ///
    /// Failures returned here happen before anything reached the caller and
    /// are safe to retry; failures after the first fragment arrive in-stream.
    async fn start(&self, request: &CourseRequest) -> Result<FragmentStream>;
}
