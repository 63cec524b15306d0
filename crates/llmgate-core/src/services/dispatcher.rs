//! Upstream dispatcher.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::ValidatedRequest;
use crate::error::DispatchFailure;
use crate::ports::UpstreamPort;

/// Forwards validated requests to the upstream provider.
///
/// One call in, one completion out: no retries, no streaming. The upstream
/// client is injected at construction so it can be stubbed in tests.
pub struct Dispatcher {
    upstream: Arc<dyn UpstreamPort>,
}

impl Dispatcher {
    pub fn new(upstream: Arc<dyn UpstreamPort>) -> Self {
        Self { upstream }
    }

    pub async fn dispatch(&self, request: &ValidatedRequest) -> Result<String, DispatchFailure> {
        let started = Instant::now();
        let result = self.upstream.complete(&request.model, &request.prompt).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(text) => debug!(
                model = %request.model,
                elapsed_ms,
                chars = text.len(),
                "Upstream completion succeeded"
            ),
            Err(failure) => warn!(
                model = %request.model,
                elapsed_ms,
                error = %failure,
                "Upstream completion failed"
            ),
        }
        result
    }
}
