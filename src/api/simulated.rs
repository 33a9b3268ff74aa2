use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{credentials::Credentials, mock_catalog, request::ActionRequest},
    usecases::contracts::{ApiTransport, TransportError},
};

/// Demo-mode transport: waits a fixed latency, then answers from the mock catalog.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ApiTransport for SimulatedTransport {
    async fn call(
        &self,
        _credentials: &Credentials,
        request: &ActionRequest,
    ) -> Result<Value, TransportError> {
        tracing::debug!(
            action = %request.action(),
            delay_ms = delay_millis(self.delay),
            "serving canned response"
        );
        tokio::time::sleep(self.delay).await;

        mock_catalog::response_for(request).map_err(TransportError::Encode)
    }
}

/// Milliseconds for log fields, saturating instead of truncating.
fn delay_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
