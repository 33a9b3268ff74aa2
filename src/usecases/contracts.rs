use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    action::ApiAction,
    console_state::ConsoleState,
    credentials::Credentials,
    events::AppEvent,
    request::{ActionInput, ActionRequest},
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised while performing a call, live or simulated.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[source] BoxError),
    #[error("response body is not valid JSON (HTTP {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// One remote call per invocation; implementations decide live vs simulated.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn call(
        &self,
        credentials: &Credentials,
        request: &ActionRequest,
    ) -> Result<Value, TransportError>;
}

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Starts an action without blocking the caller; the result arrives later
/// as an [`AppEvent::ActionCompleted`]. Returns `false` when the action
/// could not be queued and no result will follow.
pub trait ActionLauncher {
    fn launch(&mut self, action: ApiAction, input: ActionInput) -> bool;
}

pub trait ConsoleOrchestrator {
    fn state(&self) -> &ConsoleState;
    fn state_mut(&mut self) -> &mut ConsoleState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
