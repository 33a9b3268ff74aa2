//! Request dispatcher: validate, pick a transport, perform one call.

use std::{error::Error as _, sync::Arc};

use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::{
    action::ApiAction,
    request::{validate, ActionInput, ValidationError},
};

use super::contracts::{ApiTransport, TransportError};

const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

pub type ActionOutcome = Result<Value, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DispatchError {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Transport(_) => "TransportError",
        }
    }

    /// Human-readable message shown under `error`.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }

    /// Raw diagnostic shown under `details`: kind plus the full source chain.
    pub fn details(&self) -> String {
        let mut chain = self.message();
        let mut source = self.source();

        while let Some(cause) = source {
            let text = cause.to_string();
            if !text.is_empty() && !chain.contains(&text) {
                chain.push_str(": ");
                chain.push_str(&text);
            }
            source = cause.source();
        }

        format!("{}: {chain}", self.kind_label())
    }
}

/// Serializes actions through a FIFO gate so overlapping triggers complete in
/// the order they were issued.
pub struct Dispatcher {
    live: Arc<dyn ApiTransport>,
    simulated: Arc<dyn ApiTransport>,
    gate: Mutex<()>,
}

impl Dispatcher {
    pub fn new(live: Arc<dyn ApiTransport>, simulated: Arc<dyn ApiTransport>) -> Self {
        Self {
            live,
            simulated,
            gate: Mutex::new(()),
        }
    }

    pub async fn dispatch(&self, action: ApiAction, input: &ActionInput) -> ActionOutcome {
        let _turn = self.gate.lock().await;

        let validated = validate(action, input).inspect_err(|error| {
            tracing::info!(action = %action, error = %error, "action rejected by validation");
        })?;

        let transport = self.transport_for(validated.demo_mode);
        tracing::debug!(
            action = %action,
            demo_mode = validated.demo_mode,
            instance_id = %validated.credentials.instance_id,
            "dispatching action"
        );

        match transport
            .call(&validated.credentials, &validated.request)
            .await
        {
            Ok(value) => {
                tracing::info!(
                    action = %action,
                    demo_mode = validated.demo_mode,
                    "action completed"
                );
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(action = %action, error = %error, "action failed");
                Err(error.into())
            }
        }
    }

    fn transport_for(&self, demo_mode: bool) -> &dyn ApiTransport {
        if demo_mode {
            self.simulated.as_ref()
        } else {
            self.live.as_ref()
        }
    }
}
