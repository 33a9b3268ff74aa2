use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{action::ApiAction, credentials::Credentials, request::ActionRequest},
    usecases::contracts::{ApiTransport, TransportError},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("test transport lock should not be poisoned")
}

/// Answers every call with the same value and records what it was asked.
pub struct RecordingTransport {
    response: Value,
    delays: HashMap<ApiAction, Duration>,
    calls: Mutex<Vec<(Credentials, ActionRequest)>>,
    completed: Mutex<Vec<ApiAction>>,
}

impl RecordingTransport {
    pub fn responding(response: Value) -> Self {
        Self {
            response,
            delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, action: ApiAction, delay: Duration) -> Self {
        self.delays.insert(action, delay);
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        lock(&self.calls)
            .last()
            .map(|(credentials, _)| credentials.clone())
    }

    pub fn completed_actions(&self) -> Vec<ApiAction> {
        lock(&self.completed).clone()
    }
}

#[async_trait]
impl ApiTransport for RecordingTransport {
    async fn call(
        &self,
        credentials: &Credentials,
        request: &ActionRequest,
    ) -> Result<Value, TransportError> {
        lock(&self.calls).push((credentials.clone(), request.clone()));

        if let Some(delay) = self.delays.get(&request.action()) {
            tokio::time::sleep(*delay).await;
        }

        lock(&self.completed).push(request.action());
        Ok(self.response.clone())
    }
}

/// Fails every call with a transport error carrying `message`.
pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ApiTransport for FailingTransport {
    async fn call(
        &self,
        _credentials: &Credentials,
        _request: &ActionRequest,
    ) -> Result<Value, TransportError> {
        Err(TransportError::Request(self.message.clone().into()))
    }
}
