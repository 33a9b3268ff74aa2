use std::sync::{mpsc::Sender, Arc};

use tokio::{runtime::Handle, sync::mpsc};

use crate::domain::{action::ApiAction, events::CompletedAction, request::ActionInput};

use super::{contracts::ActionLauncher, dispatch::Dispatcher, render};

type QueuedAction = (ApiAction, ActionInput);

/// Feeds triggered actions to a single worker task on the runtime, which runs
/// them one at a time and reports each rendered result over `completions`.
pub struct RuntimeActionLauncher {
    queue: mpsc::UnboundedSender<QueuedAction>,
}

impl RuntimeActionLauncher {
    pub fn start(
        runtime: &Handle,
        dispatcher: Arc<Dispatcher>,
        completions: Sender<CompletedAction>,
    ) -> Self {
        let (queue, pending) = mpsc::unbounded_channel();
        runtime.spawn(run_worker(dispatcher, pending, completions));

        Self { queue }
    }
}

impl ActionLauncher for RuntimeActionLauncher {
    fn launch(&mut self, action: ApiAction, input: ActionInput) -> bool {
        if self.queue.send((action, input)).is_err() {
            tracing::error!(action = %action, "action worker is gone; trigger dropped");
            return false;
        }
        true
    }
}

async fn run_worker(
    dispatcher: Arc<Dispatcher>,
    mut pending: mpsc::UnboundedReceiver<QueuedAction>,
    completions: Sender<CompletedAction>,
) {
    while let Some((action, input)) = pending.recv().await {
        let outcome = dispatcher.dispatch(action, &input).await;

        if completions.send(render::complete(action, &outcome)).is_err() {
            tracing::debug!(action = %action, "console closed before action completed");
            return;
        }
    }

    tracing::debug!("action worker stopped");
}
