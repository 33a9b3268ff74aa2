use anyhow::Result;

use crate::{
    domain::console_state::ConsoleState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ConsoleOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ConsoleOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        base_url = %context.config.api.base_url,
        demo = orchestrator.state().form().demo_mode(),
        "starting console"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("console stopped");
    Ok(())
}

fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ConsoleOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut ConsoleState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
