use std::{
    io::{self, Write},
    process::ExitCode,
    sync::{mpsc, Arc},
};

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};

use crate::{
    api,
    cli::{Cli, Command},
    domain::{
        action::ApiAction,
        console_state::FormState,
        credentials::Credentials,
        request::{ActionFields, ActionInput},
    },
    infra::{self, config::AppConfig, error::AppError},
    ui,
    usecases::{
        self,
        bootstrap::{self, LogTarget},
        console::DefaultConsoleOrchestrator,
        context::AppContext,
        launcher::RuntimeActionLauncher,
        render,
    },
};

const TOKEN_PROMPT: &str = "apiTokenInstance: ";

pub fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.command_or_default();
    let log_target = match command {
        Command::Run => LogTarget::Files,
        _ => LogTarget::Stderr,
    };

    let token = resolve_token(&cli)?;
    let booted = bootstrap::bootstrap(cli.config.as_deref(), cli.overrides(token), log_target)?;
    let _logging = booted.logging;
    let context = booted.context;

    tracing::debug!(
        ui = ui::module_name(),
        domain = crate::domain::module_name(),
        api = api::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let runtime = build_runtime()?;

    match command.action() {
        None => {
            run_console(&context, &runtime)?;
            Ok(ExitCode::SUCCESS)
        }
        Some((action, fields)) => {
            let mut stdout = io::stdout().lock();
            run_once(&context, &runtime, action, fields, &mut stdout)
        }
    }
}

fn resolve_token(cli: &Cli) -> Result<Option<String>, AppError> {
    if !cli.instance.ask_token {
        return Ok(cli.instance.token.clone());
    }

    rpassword::prompt_password(TOKEN_PROMPT)
        .map(|token| Some(token.trim().to_owned()))
        .map_err(AppError::TokenPrompt)
}

fn build_runtime() -> Result<Runtime, AppError> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("green-console-worker")
        .build()
        .map_err(AppError::Runtime)
}

fn configured_credentials(config: &AppConfig) -> Credentials {
    Credentials::new(
        config.credentials.instance_id.as_str(),
        config.credentials.token.as_str(),
    )
}

fn run_console(context: &AppContext, runtime: &Runtime) -> Result<()> {
    let (completions, completed) = mpsc::channel();
    let launcher = RuntimeActionLauncher::start(
        runtime.handle(),
        Arc::clone(&context.dispatcher),
        completions,
    );
    let form = FormState::prefilled(
        &configured_credentials(&context.config),
        context.config.demo.enabled,
    );

    let mut orchestrator = DefaultConsoleOrchestrator::new(form, launcher);
    let mut event_source = ui::CrosstermEventSource::new(completed);

    ui::shell::start(context, &mut event_source, &mut orchestrator)
}

/// Runs one action, writes the rendered result to `out` and maps an error
/// result to a failing exit code.
fn run_once(
    context: &AppContext,
    runtime: &Runtime,
    action: ApiAction,
    fields: ActionFields,
    out: &mut dyn Write,
) -> Result<ExitCode> {
    let input = one_shot_input(&context.config, fields);
    let outcome = runtime.block_on(context.dispatcher.dispatch(action, &input));

    writeln!(out, "{}", render::render(&outcome))
        .and_then(|()| out.flush())
        .context("failed to write result to stdout")?;

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn one_shot_input(config: &AppConfig, fields: ActionFields) -> ActionInput {
    ActionInput {
        credentials: configured_credentials(config),
        demo_mode: config.demo.enabled,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        api::SimulatedTransport, test_support::FailingTransport, usecases::dispatch::Dispatcher,
    };

    fn demo_context() -> AppContext {
        let mut config = AppConfig::default();
        config.demo.enabled = true;
        config.demo.delay_ms = 0;
        let dispatcher = Dispatcher::new(
            Arc::new(FailingTransport::new("live transport must not be used")),
            Arc::new(SimulatedTransport::new(Duration::ZERO)),
        );

        AppContext::new(config, Arc::new(dispatcher))
    }

    fn test_runtime() -> Runtime {
        Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("runtime should build")
    }

    #[test]
    fn one_shot_input_carries_configured_credentials() {
        let mut config = AppConfig::default();
        config.credentials.instance_id = "1101000001".to_owned();
        config.credentials.token = "tok".to_owned();

        let input = one_shot_input(&config, ActionFields::default());

        assert_eq!(input.credentials, Credentials::new("1101000001", "tok"));
        assert!(!input.demo_mode);
    }

    #[test]
    fn one_shot_demo_action_succeeds() {
        let context = demo_context();
        let mut out = Vec::new();

        let code = run_once(
            &context,
            &test_runtime(),
            ApiAction::GetSettings,
            ActionFields::default(),
            &mut out,
        )
        .expect("output is writable");

        assert_eq!(code, ExitCode::SUCCESS);
        let printed = String::from_utf8(out).expect("output is utf-8");
        assert!(printed.starts_with("{\n  \"wid\": \"79001234567@c.us\""));
        assert!(printed.ends_with("}\n"));
    }

    #[test]
    fn one_shot_validation_failure_exits_with_failure() {
        let context = demo_context();
        let mut out = Vec::new();

        let code = run_once(
            &context,
            &test_runtime(),
            ApiAction::SendMessage,
            ActionFields::default(),
            &mut out,
        )
        .expect("output is writable");

        assert_eq!(code, ExitCode::FAILURE);
        let printed = String::from_utf8(out).expect("output is utf-8");
        assert!(printed.contains("\"error\": \"Phone number is required\""));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let context = demo_context();

        let error = run_once(
            &context,
            &test_runtime(),
            ApiAction::GetStateInstance,
            ActionFields::default(),
            &mut ClosedPipe,
        )
        .expect_err("write must fail");

        assert!(error.to_string().contains("failed to write result"));
    }
}
