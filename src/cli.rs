use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    domain::{action::ApiAction, request::ActionFields},
    infra::config::ConfigOverrides,
};

#[derive(Debug, Parser)]
#[command(
    name = "green-console",
    version,
    about = "Demo console for the GREEN-API WhatsApp gateway (TUI + one-shot commands)"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub instance: InstanceArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InstanceArgs {
    /// Instance identifier (idInstance)
    #[arg(long, global = true)]
    pub instance_id: Option<String>,

    /// Instance API token; prefer --ask-token to keep it out of shell history
    #[arg(long, global = true, conflicts_with = "ask_token")]
    pub token: Option<String>,

    /// Prompt for the API token without echo
    #[arg(long, global = true)]
    pub ask_token: bool,

    /// Answer from canned responses instead of the network
    #[arg(long, global = true)]
    pub demo: bool,

    /// API host, e.g. https://api.green-api.com
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive console
    Run,
    /// Call getSettings and print the response
    Settings,
    /// Call getStateInstance and print the response
    State,
    /// Call sendMessage and print the response
    SendMessage {
        /// Recipient phone number, digits only
        #[arg(long)]
        phone: String,
        /// Message text
        #[arg(long)]
        message: String,
    },
    /// Call sendFileByUrl and print the response
    SendFile {
        /// Recipient phone number, digits only
        #[arg(long)]
        phone: String,
        /// Public URL of the file
        #[arg(long)]
        url: String,
        /// File name shown to the recipient
        #[arg(long)]
        file_name: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    /// Overrides for the config layer; `token` is the already-resolved value
    /// so a prompted token goes through the same path as `--token`.
    pub fn overrides(&self, token: Option<String>) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.instance.base_url.clone(),
            demo: self.instance.demo,
            instance_id: self.instance.instance_id.clone(),
            token,
        }
    }
}

impl Command {
    /// One-shot action and its fields; `None` for the interactive console.
    pub fn action(&self) -> Option<(ApiAction, ActionFields)> {
        match self {
            Self::Run => None,
            Self::Settings => Some((ApiAction::GetSettings, ActionFields::default())),
            Self::State => Some((ApiAction::GetStateInstance, ActionFields::default())),
            Self::SendMessage { phone, message } => Some((
                ApiAction::SendMessage,
                ActionFields {
                    phone_number: phone.clone(),
                    message_text: message.clone(),
                    ..ActionFields::default()
                },
            )),
            Self::SendFile {
                phone,
                url,
                file_name,
            } => Some((
                ApiAction::SendFileByUrl,
                ActionFields {
                    phone_number: phone.clone(),
                    file_url: url.clone(),
                    file_name: file_name.clone(),
                    ..ActionFields::default()
                },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["green-console"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert!(cli.command_or_default().action().is_none());
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["green-console", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn global_instance_flags_apply_after_subcommand() {
        let cli = Cli::parse_from([
            "green-console",
            "state",
            "--instance-id",
            "1101000001",
            "--token",
            "tok",
            "--demo",
        ]);

        let overrides = cli.overrides(cli.instance.token.clone());

        assert_eq!(overrides.instance_id.as_deref(), Some("1101000001"));
        assert_eq!(overrides.token.as_deref(), Some("tok"));
        assert!(overrides.demo);
        assert_eq!(overrides.base_url, None);
    }

    #[test]
    fn send_message_maps_to_action_fields() {
        let cli = Cli::parse_from([
            "green-console",
            "send-message",
            "--phone",
            "79001234567",
            "--message",
            "hi",
        ]);

        let (action, fields) = cli.command_or_default().action().expect("one-shot action");

        assert_eq!(action, ApiAction::SendMessage);
        assert_eq!(fields.phone_number, "79001234567");
        assert_eq!(fields.message_text, "hi");
        assert!(fields.file_url.is_empty());
    }

    #[test]
    fn send_file_maps_to_action_fields() {
        let cli = Cli::parse_from([
            "green-console",
            "send-file",
            "--phone",
            "79001234567",
            "--url",
            "https://my-site.com/img/horse.png",
            "--file-name",
            "horse.png",
        ]);

        let (action, fields) = cli.command_or_default().action().expect("one-shot action");

        assert_eq!(action, ApiAction::SendFileByUrl);
        assert_eq!(fields.file_url, "https://my-site.com/img/horse.png");
        assert_eq!(fields.file_name, "horse.png");
    }

    #[test]
    fn token_and_ask_token_conflict() {
        let result = Cli::try_parse_from(["green-console", "--token", "t", "--ask-token"]);

        assert!(result.is_err());
    }
}
