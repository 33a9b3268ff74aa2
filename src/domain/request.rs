//! Action input as entered by the operator, and its validated form.
//!
//! `ActionInput` is what a front-end (TUI form or CLI flags) hands over;
//! [`validate`] turns it into a [`ValidatedRequest`] or the first
//! [`ValidationError`] in the fixed check order.

use serde::Serialize;
use thiserror::Error;

use super::{action::ApiAction, credentials::Credentials};

/// Domain tag appended to a phone number to form a personal chat id.
const PERSONAL_CHAT_SUFFIX: &str = "@c.us";

/// Raw operator-supplied state for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInput {
    pub credentials: Credentials,
    pub demo_mode: bool,
    pub fields: ActionFields,
}

/// Per-action form fields. Untrimmed; unused fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionFields {
    pub phone_number: String,
    pub message_text: String,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    pub fn from_phone(phone_number: &str) -> Self {
        Self(format!("{phone_number}{PERSONAL_CHAT_SUFFIX}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub chat_id: ChatId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFileByUrlPayload {
    pub chat_id: ChatId,
    pub url_file: String,
    pub file_name: String,
}

/// A request whose required fields are all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    GetSettings,
    GetStateInstance,
    SendMessage(SendMessagePayload),
    SendFileByUrl(SendFileByUrlPayload),
}

impl ActionRequest {
    pub fn action(&self) -> ApiAction {
        match self {
            Self::GetSettings => ApiAction::GetSettings,
            Self::GetStateInstance => ApiAction::GetStateInstance,
            Self::SendMessage(_) => ApiAction::SendMessage,
            Self::SendFileByUrl(_) => ApiAction::SendFileByUrl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub credentials: Credentials,
    pub demo_mode: bool,
    pub request: ActionRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("idInstance is required")]
    MissingInstanceId,
    #[error("ApiTokenInstance is required")]
    MissingToken,
    #[error("Phone number is required")]
    MissingPhoneNumber,
    #[error("Message text is required")]
    MissingMessageText,
    #[error("File URL is required")]
    MissingFileUrl,
    #[error("File name is required")]
    MissingFileName,
}

/// Checks credentials (live mode only), then the action's own fields.
pub fn validate(
    action: ApiAction,
    input: &ActionInput,
) -> Result<ValidatedRequest, ValidationError> {
    let credentials = input.credentials.trimmed();

    if !input.demo_mode {
        if credentials.instance_id.is_empty() {
            return Err(ValidationError::MissingInstanceId);
        }
        if credentials.token.is_empty() {
            return Err(ValidationError::MissingToken);
        }
    }

    let fields = &input.fields;
    let request = match action {
        ApiAction::GetSettings => ActionRequest::GetSettings,
        ApiAction::GetStateInstance => ActionRequest::GetStateInstance,
        ApiAction::SendMessage => {
            let phone_number = required(&fields.phone_number, ValidationError::MissingPhoneNumber)?;
            let message = required(&fields.message_text, ValidationError::MissingMessageText)?;

            ActionRequest::SendMessage(SendMessagePayload {
                chat_id: ChatId::from_phone(phone_number),
                message: message.to_owned(),
            })
        }
        ApiAction::SendFileByUrl => {
            let phone_number = required(&fields.phone_number, ValidationError::MissingPhoneNumber)?;
            let url_file = required(&fields.file_url, ValidationError::MissingFileUrl)?;
            let file_name = required(&fields.file_name, ValidationError::MissingFileName)?;

            ActionRequest::SendFileByUrl(SendFileByUrlPayload {
                chat_id: ChatId::from_phone(phone_number),
                url_file: url_file.to_owned(),
                file_name: file_name.to_owned(),
            })
        }
    };

    Ok(ValidatedRequest {
        credentials,
        demo_mode: input.demo_mode,
        request,
    })
}

fn required(value: &str, missing: ValidationError) -> Result<&str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}
