//! Canned responses served in demo mode.

use serde::Serialize;
use serde_json::Value;

use super::request::{ActionRequest, SendFileByUrlPayload, SendMessagePayload};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockSettings {
    pub wid: &'static str,
    pub country_instance: &'static str,
    pub type_account: &'static str,
    pub webhook_url: &'static str,
    pub webhook_url_token: &'static str,
    pub delay_send_messages_milliseconds: u32,
    pub mark_incoming_messages_readed: &'static str,
    pub mark_incoming_messages_readed_on_reply: &'static str,
    pub outgoing_webhook: &'static str,
    pub outgoing_message_webhook: &'static str,
    #[serde(rename = "outgoingAPIMessageWebhook")]
    pub outgoing_api_message_webhook: &'static str,
    pub incoming_webhook: &'static str,
    pub device_webhook: &'static str,
    pub status_instance_webhook: &'static str,
    #[serde(rename = "sendFromUTC")]
    pub send_from_utc: &'static str,
    #[serde(rename = "sendToUTC")]
    pub send_to_utc: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockStateInstance {
    pub state_instance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockSentMessage {
    pub id_message: &'static str,
    pub chat_id: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockSentFile {
    pub id_message: &'static str,
    pub url_file: String,
    pub file_name: String,
    pub chat_id: String,
}

pub const SETTINGS: MockSettings = MockSettings {
    wid: "79001234567@c.us",
    country_instance: "ru",
    type_account: "trial",
    webhook_url: "",
    webhook_url_token: "",
    delay_send_messages_milliseconds: 1000,
    mark_incoming_messages_readed: "yes",
    mark_incoming_messages_readed_on_reply: "no",
    outgoing_webhook: "yes",
    outgoing_message_webhook: "yes",
    outgoing_api_message_webhook: "yes",
    incoming_webhook: "yes",
    device_webhook: "no",
    status_instance_webhook: "yes",
    send_from_utc: "false",
    send_to_utc: "false",
};

pub const STATE_INSTANCE: MockStateInstance = MockStateInstance {
    state_instance: "authorized",
};

const SENT_MESSAGE_ID: &str = "3EB0C767D097B7C7C030";
const SENT_MESSAGE_TEXT: &str = "Message sent successfully";
const SENT_FILE_ID: &str = "3EB0CBEF0E6C380D0C07";
const TEMPLATE_CHAT_ID: &str = "77777777777@c.us";
const TEMPLATE_FILE_URL: &str = "https://my-site.com/img/horse.png";
const TEMPLATE_FILE_NAME: &str = "horse.png";

impl Default for MockSentMessage {
    fn default() -> Self {
        Self {
            id_message: SENT_MESSAGE_ID,
            chat_id: TEMPLATE_CHAT_ID.to_owned(),
            message: SENT_MESSAGE_TEXT,
        }
    }
}

impl Default for MockSentFile {
    fn default() -> Self {
        Self {
            id_message: SENT_FILE_ID,
            url_file: TEMPLATE_FILE_URL.to_owned(),
            file_name: TEMPLATE_FILE_NAME.to_owned(),
            chat_id: TEMPLATE_CHAT_ID.to_owned(),
        }
    }
}

impl MockSentMessage {
    fn overlay(payload: &SendMessagePayload) -> Self {
        Self {
            chat_id: payload.chat_id.as_str().to_owned(),
            ..Self::default()
        }
    }
}

impl MockSentFile {
    fn overlay(payload: &SendFileByUrlPayload) -> Self {
        Self {
            chat_id: payload.chat_id.as_str().to_owned(),
            url_file: payload.url_file.clone(),
            file_name: payload.file_name.clone(),
            ..Self::default()
        }
    }
}

/// Canned response for `request`, with request fields laid over the template.
///
/// The message text of a `sendMessage` request is not echoed; the template's
/// confirmation text stays.
pub fn response_for(request: &ActionRequest) -> Result<Value, serde_json::Error> {
    match request {
        ActionRequest::GetSettings => serde_json::to_value(SETTINGS),
        ActionRequest::GetStateInstance => serde_json::to_value(STATE_INSTANCE),
        ActionRequest::SendMessage(payload) => {
            serde_json::to_value(MockSentMessage::overlay(payload))
        }
        ActionRequest::SendFileByUrl(payload) => {
            serde_json::to_value(MockSentFile::overlay(payload))
        }
    }
}
