//! Pure formatting of an action outcome into display text.

use serde_json::{json, Value};

use crate::domain::{action::ApiAction, events::CompletedAction};

use super::dispatch::{ActionOutcome, DispatchError};

/// `{ "error": ..., "details": ... }` for a failed action.
pub fn error_object(error: &DispatchError) -> Value {
    json!({
        "error": error.message(),
        "details": error.details(),
    })
}

/// Pretty-prints the response or error object with a two-space indent.
pub fn render(outcome: &ActionOutcome) -> String {
    match outcome {
        Ok(value) => pretty(value),
        Err(error) => pretty(&error_object(error)),
    }
}

pub fn complete(action: ApiAction, outcome: &ActionOutcome) -> CompletedAction {
    CompletedAction {
        action,
        text: render(outcome),
        is_error: outcome.is_err(),
    }
}

fn pretty(value: &Value) -> String {
    // Serializing a `Value` into memory cannot fail; keep the compact form if it ever does.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::request::ValidationError,
        usecases::contracts::TransportError,
    };

    #[test]
    fn renders_with_two_space_indent() {
        let outcome: ActionOutcome = Ok(json!({ "stateInstance": "authorized" }));

        assert_eq!(render(&outcome), "{\n  \"stateInstance\": \"authorized\"\n}");
    }

    #[test]
    fn keeps_response_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":{"nested":[1,2]},"mid":null}"#)
                .expect("fixture parses");

        let rendered = render(&Ok(value));

        let zeta = rendered.find("zeta").expect("zeta rendered");
        let alpha = rendered.find("alpha").expect("alpha rendered");
        let mid = rendered.find("mid").expect("mid rendered");
        assert!(zeta < alpha && alpha < mid);
        assert!(rendered.contains("    \"nested\": [\n      1,\n      2\n    ]"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let outcome: ActionOutcome = Ok(json!({ "b": [true, false], "a": "x" }));

        assert_eq!(render(&outcome), render(&outcome));
    }

    #[test]
    fn validation_error_renders_error_and_details() {
        let outcome: ActionOutcome = Err(ValidationError::MissingInstanceId.into());

        assert_eq!(
            render(&outcome),
            "{\n  \"error\": \"idInstance is required\",\n  \"details\": \"ValidationError: idInstance is required\"\n}"
        );
    }

    #[test]
    fn transport_error_message_lands_in_error_key() {
        let outcome: ActionOutcome =
            Err(TransportError::Request("dns lookup failed".into()).into());

        let rendered: Value =
            serde_json::from_str(&render(&outcome)).expect("rendered text is JSON");

        let object = rendered.as_object().expect("error renders as an object");
        assert_eq!(object.len(), 2);
        assert!(object["error"]
            .as_str()
            .is_some_and(|message| message.contains("dns lookup failed")));
        assert!(object["details"].is_string());
    }

    #[test]
    fn completed_action_flags_errors() {
        let ok = complete(ApiAction::GetSettings, &Ok(json!({})));
        let failed = complete(
            ApiAction::SendMessage,
            &Err(ValidationError::MissingMessageText.into()),
        );

        assert!(!ok.is_error);
        assert!(failed.is_error);
        assert_eq!(failed.action, ApiAction::SendMessage);
        assert!(failed.text.contains("Message text is required"));
    }
}
