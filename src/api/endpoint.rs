use crate::{
    domain::{action::ApiAction, credentials::Credentials},
    infra::secrets::redact_secret,
};

/// Fixed base origin plus the per-action path template
/// `/waInstance{instanceId}/{method}/{token}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, credentials: &Credentials, action: ApiAction) -> String {
        format!(
            "{}/waInstance{}/{}/{}",
            self.base_url,
            credentials.instance_id,
            action.method_name(),
            credentials.token
        )
    }

    /// Same as [`Endpoint::url`] with the token scrubbed, for logs.
    pub fn redacted_url(&self, credentials: &Credentials, action: ApiAction) -> String {
        redact_secret(&self.url(credentials, action), &credentials.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("1101000001", "d75b3a66374942c5b3c019c698abc2067e15")
    }

    #[test]
    fn builds_url_for_every_action() {
        let endpoint = Endpoint::new("https://api.green-api.com");

        let urls: Vec<String> = ApiAction::ALL
            .into_iter()
            .map(|action| endpoint.url(&credentials(), action))
            .collect();

        assert_eq!(
            urls,
            [
                "https://api.green-api.com/waInstance1101000001/getSettings/d75b3a66374942c5b3c019c698abc2067e15",
                "https://api.green-api.com/waInstance1101000001/getStateInstance/d75b3a66374942c5b3c019c698abc2067e15",
                "https://api.green-api.com/waInstance1101000001/sendMessage/d75b3a66374942c5b3c019c698abc2067e15",
                "https://api.green-api.com/waInstance1101000001/sendFileByUrl/d75b3a66374942c5b3c019c698abc2067e15",
            ]
        );
    }

    #[test]
    fn trailing_slash_in_base_is_dropped() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080/");

        assert_eq!(endpoint.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn redacted_url_hides_token() {
        let endpoint = Endpoint::new("https://api.green-api.com");

        let url = endpoint.redacted_url(&credentials(), ApiAction::SendMessage);

        assert_eq!(
            url,
            "https://api.green-api.com/waInstance1101000001/sendMessage/[REDACTED]"
        );
    }
}
