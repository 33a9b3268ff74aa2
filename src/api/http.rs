use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{action::HttpMethod, credentials::Credentials, request::ActionRequest},
    infra::error::AppError,
    usecases::contracts::{ApiTransport, TransportError},
};

use super::Endpoint;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Live transport: one HTTP request per call against the configured origin.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpTransport {
    pub fn new(endpoint: Endpoint) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(AppError::HttpClient)?;

        tracing::debug!(base_url = %endpoint.base_url(), "http transport ready");
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn call(
        &self,
        credentials: &Credentials,
        request: &ActionRequest,
    ) -> Result<Value, TransportError> {
        let action = request.action();
        let url = self.endpoint.url(credentials, action);

        let builder = self.client.request(wire_method(action.http_method()), &url);
        let builder = match request {
            ActionRequest::GetSettings | ActionRequest::GetStateInstance => builder,
            ActionRequest::SendMessage(payload) => builder.json(payload),
            ActionRequest::SendFileByUrl(payload) => builder.json(payload),
        };

        tracing::debug!(
            action = %action,
            url = %self.endpoint.redacted_url(credentials, action),
            "sending request"
        );

        let response = builder.send().await.map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        tracing::debug!(
            action = %action,
            status = status.as_u16(),
            body_len = body.len(),
            "response received"
        );

        // The body is shown as-is whatever the status; only non-JSON is an error.
        serde_json::from_str(&body).map_err(|source| TransportError::InvalidBody {
            status: status.as_u16(),
            source,
        })
    }
}

fn wire_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    }
}

// The request URL embeds the token, so it is stripped before the error travels on.
fn request_error(error: reqwest::Error) -> TransportError {
    TransportError::Request(Box::new(error.without_url()))
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
        Json, Router,
    };
    use serde_json::json;

    use super::*;
    use crate::domain::request::{ChatId, SendFileByUrlPayload, SendMessagePayload};

    const TOKEN: &str = "d75b3a66374942c5b3c019c698abc2067e15";

    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(Value::String(body))
        };
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "contentType": content_type,
            "body": body,
        }))
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test listener should bind");
        let addr = listener.local_addr().expect("listener has an address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(Endpoint::new(base_url)).expect("client should build")
    }

    fn credentials() -> Credentials {
        Credentials::new("1101000001", TOKEN)
    }

    #[test]
    fn wire_method_follows_action_verb() {
        assert_eq!(wire_method(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(wire_method(HttpMethod::Post), reqwest::Method::POST);
    }

    #[tokio::test]
    async fn read_actions_issue_bodyless_get() {
        let base = serve(Router::new().fallback(echo)).await;

        let value = transport(&base)
            .call(&credentials(), &ActionRequest::GetSettings)
            .await
            .expect("call succeeds");

        assert_eq!(value["method"], json!("GET"));
        assert_eq!(
            value["path"],
            json!(format!("/waInstance1101000001/getSettings/{TOKEN}"))
        );
        assert_eq!(value["body"], Value::Null);
    }

    #[tokio::test]
    async fn send_message_posts_json_payload() {
        let base = serve(Router::new().fallback(echo)).await;
        let request = ActionRequest::SendMessage(SendMessagePayload {
            chat_id: ChatId::from_phone("79001234567"),
            message: "hello".to_owned(),
        });

        let value = transport(&base)
            .call(&credentials(), &request)
            .await
            .expect("call succeeds");

        assert_eq!(value["method"], json!("POST"));
        assert_eq!(
            value["path"],
            json!(format!("/waInstance1101000001/sendMessage/{TOKEN}"))
        );
        assert_eq!(value["contentType"], json!("application/json"));
        assert_eq!(
            value["body"],
            json!({ "chatId": "79001234567@c.us", "message": "hello" })
        );
    }

    #[tokio::test]
    async fn send_file_posts_json_payload() {
        let base = serve(Router::new().fallback(echo)).await;
        let request = ActionRequest::SendFileByUrl(SendFileByUrlPayload {
            chat_id: ChatId::from_phone("79001234567"),
            url_file: "https://example.com/horse.png".to_owned(),
            file_name: "horse.png".to_owned(),
        });

        let value = transport(&base)
            .call(&credentials(), &request)
            .await
            .expect("call succeeds");

        assert_eq!(
            value["path"],
            json!(format!("/waInstance1101000001/sendFileByUrl/{TOKEN}"))
        );
        assert_eq!(
            value["body"],
            json!({
                "chatId": "79001234567@c.us",
                "urlFile": "https://example.com/horse.png",
                "fileName": "horse.png"
            })
        );
    }

    #[tokio::test]
    async fn json_error_bodies_are_returned_verbatim() {
        let app = Router::new().fallback(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": 400, "description": "Validation failed" })),
            )
        });
        let base = serve(app).await;

        let value = transport(&base)
            .call(&credentials(), &ActionRequest::GetStateInstance)
            .await
            .expect("JSON body is a result even on 400");

        assert_eq!(value, json!({ "code": 400, "description": "Validation failed" }));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let app = Router::new()
            .fallback(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") });
        let base = serve(app).await;

        let error = transport(&base)
            .call(&credentials(), &ActionRequest::GetSettings)
            .await
            .expect_err("HTML is not JSON");

        assert!(matches!(
            error,
            TransportError::InvalidBody { status: 502, .. }
        ));
    }

    #[tokio::test]
    async fn unreachable_host_error_does_not_leak_token() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("test listener should bind");
        let addr = listener.local_addr().expect("listener has an address");
        drop(listener);

        let error = transport(&format!("http://{addr}"))
            .call(&credentials(), &ActionRequest::GetSettings)
            .await
            .expect_err("nothing listens on the port");

        assert!(matches!(error, TransportError::Request(_)));
        assert!(!error.to_string().contains(TOKEN));
        assert!(!format!("{error:?}").contains(TOKEN));
    }
}
