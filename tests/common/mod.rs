#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SUCCESS_BODY: &str =
    r#"{"created":1,"data":[{"url":"http://x","revised_prompt":"r"}]}"#;
pub const ERROR_BODY: &str = r#"{"error":{"message":"bad prompt"}}"#;

pub fn success_json() -> Value {
    json!({
        "created": 1700000000,
        "data": [
            {
                "url": "https://images.example.com/fox.png",
                "revised_prompt": "A red fox standing in fresh snow"
            }
        ]
    })
}

/// Starts a server answering every generations request with `status` and `body`.
pub async fn setup_mock_server(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    server
}

/// An environment lookup backed by a fixed list of variables.
pub fn env_from(vars: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    move |name| {
        vars.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}
