use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock generate server for testing the streaming client
pub struct GenerateMockServer {
    server: MockServer,
}

impl GenerateMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Respond to a streaming request for `model` with `body` as-is
    pub async fn mock_stream(&self, model: &str, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "model": model,
                "stream": true
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/x-ndjson")
                    .set_body_string(body),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Respond with an NDJSON body built from `pieces`, closed by a done marker
    pub async fn mock_ndjson(&self, model: &str, pieces: &[&str]) {
        let mut body = String::new();
        for piece in pieces {
            body.push_str(&json!({ "model": model, "response": piece, "done": false }).to_string());
            body.push('\n');
        }
        body.push_str(&json!({ "model": model, "response": "", "done": true }).to_string());
        body.push('\n');

        self.mock_stream(model, &body).await;
    }

    /// Mock a server-side failure
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": message
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a bodyless success such as 204 No Content
    pub async fn mock_bodyless(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }
}
