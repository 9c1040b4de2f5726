use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use tabletalk_models::query::{EngineReply, EngineRequest, TablePayload};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("query engine request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("query engine returned {status}: {message}")]
    Engine { status: u16, message: String },

    #[error("query engine reply could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The external language-model-backed query engine. Everything hard —
/// understanding the question, generating and running a program over the
/// table — happens on the other side of this trait.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn ask(&self, question: &str, table: &TablePayload) -> Result<EngineReply, EngineError>;
}

pub struct HttpQueryEngine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpQueryEngine {
    pub fn new(client: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl QueryEngine for HttpQueryEngine {
    async fn ask(&self, question: &str, table: &TablePayload) -> Result<EngineReply, EngineError> {
        let url = format!("{}/api/v1/ask", self.base_url);
        let body = EngineRequest {
            question: question.to_string(),
            table: table.clone(),
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EngineError::Engine {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletalk_models::query::EngineResult;

    fn sample_table() -> TablePayload {
        TablePayload {
            columns: vec!["city".to_string()],
            rows: vec![serde_json::json!({"city": "Oslo"})],
        }
    }

    #[tokio::test]
    async fn test_ask_decodes_typed_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/ask")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"result":{"type":"string","value":"one city"},"code":"len(df)"}"#)
            .create_async()
            .await;

        let engine = HttpQueryEngine::new(
            Client::new(),
            server.url(),
            Some("sk-test".to_string()),
        );
        let reply = engine.ask("how many cities?", &sample_table()).await.unwrap();

        assert!(matches!(reply.result, EngineResult::String(s) if s == "one city"));
        assert_eq!(reply.code.as_deref(), Some("len(df)"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_engine_failure_preserves_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/ask")
            .with_status(503)
            .with_body("model overloaded")
            .create_async()
            .await;

        let engine = HttpQueryEngine::new(Client::new(), server.url(), None);
        match engine.ask("anything", &sample_table()).await {
            Err(EngineError::Engine { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected engine error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/ask")
            .with_status(200)
            .with_body(r#"{"result":{"type":"hologram","value":1}}"#)
            .create_async()
            .await;

        let engine = HttpQueryEngine::new(Client::new(), server.url(), None);
        assert!(matches!(
            engine.ask("anything", &sample_table()).await,
            Err(EngineError::Decode(_))
        ));
    }
}
