use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{EmbeddingRequest, EmbeddingResponse};

use reqwest::{Client, Url};
use tracing::{debug, instrument};

/// Holds the one HTTP connection pool for the whole session.
pub struct EmbeddingClient {
    http: Client,
    url: Url,
    model: String,
}

impl EmbeddingClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url: config.url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Posts `input` verbatim and decodes the reply.
    #[instrument(skip(self, input), fields(input_len = input.len()), name = "Embed")]
    pub async fn embed(&self, input: &str) -> Result<EmbeddingResponse> {
        let request = EmbeddingRequest {
            model: &self.model,
            input,
        };

        let response = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("Embedding server responded with {}", status);
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        let decoded: EmbeddingResponse = serde_json::from_slice(&body)?;
        debug!(
            "Decoded {} bytes, server model {:?}",
            body.len(),
            decoded.model
        );
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config_for(url: &str) -> Config {
        Config {
            url: url.parse().unwrap(),
            model: "bge-m3".to_string(),
            timeout_secs: None,
            verbose: false,
        }
    }

    #[tokio::test]
    async fn posts_model_and_raw_input() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/embed")
                    .json_body(json!({ "model": "bge-m3", "input": "  Hello there " }));
                then.status(200)
                    .json_body(json!({ "model": "bge-m3", "embeddings": [[0.5, -0.25]] }));
            })
            .await;

        let client = EmbeddingClient::new(&config_for(&server.url("/api/embed"))).unwrap();
        let response = client.embed("  Hello there ").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.first_embedding(), Some(&[0.5, -0.25][..]));
    }

    #[tokio::test]
    async fn server_error_is_a_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/embed");
                then.status(500).body("model not found");
            })
            .await;

        let client = EmbeddingClient::new(&config_for(&server.url("/api/embed"))).unwrap();
        let err = client.embed("text").await.unwrap_err();

        assert!(matches!(err, Error::Status(status) if status.as_u16() == 500));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/embed");
                then.status(200).body("{\"embeddings\": [[1.0,");
            })
            .await;

        let client = EmbeddingClient::new(&config_for(&server.url("/api/embed"))).unwrap();
        let err = client.embed("text").await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            EmbeddingClient::new(&config_for(&format!("http://{addr}/api/embed"))).unwrap();
        let err = client.embed("text").await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    }
}
