use std::env;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::model::{ScriptResult, parse_search_response};

pub const DEFAULT_SCRIPTS_API_URL: &str = "https://scriptblox.com/api/script/search";
pub const DEFAULT_SCRIPTS_TIMEOUT_SECS: u64 = 10;

/// Every way the script provider can fail; all of them surface to users
/// as "provider unavailable".
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("script provider returned HTTP {0}")]
    Status(u16),

    #[error("script provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("script provider sent an unreadable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct ScriptsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScriptsClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        let endpoint = env::var("SCRIPTS_API_URL")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SCRIPTS_API_URL.to_owned());
        let timeout_secs = env::var("SCRIPTS_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_SCRIPTS_TIMEOUT_SECS);

        Self::new(endpoint, Duration::from_secs(timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one search. Failures are reported once; nothing is retried.
    pub async fn search(&self, query: &str) -> Result<Vec<ScriptResult>, ProviderError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        let scripts = parse_search_response(&payload);

        debug!(query, results = scripts.len(), "script search completed");
        Ok(scripts)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::{ProviderError, ScriptsClient};

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0_u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/api/script/search")
    }

    fn client(endpoint: String) -> ScriptsClient {
        ScriptsClient::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn decodes_successful_search() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"result":{"scripts":[{"title":"Fly","game":{"name":"Arsenal"},"views":10,"isVerified":false}]}}"#,
        )
        .await;

        let scripts = client(endpoint).search("fly").await.unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].title, "Fly");
        assert_eq!(scripts[0].game, "Arsenal");
    }

    #[tokio::test]
    async fn unavailable_status_is_reported() {
        let endpoint = serve_once("503 Service Unavailable", "{}").await;

        let error = client(endpoint).search("fly").await.unwrap_err();
        assert!(matches!(error, ProviderError::Status(503)));
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let endpoint = serve_once("200 OK", "<html>").await;

        let error = client(endpoint).search("fly").await.unwrap_err();
        assert!(matches!(error, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let error = client(format!("http://{addr}/"))
            .search("fly")
            .await
            .unwrap_err();
        assert!(matches!(error, ProviderError::Transport(_)));
    }
}
