use super::error::TransportError;
use super::transport::Transport;

/// Native transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct Http {
    client: reqwest::Client,
}

#[async_trait::async_trait(?Send)]
impl Transport for Http {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("POST {} returned {}", url, status);
            return Err(TransportError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}
