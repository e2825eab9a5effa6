use super::error::TransportError;
use super::transport::Transport;
use gloo_net::http::Request;

/// `fetch`-backed transport for the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Browser;

#[async_trait::async_trait(?Send)]
impl Transport for Browser {
    async fn post(&self, url: &str, body: String) -> Result<String, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        if !response.ok() {
            log::warn!("POST {} returned {}", url, response.status());
            return Err(TransportError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }
}
