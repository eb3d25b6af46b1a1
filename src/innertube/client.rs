//! Bootstrap page HTTP client
//!
//! Plain GET of the bootstrap page. The profile's own user agent is sent per
//! request (the page content differs by client), so the underlying
//! `reqwest::Client` carries no default user agent.
//!
//! The timeout also bounds how long callers queued on a profile's fetch wait.

use std::time::Duration;

use reqwest::header::USER_AGENT;

use super::domain::FetchError;

/// Default timeout for a bootstrap page fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP transport for bootstrap pages
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET a page and return its body
    pub async fn get_text(&self, url: &str, user_agent: Option<&str>) -> Result<String, FetchError> {
        let mut request = self.http_client.get(url);
        if let Some(user_agent) = user_agent {
            request = request.header(USER_AGENT, user_agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_custom_timeout() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(3)).unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::with_timeout(Duration::from_millis(500)).unwrap();
        // Port 9 on localhost: nothing listens there in test environments
        let result = transport.get_text("http://127.0.0.1:9/", None).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
