//! Transport seam for bootstrap page fetches.
//!
//! The fetcher only needs "GET this URL with this user agent and give me the
//! body", so that is all the trait asks for. Production code uses
//! [`HttpTransport`](super::client::HttpTransport); tests substitute the mocks
//! below and count invocations.

use async_trait::async_trait;

use super::domain::FetchError;

/// Fetches bootstrap pages.
#[async_trait]
pub trait BootstrapTransport: Send + Sync {
    /// GET `url` and return the response body as text.
    ///
    /// Non-2xx responses must be reported as errors.
    async fn fetch_page(&self, url: &str, user_agent: Option<&str>) -> Result<String, FetchError>;
}

#[async_trait]
impl BootstrapTransport for super::client::HttpTransport {
    async fn fetch_page(&self, url: &str, user_agent: Option<&str>) -> Result<String, FetchError> {
        self.get_text(url, user_agent).await
    }
}
