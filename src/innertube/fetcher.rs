//! Lazy, single-flight bootstrap configuration fetcher.
//!
//! Each [`ClientProfile`] instance owns one configuration slot. The first
//! caller to ask for a profile's configuration performs the fetch; callers
//! that arrive while it is in flight wait for it and share its outcome.
//! A success is cached for the lifetime of the profile instance. A failure
//! is logged and reported as `None`, and the next caller may try again.

use std::sync::Arc;
use std::time::Duration;

use super::adapter;
use super::client::HttpTransport;
use super::domain::{FetchError, ResolvedConfiguration};
use super::profile::ClientProfile;
use super::traits::BootstrapTransport;

/// Resolves per-profile dynamic configuration from bootstrap pages
#[derive(Clone)]
pub struct ConfigurationFetcher {
    transport: Arc<dyn BootstrapTransport>,
}

impl ConfigurationFetcher {
    /// Create a fetcher over any transport
    pub fn new(transport: Arc<dyn BootstrapTransport>) -> Self {
        Self { transport }
    }

    /// Create a fetcher over HTTP with the default timeout
    pub fn http() -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(HttpTransport::new()?)))
    }

    /// Create a fetcher over HTTP with a custom request timeout
    pub fn http_with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(HttpTransport::with_timeout(timeout)?)))
    }

    /// Get the profile's configuration, fetching it on first use.
    ///
    /// Never fails: any fetch error is logged and reported as `None`.
    pub async fn get_configuration(
        &self,
        profile: &ClientProfile,
    ) -> Option<Arc<ResolvedConfiguration>> {
        if let Some(config) = profile.configuration.get() {
            tracing::trace!(client = profile.name(), "Bootstrap config cache hit");
            return Some(config);
        }

        profile
            .configuration
            .get_or_populate(|| async {
                match self.fetch(profile).await {
                    Ok(config) => {
                        tracing::info!(
                            client = profile.name(),
                            url = profile.bootstrap_url(),
                            has_visitor_id = config.visitor_id.is_some(),
                            "Resolved bootstrap config"
                        );
                        Some(config)
                    }
                    Err(e) if e.is_transport() => {
                        tracing::warn!(
                            client = profile.name(),
                            url = profile.bootstrap_url(),
                            "Bootstrap config fetch failed: {}",
                            e
                        );
                        None
                    }
                    Err(e) => {
                        tracing::warn!(
                            client = profile.name(),
                            url = profile.bootstrap_url(),
                            "Bootstrap page has no usable config: {}",
                            e
                        );
                        None
                    }
                }
            })
            .await
    }

    /// The already-resolved configuration, without any network I/O.
    pub fn cached_configuration(
        &self,
        profile: &ClientProfile,
    ) -> Option<Arc<ResolvedConfiguration>> {
        profile.configuration.get()
    }

    /// Perform one fetch-extract-decode cycle.
    async fn fetch(&self, profile: &ClientProfile) -> Result<ResolvedConfiguration, FetchError> {
        let url = profile.bootstrap_url();
        tracing::debug!(client = profile.name(), url, "Fetching bootstrap page");

        let page = self.transport.fetch_page(url, profile.user_agent()).await?;
        let config = adapter::parse_bootstrap_page(&page)?;
        Ok(adapter::to_resolved(config))
    }
}

impl std::fmt::Debug for ConfigurationFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationFetcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innertube::traits::mocks::{MockTransport, RecordedRequest};
    use crate::test_utils::{bootstrap_page, page_without_config, test_profile};

    fn fetcher_for(mock: &Arc<MockTransport>) -> ConfigurationFetcher {
        ConfigurationFetcher::new(mock.clone())
    }

    #[tokio::test]
    async fn test_fetches_once_then_caches() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("abc123")));
        let fetcher = fetcher_for(&mock);
        let profile = test_profile();

        for _ in 0..5 {
            let config = fetcher.get_configuration(&profile).await.unwrap();
            assert_eq!(config.visitor_id.as_deref(), Some("abc123"));
        }

        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_requests_bootstrap_url_with_user_agent() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("v")));
        let fetcher = fetcher_for(&mock);

        fetcher.get_configuration(&test_profile()).await;

        assert_eq!(
            mock.requests(),
            vec![RecordedRequest {
                url: "https://music.youtube.com/".to_string(),
                user_agent: Some("TestAgent/1.0".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_no_user_agent_when_profile_has_none() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("v")));
        let fetcher = fetcher_for(&mock);
        let profile = ClientProfile::new("WEB", "2.0");

        fetcher.get_configuration(&profile).await;

        let requests = mock.requests();
        assert_eq!(requests[0].url, "https://www.youtube.com/");
        assert!(requests[0].user_agent.is_none());
    }

    #[tokio::test]
    async fn test_missing_config_reports_none() {
        let mock = Arc::new(MockTransport::serving(page_without_config()));
        let fetcher = fetcher_for(&mock);
        let profile = test_profile();

        assert!(fetcher.get_configuration(&profile).await.is_none());
        assert!(fetcher.cached_configuration(&profile).is_none());
    }

    #[tokio::test]
    async fn test_failure_does_not_poison_cache() {
        let mock = Arc::new(MockTransport::scripted(vec![
            Err(FetchError::Network("connection reset".to_string())),
            Ok(bootstrap_page("after-retry")),
        ]));
        let fetcher = fetcher_for(&mock);
        let profile = test_profile();

        assert!(fetcher.get_configuration(&profile).await.is_none());

        let config = fetcher.get_configuration(&profile).await.unwrap();
        assert_eq!(config.visitor_id.as_deref(), Some("after-retry"));
        assert_eq!(mock.calls(), 2);

        // And now it is cached
        fetcher.get_configuration(&profile).await;
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_http_status_failure_reports_none() {
        let mock = Arc::new(MockTransport::failing(FetchError::HttpStatus {
            status: 429,
            url: "https://music.youtube.com/".to_string(),
        }));
        let fetcher = fetcher_for(&mock);

        assert!(fetcher.get_configuration(&test_profile()).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let mock = Arc::new(
            MockTransport::serving(bootstrap_page("shared"))
                .with_delay(Duration::from_millis(50)),
        );
        let fetcher = fetcher_for(&mock);
        let profile = test_profile();

        let calls = (0..10).map(|_| fetcher.get_configuration(&profile));
        let results = futures::future::join_all(calls).await;

        assert_eq!(mock.calls(), 1);
        for result in results {
            assert_eq!(result.unwrap().visitor_id.as_deref(), Some("shared"));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_tasks_share_one_fetch() {
        let mock = Arc::new(
            MockTransport::serving(bootstrap_page("threads"))
                .with_delay(Duration::from_millis(50)),
        );
        let fetcher = fetcher_for(&mock);
        let profile = Arc::new(test_profile());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let fetcher = fetcher.clone();
                let profile = Arc::clone(&profile);
                tokio::spawn(async move { fetcher.get_configuration(&profile).await })
            })
            .collect();

        for handle in handles {
            let config = handle.await.unwrap().unwrap();
            assert_eq!(config.visitor_id.as_deref(), Some("threads"));
        }
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_failure() {
        let mock = Arc::new(
            MockTransport::scripted(vec![
                Err(FetchError::Network("timeout".to_string())),
                Ok(bootstrap_page("later")),
            ])
            .with_delay(Duration::from_millis(50)),
        );
        let fetcher = fetcher_for(&mock);
        let profile = test_profile();

        let calls = (0..6).map(|_| fetcher.get_configuration(&profile));
        let results = futures::future::join_all(calls).await;

        assert_eq!(mock.calls(), 1);
        assert!(results.iter().all(Option::is_none));

        let config = fetcher.get_configuration(&profile).await.unwrap();
        assert_eq!(config.visitor_id.as_deref(), Some("later"));
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_profiles_have_independent_slots() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("v")));
        let fetcher = fetcher_for(&mock);
        let first = test_profile();
        let second = first.clone();

        fetcher.get_configuration(&first).await;
        assert!(fetcher.cached_configuration(&second).is_none());

        fetcher.get_configuration(&second).await;
        assert_eq!(mock.calls(), 2);
    }
}
