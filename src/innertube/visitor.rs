//! Visitor id resolution.
//!
//! Order, first present value wins:
//! 1. `VISITOR_DATA` from the resolved bootstrap config
//! 2. the visitor id inside the server's echoed client context
//! 3. the profile's static default
//!
//! Empty strings count as absent at every step.

use super::domain::ResolvedConfiguration;
use super::fetcher::ConfigurationFetcher;
use super::profile::ClientProfile;

/// Pick the visitor id from a (possibly absent) config and the profile's fallback.
pub fn select_visitor_id(
    config: Option<&ResolvedConfiguration>,
    profile: &ClientProfile,
) -> Option<String> {
    let fresh = config.and_then(|c| c.visitor_id.as_deref());
    let echoed = config
        .and_then(|c| c.raw_context.as_ref())
        .and_then(|context| context.default_visitor_id());

    [fresh, echoed, profile.default_visitor_id()]
        .into_iter()
        .flatten()
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

impl ClientProfile {
    /// The visitor id from whatever is already resolved. Never touches the network.
    pub fn visitor_id(&self) -> Option<String> {
        let config = self.configuration.get();
        select_visitor_id(config.as_deref(), self)
    }
}

impl ConfigurationFetcher {
    /// Resolve the visitor id, fetching the bootstrap config on first use.
    pub async fn resolve_visitor_id(&self, profile: &ClientProfile) -> Option<String> {
        let config = self.get_configuration(profile).await;
        let visitor_id = select_visitor_id(config.as_deref(), profile);
        if visitor_id.is_none() {
            tracing::debug!(client = profile.name(), "No visitor id available");
        }
        visitor_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innertube::domain::FetchError;
    use crate::innertube::traits::mocks::MockTransport;
    use crate::test_utils::{
        bootstrap_page, page_with_context_visitor, page_without_config, test_profile,
    };
    use std::sync::Arc;
    use std::time::Duration;

    fn fetcher(mock: &Arc<MockTransport>) -> ConfigurationFetcher {
        ConfigurationFetcher::new(mock.clone())
    }

    #[test]
    fn test_select_prefers_fresh() {
        let config = ResolvedConfiguration {
            visitor_id: Some("fresh".to_string()),
            raw_context: Some(ClientProfile::new("WEB", "2.0").with_default_visitor_id("echoed")),
            ..Default::default()
        };
        let profile = test_profile().with_default_visitor_id("static");
        assert_eq!(
            select_visitor_id(Some(&config), &profile).as_deref(),
            Some("fresh")
        );
    }

    #[test]
    fn test_select_falls_back_to_echoed_context() {
        let config = ResolvedConfiguration {
            raw_context: Some(ClientProfile::new("WEB", "2.0").with_default_visitor_id("echoed")),
            ..Default::default()
        };
        let profile = test_profile().with_default_visitor_id("static");
        assert_eq!(
            select_visitor_id(Some(&config), &profile).as_deref(),
            Some("echoed")
        );
    }

    #[test]
    fn test_select_skips_empty_values() {
        let config = ResolvedConfiguration {
            visitor_id: Some(String::new()),
            ..Default::default()
        };
        let profile = test_profile().with_default_visitor_id("static");
        assert_eq!(
            select_visitor_id(Some(&config), &profile).as_deref(),
            Some("static")
        );
    }

    #[test]
    fn test_select_without_anything() {
        assert!(select_visitor_id(None, &test_profile()).is_none());
    }

    #[test]
    fn test_cached_visitor_id_uses_static_before_fetch() {
        let profile = test_profile().with_default_visitor_id("static1");
        assert_eq!(profile.visitor_id().as_deref(), Some("static1"));
    }

    #[tokio::test]
    async fn test_fresh_wins_over_static() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("fresh1")));
        let profile = test_profile().with_default_visitor_id("static1");

        let id = fetcher(&mock).resolve_visitor_id(&profile).await;
        assert_eq!(id.as_deref(), Some("fresh1"));
        // The cached accessor now sees the fetched value too
        assert_eq!(profile.visitor_id().as_deref(), Some("fresh1"));
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_to_static() {
        let mock = Arc::new(MockTransport::failing(FetchError::Network(
            "offline".to_string(),
        )));
        let profile = test_profile().with_default_visitor_id("static1");

        let id = fetcher(&mock).resolve_visitor_id(&profile).await;
        assert_eq!(id.as_deref(), Some("static1"));
    }

    #[tokio::test]
    async fn test_missing_config_without_default_is_none() {
        let mock = Arc::new(MockTransport::serving(page_without_config()));

        let id = fetcher(&mock).resolve_visitor_id(&test_profile()).await;
        assert!(id.is_none());
    }

    #[tokio::test]
    async fn test_missing_config_with_default() {
        let mock = Arc::new(MockTransport::serving(page_without_config()));
        let profile = test_profile().with_default_visitor_id("baked-in");

        let id = fetcher(&mock).resolve_visitor_id(&profile).await;
        assert_eq!(id.as_deref(), Some("baked-in"));
    }

    #[tokio::test]
    async fn test_echoed_context_visitor() {
        let mock = Arc::new(MockTransport::serving(page_with_context_visitor("ctx-1")));
        let profile = test_profile().with_default_visitor_id("static1");

        let id = fetcher(&mock).resolve_visitor_id(&profile).await;
        assert_eq!(id.as_deref(), Some("ctx-1"));
    }

    #[tokio::test]
    async fn test_concurrent_resolution_fetches_once() {
        let mock = Arc::new(
            MockTransport::serving(bootstrap_page("one")).with_delay(Duration::from_millis(30)),
        );
        let fetcher = fetcher(&mock);
        let profile = test_profile();

        let ids =
            futures::future::join_all((0..12).map(|_| fetcher.resolve_visitor_id(&profile))).await;

        assert_eq!(mock.calls(), 1);
        assert!(ids.iter().all(|id| id.as_deref() == Some("one")));
    }

    #[tokio::test]
    async fn test_repeated_resolution_fetches_once() {
        let mock = Arc::new(MockTransport::serving(bootstrap_page("once")));
        let fetcher = fetcher(&mock);
        let profile = test_profile();

        for _ in 0..10 {
            fetcher.resolve_visitor_id(&profile).await;
        }
        assert_eq!(mock.calls(), 1);
    }
}
