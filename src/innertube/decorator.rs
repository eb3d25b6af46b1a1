//! Applies a profile's identity to outgoing API requests.
//!
//! Every value is optional: an absent (or empty) field means the header or
//! query parameter is not attached at all, never sent empty.

use reqwest::RequestBuilder;
use reqwest::header::{HeaderName, REFERER, USER_AGENT};

use super::fetcher::ConfigurationFetcher;
use super::profile::ClientProfile;

pub const BOOTSTRAP_LOGGED_IN: HeaderName =
    HeaderName::from_static("x-youtube-bootstrap-logged-in");
pub const CLIENT_NAME: HeaderName = HeaderName::from_static("x-youtube-client-name");
pub const CLIENT_VERSION: HeaderName = HeaderName::from_static("x-youtube-client-version");
pub const API_KEY: HeaderName = HeaderName::from_static("x-goog-api-key");
pub const VISITOR_ID: HeaderName = HeaderName::from_static("x-goog-visitor-id");

/// Query parameter carrying the API key
pub const API_KEY_PARAM: &str = "key";

/// The headers and query parameters a profile contributes to a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDecoration {
    pub headers: Vec<(HeaderName, String)>,
    pub query: Vec<(&'static str, String)>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl RequestDecoration {
    /// Compute the decoration for `profile` with an already-resolved visitor id.
    pub fn for_profile(profile: &ClientProfile, visitor_id: Option<&str>) -> Self {
        let mut decoration = Self::default();

        if let Some(user_agent) = present(profile.user_agent()) {
            decoration.header(USER_AGENT, user_agent);
        }
        if let Some(referer) = present(profile.referer()) {
            decoration.header(REFERER, referer);
        }
        decoration.header(BOOTSTRAP_LOGGED_IN, "false");
        if profile.client_id() != 0 {
            decoration.header(CLIENT_NAME, profile.client_id().to_string());
        }
        if let Some(version) = present(Some(profile.version())) {
            decoration.header(CLIENT_VERSION, version);
        }
        if let Some(api_key) = present(profile.api_key()) {
            decoration.header(API_KEY, api_key);
        }
        if let Some(visitor_id) = present(visitor_id) {
            decoration.header(VISITOR_ID, visitor_id);
        }
        if let Some(api_key) = present(profile.api_key()) {
            decoration.query.push((API_KEY_PARAM, api_key.to_string()));
        }

        decoration
    }

    fn header(&mut self, name: HeaderName, value: impl Into<String>) {
        self.headers.push((name, value.into()));
    }

    /// Look up a header value by name.
    pub fn header_value(&self, name: &HeaderName) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attach everything to a request builder.
    pub fn apply(self, mut request: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.headers {
            request = request.header(name, value);
        }
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        request
    }
}

/// Decorate a request using only what is already resolved. No network I/O.
pub fn decorate(profile: &ClientProfile, request: RequestBuilder) -> RequestBuilder {
    let visitor_id = profile.visitor_id();
    RequestDecoration::for_profile(profile, visitor_id.as_deref()).apply(request)
}

/// Decorate a request after resolving the visitor id.
///
/// The first call for a profile instance may wait on its bootstrap fetch.
/// If that fetch fails, the request is still decorated from static fields.
pub async fn decorate_resolved(
    fetcher: &ConfigurationFetcher,
    profile: &ClientProfile,
    request: RequestBuilder,
) -> RequestBuilder {
    let visitor_id = fetcher.resolve_visitor_id(profile).await;
    RequestDecoration::for_profile(profile, visitor_id.as_deref()).apply(request)
}
