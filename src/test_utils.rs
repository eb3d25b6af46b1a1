//! Test utilities and fixtures for innertube-context tests.
//!
//! Bootstrap page bodies shaped like the real ones (a `ytcfg.set` call buried
//! in script tags) and a small profile factory.
//!
//! # Example
//!
//! ```ignore
//! use innertube_context::test_utils::{bootstrap_page, test_profile};
//!
//! let page = bootstrap_page("visitor-1");
//! let profile = test_profile();
//! ```

use crate::innertube::ClientProfile;

/// A bootstrap page whose config carries `visitor_id` as `VISITOR_DATA`.
///
/// The echoed context also carries a (different) visitor id so tests can
/// tell which one was picked.
pub fn bootstrap_page(visitor_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<script nonce="n0">var ytcfg={{d:function(){{return window.yt&&yt.config_||ytcfg.data_||(ytcfg.data_={{}})}}}};</script>
<script nonce="n0">ytcfg.set({{"INNERTUBE_CONTEXT":{{"client":{{"clientName":"WEB_REMIX","clientVersion":"1.20250310.01.00","hl":"en","gl":"US","visitorData":"context-visitor"}},"user":{{"lockedSafetyMode":false}}}},"PLAYER_JS_URL":"/s/player/4fcd6e4a/player_ias.vflset/en_US/base.js","VISITOR_DATA":"{visitor_id}"}}); window.ytcfg.set('EMERGENCY_BASE_URL', '/error_204');</script>
</head><body></body></html>"#
    )
}

/// A bootstrap page whose only visitor id is inside the echoed context.
pub fn page_with_context_visitor(visitor_id: &str) -> String {
    format!(
        r#"<script>ytcfg.set({{"INNERTUBE_CONTEXT":{{"client":{{"clientName":"WEB","clientVersion":"2.20250312.04.00","visitorData":"{visitor_id}"}}}}}})</script>"#
    )
}

/// A page with no config at all (e.g. a consent interstitial).
pub fn page_without_config() -> String {
    "<html><body><form action=\"https://consent.youtube.com/save\"></form></body></html>"
        .to_string()
}

/// A minimal music profile with a user agent and no static visitor id.
pub fn test_profile() -> ClientProfile {
    ClientProfile::new("WEB_REMIX", "1.20250310.01.00")
        .with_client_id(67)
        .with_user_agent("TestAgent/1.0")
        .with_music(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innertube::adapter::{parse_bootstrap_page, to_resolved};

    #[test]
    fn test_bootstrap_page_parses() {
        let resolved = to_resolved(parse_bootstrap_page(&bootstrap_page("v1")).unwrap());
        assert_eq!(resolved.visitor_id.as_deref(), Some("v1"));
        assert!(resolved.player_script_url.is_some());
    }

    #[test]
    fn test_page_without_config_has_no_match() {
        assert!(parse_bootstrap_page(&page_without_config()).is_err());
    }

    #[test]
    fn test_profile_defaults() {
        let profile = test_profile();
        assert_eq!(profile.client_id(), 67);
        assert!(profile.default_visitor_id().is_none());
        assert!(profile.is_music());
    }
}
