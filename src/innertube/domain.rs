//! Internal domain models for resolved bootstrap configuration.
//!
//! These types are OUR types - they don't change when the bootstrap page changes.
//! The decoded `ytcfg` document gets converted into these types via the adapter.

use super::profile::ClientProfile;

/// Dynamic per-profile configuration scraped from a bootstrap page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfiguration {
    /// Player script URL (may be relative to the bootstrap host)
    pub player_script_url: Option<String>,
    /// Visitor id issued by the server for this session
    pub visitor_id: Option<String>,
    /// The server's own echoed client context
    pub raw_context: Option<ClientProfile>,
    /// Names of the player context sub-configs present in the document
    pub context_config_names: Vec<String>,
}

/// Errors that can occur while fetching a bootstrap configuration.
///
/// All of these are transient from the caller's point of view: the fetcher
/// logs them and reports "no configuration available".
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("No ytcfg.set call found in bootstrap page")]
    ConfigNotFound,

    #[error("Failed to parse bootstrap config: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Whether the error came from the transport rather than the page content.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::HttpStatus { .. } | Self::Client(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_is_empty() {
        let config = ResolvedConfiguration::default();
        assert!(config.player_script_url.is_none());
        assert!(config.visitor_id.is_none());
        assert!(config.raw_context.is_none());
        assert!(config.context_config_names.is_empty());
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::HttpStatus {
            status: 503,
            url: "https://music.youtube.com/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("music.youtube.com"));
    }

    #[test]
    fn test_transport_classification() {
        assert!(FetchError::Network("reset".to_string()).is_transport());
        assert!(!FetchError::ConfigNotFound.is_transport());
        assert!(!FetchError::Parse("eof".to_string()).is_transport());
    }
}
