//! Bootstrap page extraction and DTO -> domain conversion.
//!
//! ## Extraction contract
//!
//! The page embeds its config as `ytcfg.set({...})`. We take the FIRST such
//! call and capture its object argument non-greedily, i.e. up to the first
//! `}` that is followed (after optional whitespace) by `)`.
//!
//! This truncates when a string inside the object contains `})`. That is the
//! format the remote page has always been read with, so it is kept as-is
//! rather than replaced by a balanced-brace scanner. A truncated capture
//! fails to decode and is reported like any other missing config.

use std::sync::LazyLock;

use fancy_regex::Regex;

use super::domain::{FetchError, ResolvedConfiguration};
use super::dto;

static YTCFG_SET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ytcfg\.set\s*\(\s*(\{[\s\S]+?\})\s*\)").expect("ytcfg pattern is valid")
});

/// Find the `ytcfg.set` object literal in a bootstrap page.
pub fn extract_config_object(page: &str) -> Result<&str, FetchError> {
    let captures = YTCFG_SET
        .captures(page)
        .map_err(|e| FetchError::Parse(e.to_string()))?
        .ok_or(FetchError::ConfigNotFound)?;

    captures
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .ok_or(FetchError::ConfigNotFound)
}

/// Extract and decode the bootstrap config document from a page.
pub fn parse_bootstrap_page(page: &str) -> Result<dto::BootstrapConfig, FetchError> {
    let object = extract_config_object(page)?;
    serde_json::from_str(object).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Convert the decoded document to our domain type.
pub fn to_resolved(config: dto::BootstrapConfig) -> ResolvedConfiguration {
    let context_configs = config.context_configs.unwrap_or_default();

    // PLAYER_JS_URL first, then the first sub-config that names a script
    let player_script_url = config.player_url.or_else(|| {
        context_configs
            .values()
            .find_map(|c| c.js_url.clone())
    });

    ResolvedConfiguration {
        player_script_url,
        visitor_id: config.visitor_data,
        raw_context: config.innertube_context.map(|context| context.client),
        context_config_names: context_configs.into_keys().collect(),
    }
}
