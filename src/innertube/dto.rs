//! Bootstrap configuration Data Transfer Objects
//!
//! These types match the object passed to `ytcfg.set(...)` on the bootstrap page.
//! Only the keys this crate reads are modelled; everything else is ignored.
//! DO NOT use these types outside the innertube module - convert to domain types.
//!
//! Example (heavily trimmed):
//! ```json
//! {
//!   "PLAYER_JS_URL": "/s/player/abc123/player_ias.vflset/en_US/base.js",
//!   "WEB_PLAYER_CONTEXT_CONFIGS": {
//!     "WEB_PLAYER_CONTEXT_CONFIG_ID_MUSIC_WATCH": { "jsUrl": "/s/player/abc123/base.js" }
//!   },
//!   "VISITOR_DATA": "CgtBQnlVMnBiVFJPYyiD...",
//!   "INNERTUBE_CONTEXT": {
//!     "client": { "clientName": "WEB_REMIX", "clientVersion": "1.20250310.01.00", "visitorData": "..." }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::profile::Context;

/// The decoded `ytcfg.set` argument
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BootstrapConfig {
    #[serde(rename = "PLAYER_JS_URL", skip_serializing_if = "Option::is_none")]
    pub player_url: Option<String>,

    /// Named player context configs (ordered by key for stable fallback)
    #[serde(
        rename = "WEB_PLAYER_CONTEXT_CONFIGS",
        skip_serializing_if = "Option::is_none"
    )]
    pub context_configs: Option<BTreeMap<String, ContextConfig>>,

    #[serde(rename = "VISITOR_DATA", skip_serializing_if = "Option::is_none")]
    pub visitor_data: Option<String>,

    /// The server's echoed request context
    #[serde(rename = "INNERTUBE_CONTEXT", skip_serializing_if = "Option::is_none")]
    pub innertube_context: Option<Context>,
}

/// A single player context config entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextConfig {
    #[serde(rename = "jsUrl", skip_serializing_if = "Option::is_none")]
    pub js_url: Option<String>,
}
