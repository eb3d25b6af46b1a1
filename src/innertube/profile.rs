//! Client identity profiles and the request-body context that carries them.
//!
//! A [`ClientProfile`] describes one API consumer (web, iOS, TV...). Its
//! serialized form is the `client` object of every InnerTube request body,
//! so the serde names below are the wire names.

use serde::{Deserialize, Serialize};

use super::domain::ResolvedConfiguration;
use super::slot::SingleFlightSlot;

/// Bootstrap page for regular web clients
pub const WEB_BOOTSTRAP_URL: &str = "https://www.youtube.com/";
/// Bootstrap page for YouTube Music clients
pub const MUSIC_BOOTSTRAP_URL: &str = "https://music.youtube.com/";
/// Bootstrap page for the TV surface
pub const TV_BOOTSTRAP_URL: &str = "https://www.youtube.com/tv";

/// User agents presented by the catalog profiles
pub mod user_agents {
    pub const DESKTOP: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:141.0) Gecko/20100101 Firefox/141.0";
    pub const ANDROID: &str = "com.google.android.youtube/20.10.38 (Linux; U; Android 11) gzip";
    pub const IOS: &str =
        "com.google.ios.youtube/20.10.4 (iPhone16,2; U; CPU iOS 18_3_2 like Mac OS X;)";
    pub const TV: &str = "Mozilla/5.0 (PlayStation; PlayStation 4/12.02) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.4 Safari/605.1.15";
    pub const VR: &str = "com.google.android.apps.youtube.vr.oculus/1.61.48 (Linux; U; Android 12; en_US; Oculus Quest 3; Build/SQ3A.220605.009.A1; Cronet/132.0.6808.3)";
}

/// An immutable API client identity.
///
/// Each instance owns one configuration slot that starts empty and is filled
/// by the first successful bootstrap fetch. Cloning (or any `with_*` builder)
/// produces a new instance with a fresh, empty slot.
///
/// Equality and serialization ignore the API key, the numeric client id and
/// the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(skip)]
    client_id: u32,
    #[serde(rename = "clientName")]
    name: String,
    #[serde(rename = "clientVersion")]
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(rename = "hl", default = "default_language_tag")]
    language_tag: String,
    #[serde(rename = "gl", default = "default_region_code")]
    region_code: String,
    #[serde(rename = "visitorData", default, skip_serializing_if = "Option::is_none")]
    default_visitor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    android_sdk_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    referer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    os_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accept_header: Option<String>,
    #[serde(default = "default_time_zone")]
    time_zone: String,
    #[serde(default)]
    utc_offset_minutes: i32,
    #[serde(skip)]
    api_key: Option<String>,
    #[serde(skip)]
    is_music: bool,
    #[serde(skip)]
    pub(crate) configuration: SingleFlightSlot<ResolvedConfiguration>,
}

fn default_language_tag() -> String {
    "en".to_string()
}

fn default_region_code() -> String {
    "US".to_string()
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

impl ClientProfile {
    /// Create a profile with only the required identity fields set.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            client_id: 0,
            name: name.into(),
            version: version.into(),
            platform: None,
            language_tag: default_language_tag(),
            region_code: default_region_code(),
            default_visitor_id: None,
            android_sdk_version: None,
            user_agent: None,
            referer: None,
            device_make: None,
            device_model: None,
            os_name: None,
            os_version: None,
            accept_header: None,
            time_zone: default_time_zone(),
            utc_offset_minutes: 0,
            api_key: None,
            is_music: false,
            configuration: SingleFlightSlot::default(),
        }
    }

    /// Apply a change and detach from any cached configuration.
    fn edit(mut self, change: impl FnOnce(&mut Self)) -> Self {
        change(&mut self);
        self.configuration = SingleFlightSlot::default();
        self
    }

    pub fn with_client_id(self, client_id: u32) -> Self {
        self.edit(|p| p.client_id = client_id)
    }

    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.edit(|p| p.platform = Some(platform.into()))
    }

    pub fn with_language_tag(self, tag: impl Into<String>) -> Self {
        self.edit(|p| p.language_tag = tag.into())
    }

    pub fn with_region_code(self, code: impl Into<String>) -> Self {
        self.edit(|p| p.region_code = code.into())
    }

    pub fn with_default_visitor_id(self, visitor_id: impl Into<String>) -> Self {
        self.edit(|p| p.default_visitor_id = Some(visitor_id.into()))
    }

    pub fn with_android_sdk_version(self, version: u32) -> Self {
        self.edit(|p| p.android_sdk_version = Some(version))
    }

    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.edit(|p| p.user_agent = Some(user_agent.into()))
    }

    pub fn with_referer(self, referer: impl Into<String>) -> Self {
        self.edit(|p| p.referer = Some(referer.into()))
    }

    pub fn with_device(self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.edit(|p| {
            p.device_make = Some(make.into());
            p.device_model = Some(model.into());
        })
    }

    pub fn with_os(self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.edit(|p| {
            p.os_name = Some(name.into());
            p.os_version = Some(version.into());
        })
    }

    pub fn with_accept_header(self, accept: impl Into<String>) -> Self {
        self.edit(|p| p.accept_header = Some(accept.into()))
    }

    pub fn with_time_zone(self, time_zone: impl Into<String>, utc_offset_minutes: i32) -> Self {
        self.edit(|p| {
            p.time_zone = time_zone.into();
            p.utc_offset_minutes = utc_offset_minutes;
        })
    }

    /// Attach the API key sent as `X-Goog-Api-Key` and `?key=`.
    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        self.edit(|p| p.api_key = Some(api_key.into()))
    }

    pub fn with_music(self, is_music: bool) -> Self {
        self.edit(|p| p.is_music = is_music)
    }

    pub fn client_id(&self) -> u32 {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// The `hl` value
    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    /// The `gl` value
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub fn default_visitor_id(&self) -> Option<&str> {
        self.default_visitor_id.as_deref()
    }

    pub fn android_sdk_version(&self) -> Option<u32> {
        self.android_sdk_version
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }

    pub fn device_make(&self) -> Option<&str> {
        self.device_make.as_deref()
    }

    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    pub fn os_name(&self) -> Option<&str> {
        self.os_name.as_deref()
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    pub fn accept_header(&self) -> Option<&str> {
        self.accept_header.as_deref()
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Whether this profile targets YouTube Music
    pub fn is_music(&self) -> bool {
        self.is_music
    }

    /// The page scraped for this profile's dynamic configuration.
    pub fn bootstrap_url(&self) -> &'static str {
        if self.platform.as_deref() == Some("TV") {
            TV_BOOTSTRAP_URL
        } else if self.is_music {
            MUSIC_BOOTSTRAP_URL
        } else {
            WEB_BOOTSTRAP_URL
        }
    }
}

impl PartialEq for ClientProfile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.platform == other.platform
            && self.language_tag == other.language_tag
            && self.region_code == other.region_code
            && self.default_visitor_id == other.default_visitor_id
            && self.android_sdk_version == other.android_sdk_version
            && self.user_agent == other.user_agent
            && self.referer == other.referer
            && self.device_make == other.device_make
            && self.device_model == other.device_model
            && self.os_name == other.os_name
            && self.os_version == other.os_version
            && self.accept_header == other.accept_header
            && self.time_zone == other.time_zone
            && self.utc_offset_minutes == other.utc_offset_minutes
            && self.is_music == other.is_music
    }
}

impl Eq for ClientProfile {}

/// The `context` object sent in every API request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub client: ClientProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_party: Option<ThirdParty>,
    #[serde(default = "default_user", skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

fn default_user() -> Option<User> {
    Some(User::default())
}

/// Embedding page, for requests made on behalf of an embedded player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdParty {
    pub embed_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub locked_safety_mode: bool,
}

impl Context {
    pub fn new(client: ClientProfile) -> Self {
        Self {
            client,
            third_party: None,
            user: default_user(),
        }
    }

    pub fn with_third_party(mut self, embed_url: impl Into<String>) -> Self {
        self.third_party = Some(ThirdParty {
            embed_url: embed_url.into(),
        });
        self
    }
}

impl From<ClientProfile> for Context {
    fn from(client: ClientProfile) -> Self {
        Self::new(client)
    }
}
