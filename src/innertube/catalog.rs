//! The fixed catalog of client profiles.
//!
//! Every kind except [`ProfileKind::Web`] is a process-wide singleton, so all
//! callers share its configuration slot and the bootstrap page is fetched at
//! most once per process (until a fetch succeeds). `Web` is `WebNoLang` with
//! the caller's locale applied; it is recomputed on every access because the
//! locale can change at runtime.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::locale::LocaleProvider;
use super::profile::{ClientProfile, user_agents};
use crate::error::Error;

const IOS_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

pub static DEFAULT_WEB_NO_LANG: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("WEB_REMIX", "1.20250310.01.00")
        .with_client_id(67)
        .with_platform("DESKTOP")
        .with_user_agent(user_agents::DESKTOP)
        .with_referer("https://music.youtube.com/")
        .with_music(true)
});

pub static DEFAULT_IOS: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("IOS", "20.10.4")
        .with_client_id(5)
        .with_device("Apple", "iPhone16,2")
        .with_os("iPhone", "18.3.2.22D82")
        .with_accept_header(IOS_ACCEPT)
        .with_user_agent(user_agents::IOS)
        .with_music(true)
});

pub static DEFAULT_ANDROID: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("ANDROID", "20.10.38")
        .with_client_id(3)
        .with_os("Android", "11")
        .with_platform("MOBILE")
        .with_android_sdk_version(30)
        .with_user_agent(user_agents::ANDROID)
        .with_music(true)
});

pub static DEFAULT_TV: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("TVHTML5_SIMPLY_EMBEDDED_PLAYER", "2.0")
        .with_client_id(85)
        .with_user_agent(user_agents::TV)
        .with_referer("https://www.youtube.com/")
        .with_music(true)
});

pub static WEB_CREATOR: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("WEB_CREATOR", "1.20250312.03.01")
        .with_client_id(62)
        .with_user_agent(user_agents::DESKTOP)
        .with_music(true)
});

pub static ONLY_WEB: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("WEB", "2.20250312.04.00")
        .with_client_id(1)
        .with_user_agent(user_agents::DESKTOP)
        .with_music(true)
});

pub static DEFAULT_VR: LazyLock<ClientProfile> = LazyLock::new(|| {
    ClientProfile::new("ANDROID_VR", "1.61.48")
        .with_client_id(28)
        .with_user_agent(user_agents::VR)
});

/// `WebNoLang` localized for the current locale. A new instance per call.
pub fn default_web(locale: &dyn LocaleProvider) -> ClientProfile {
    DEFAULT_WEB_NO_LANG.with_locale(&locale.current_locale())
}

/// The kinds of client identity in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Music web client, localized
    Web,
    /// Music web client with `en`/`US`
    WebNoLang,
    Ios,
    Android,
    Tv,
    Vr,
    WebCreator,
    /// Plain `WEB` client
    OnlyWeb,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 8] = [
        Self::Web,
        Self::WebNoLang,
        Self::Ios,
        Self::Android,
        Self::Tv,
        Self::Vr,
        Self::WebCreator,
        Self::OnlyWeb,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::WebNoLang => "web-no-lang",
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Tv => "tv",
            Self::Vr => "vr",
            Self::WebCreator => "web-creator",
            Self::OnlyWeb => "only-web",
        }
    }

    /// The shared singleton, or `None` for the locale-dependent `Web` kind.
    pub fn singleton(self) -> Option<&'static ClientProfile> {
        let profile: &'static LazyLock<ClientProfile> = match self {
            Self::Web => return None,
            Self::WebNoLang => &DEFAULT_WEB_NO_LANG,
            Self::Ios => &DEFAULT_IOS,
            Self::Android => &DEFAULT_ANDROID,
            Self::Tv => &DEFAULT_TV,
            Self::Vr => &DEFAULT_VR,
            Self::WebCreator => &WEB_CREATOR,
            Self::OnlyWeb => &ONLY_WEB,
        };
        Some(LazyLock::force(profile))
    }

    /// Resolve to a profile. Singletons are borrowed; `Web` is built fresh.
    pub fn profile(self, locale: &dyn LocaleProvider) -> Cow<'static, ClientProfile> {
        match self.singleton() {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(default_web(locale)),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ProfileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| Error::unknown_profile(s))
    }
}
