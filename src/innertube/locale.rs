//! Locale overlay: adapts a profile's `hl`/`gl` to the caller's locale.
//!
//! Only values the service accepts are ever produced. Anything else falls
//! back to `en` / `US`. The current locale comes from an injected
//! [`LocaleProvider`] so the overlay itself stays a pure function.

use std::fmt;
use std::str::FromStr;

use super::profile::ClientProfile;
use crate::error::Error;

pub const FALLBACK_LANGUAGE: &str = "en";
pub const FALLBACK_REGION: &str = "US";

/// Script subtags the service does not accept; `zh-Hant-TW` is sent as `zh-TW`.
const STRIPPED_SCRIPTS: &[&str] = &["Hant", "Hans"];

#[rustfmt::skip]
pub const VALID_LANGUAGE_TAGS: &[&str] = &[
    "af", "az", "id", "ms", "ca", "cs", "da", "de", "et", "en-GB", "en", "es", "es-419", "eu",
    "fil", "fr", "fr-CA", "gl", "hr", "zu", "is", "it", "sw", "lt", "hu", "nl", "nl-NL", "no",
    "or", "uz", "pl", "pt-PT", "pt", "ro", "sq", "sk", "sl", "fi", "sv", "bo", "vi", "tr", "bg",
    "ky", "kk", "mk", "mn", "ru", "sr", "uk", "el", "hy", "iw", "ur", "ar", "fa", "ne", "mr",
    "hi", "bn", "pa", "gu", "ta", "te", "kn", "ml", "si", "th", "lo", "my", "ka", "am", "km",
    "zh-CN", "zh-TW", "zh-HK", "ja", "ko",
];

#[rustfmt::skip]
pub const VALID_REGION_CODES: &[&str] = &[
    "DZ", "AR", "AU", "AT", "AZ", "BH", "BD", "BY", "BE", "BO", "BA", "BR", "BG", "KH", "CA",
    "CL", "HK", "CO", "CR", "HR", "CY", "CZ", "DK", "DO", "EC", "EG", "SV", "EE", "FI", "FR",
    "GE", "GH", "GR", "GT", "HN", "HU", "IS", "IN", "ID", "IQ", "IE", "IL", "IT", "JM", "JP",
    "JO", "KZ", "KE", "KR", "KW", "LA", "LV", "LB", "LY", "LI", "LT", "LU", "MK", "MY", "MT",
    "MX", "ME", "MA", "NP", "NL", "NZ", "NI", "NG", "NO", "OM", "PK", "PA", "PG", "PY", "PE",
    "PH", "PL", "PT", "PR", "QA", "RO", "RU", "SA", "SN", "RS", "SG", "SK", "SI", "ZA", "ES",
    "LK", "SE", "CH", "TW", "TZ", "TH", "TN", "TR", "UG", "UA", "AE", "GB", "US", "UY", "VE",
    "VN", "YE", "ZW",
];

/// A parsed locale: language, optional script, optional region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: region.map(str::to_ascii_uppercase),
        }
    }

    /// Parse a BCP-47 tag (`zh-Hant-TW`) or a POSIX locale (`de_DE.UTF-8@euro`).
    ///
    /// Returns `None` for empty input and the `C`/`POSIX` locales.
    pub fn parse(input: &str) -> Option<Self> {
        let base = input
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX")
        {
            return None;
        }

        let mut subtags = base.split(['-', '_']);
        let language = subtags.next()?;
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let mut locale = Self::new(language, None);
        for subtag in subtags {
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let digits = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if alpha && locale.script.is_none() && locale.region.is_none() => {
                    locale.script = Some(titlecase(subtag));
                }
                2 if alpha && locale.region.is_none() => {
                    locale.region = Some(subtag.to_ascii_uppercase());
                }
                3 if digits && locale.region.is_none() => {
                    locale.region = Some(subtag.to_string());
                }
                // Variants and extensions carry nothing we send
                _ => {}
            }
        }
        Some(locale)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// `language[-Script][-REGION]`
    pub fn to_language_tag(&self) -> String {
        let mut tag = self.language.clone();
        for part in [self.script.as_deref(), self.region.as_deref()]
            .into_iter()
            .flatten()
        {
            tag.push('-');
            tag.push_str(part);
        }
        tag
    }
}

fn titlecase(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid_locale(s))
    }
}

/// Supplies the caller's current locale.
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> Locale;
}

/// A fixed locale provides itself.
impl LocaleProvider for Locale {
    fn current_locale(&self) -> Locale {
        self.clone()
    }
}

/// The process locale from `LC_ALL`, `LC_MESSAGES` or `LANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleProvider for SystemLocale {
    fn current_locale(&self) -> Locale {
        locale_from_vars(|name| std::env::var(name).ok())
    }
}

/// Resolve a locale from POSIX locale variables, in precedence order.
fn locale_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find_map(|value| Locale::parse(&value))
        .unwrap_or_else(|| {
            tracing::debug!("No usable locale in environment, using en-US");
            Locale::new(FALLBACK_LANGUAGE, Some(FALLBACK_REGION))
        })
}

/// The `hl` value for a locale: its tag if accepted, else `en`.
pub fn language_tag_for(locale: &Locale) -> &'static str {
    let mut trimmed = locale.clone();
    if trimmed
        .script
        .as_deref()
        .is_some_and(|s| STRIPPED_SCRIPTS.contains(&s))
    {
        trimmed.script = None;
    }

    let tag = trimmed.to_language_tag();
    allowed(VALID_LANGUAGE_TAGS, &tag).unwrap_or(FALLBACK_LANGUAGE)
}

/// The `gl` value for a locale: its region if accepted, else `US`.
pub fn region_code_for(locale: &Locale) -> &'static str {
    locale
        .region()
        .and_then(|region| allowed(VALID_REGION_CODES, region))
        .unwrap_or(FALLBACK_REGION)
}

fn allowed(list: &[&'static str], value: &str) -> Option<&'static str> {
    list.iter().copied().find(|&candidate| candidate == value)
}

/// Return a copy of `profile` with `hl`/`gl` taken from `locale`.
pub fn with_locale(profile: &ClientProfile, locale: &Locale) -> ClientProfile {
    profile
        .clone()
        .with_language_tag(language_tag_for(locale))
        .with_region_code(region_code_for(locale))
}

impl ClientProfile {
    /// See [`with_locale`].
    pub fn with_locale(&self, locale: &Locale) -> ClientProfile {
        with_locale(self, locale)
    }
}
