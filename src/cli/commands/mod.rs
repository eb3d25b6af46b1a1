//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `profiles`: catalog listing, header preview and request-body context
//! - `resolve`: bootstrap fetches and visitor id resolution

mod profiles;
mod resolve;

use std::borrow::Cow;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::innertube::{ClientProfile, ConfigurationFetcher, Locale, ProfileKind, SystemLocale};

pub use profiles::{cmd_context, cmd_headers, cmd_profiles};
pub use resolve::{cmd_bootstrap, cmd_visitor_id};

/// InnerTube request context inspector
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List the profile catalog
    Profiles,
    /// Show the headers and query parameters attached to a profile's requests
    Headers {
        /// Profile name (e.g. web, android, tv)
        profile: ProfileKind,
        /// Locale to apply instead of the configured or system locale
        #[arg(short, long)]
        locale: Option<String>,
        /// API key to attach (or set INNERTUBE_API_KEY env var)
        #[arg(short, long, env = "INNERTUBE_API_KEY")]
        api_key: Option<String>,
        /// Fetch the bootstrap page first to resolve the visitor id
        #[arg(long)]
        resolve: bool,
    },
    /// Print the JSON request-body context for a profile
    Context {
        /// Profile name
        profile: ProfileKind,
        /// Locale to apply instead of the configured or system locale
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Fetch and summarize a profile's bootstrap configuration
    Bootstrap {
        /// Profile name
        profile: ProfileKind,
    },
    /// Resolve visitor ids (all profiles when none are given)
    VisitorId {
        /// Profile names
        profiles: Vec<ProfileKind>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = config::load();

    match &cli.command {
        Commands::Profiles => cmd_profiles(&config),
        Commands::Headers {
            profile,
            locale,
            api_key,
            resolve,
        } => cmd_headers(
            &rt,
            &config,
            *profile,
            locale.as_deref(),
            api_key.as_deref(),
            *resolve,
        ),
        Commands::Context { profile, locale } => cmd_context(&config, *profile, locale.as_deref()),
        Commands::Bootstrap { profile } => cmd_bootstrap(&rt, &config, *profile),
        Commands::VisitorId { profiles } => cmd_visitor_id(&rt, &config, profiles),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// The explicit locale from the command line or config file, if any.
pub(crate) fn locale_override(config: &Config, arg: Option<&str>) -> anyhow::Result<Option<Locale>> {
    match arg.or(config.locale.tag.as_deref()) {
        Some(tag) => Ok(Some(tag.parse()?)),
        None => Ok(None),
    }
}

/// Resolve a catalog profile for the command line.
///
/// Singletons stay borrowed unless something has to be changed on them, so
/// repeated resolution in one process shares their configuration slot.
pub(crate) fn resolve_profile(
    config: &Config,
    kind: ProfileKind,
    locale: Option<&str>,
    api_key: Option<&str>,
) -> anyhow::Result<Cow<'static, ClientProfile>> {
    let mut profile = match locale_override(config, locale)? {
        Some(locale) => kind.profile(&locale),
        None => kind.profile(&SystemLocale),
    };

    // Other kinds keep their catalog hl/gl unless a locale is passed explicitly
    if let Some(tag) = locale.filter(|_| kind != ProfileKind::Web) {
        let locale: Locale = tag.parse()?;
        profile = Cow::Owned(profile.with_locale(&locale));
    }
    if let Some(key) = api_key.or(config.credentials.api_key.as_deref()) {
        profile = Cow::Owned(profile.into_owned().with_api_key(key));
    }
    Ok(profile)
}

/// Build a fetcher honoring the configured timeout.
pub(crate) fn fetcher(config: &Config) -> anyhow::Result<ConfigurationFetcher> {
    Ok(ConfigurationFetcher::http_with_timeout(config.network.timeout())?)
}
