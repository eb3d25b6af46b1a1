//! Catalog listing, header preview and request-body context commands.

use tokio::runtime::Runtime;

use super::{fetcher, locale_override, resolve_profile};
use crate::config::Config;
use crate::innertube::{Context, ProfileKind, RequestDecoration, SystemLocale};

/// List the profile catalog
pub fn cmd_profiles(config: &Config) -> anyhow::Result<()> {
    let locale = locale_override(config, None)?;

    println!(
        "{:<12} {:<32} {:<18} {:>4}  {}",
        "PROFILE", "CLIENT", "VERSION", "ID", "BOOTSTRAP"
    );
    for kind in ProfileKind::ALL {
        let profile = match &locale {
            Some(locale) => kind.profile(locale),
            None => kind.profile(&SystemLocale),
        };
        println!(
            "{:<12} {:<32} {:<18} {:>4}  {}",
            kind.slug(),
            profile.name(),
            profile.version(),
            profile.client_id(),
            profile.bootstrap_url()
        );
    }
    Ok(())
}

/// Show the headers and query parameters a profile attaches
pub fn cmd_headers(
    rt: &Runtime,
    config: &Config,
    kind: ProfileKind,
    locale: Option<&str>,
    api_key: Option<&str>,
    resolve: bool,
) -> anyhow::Result<()> {
    let profile = resolve_profile(config, kind, locale, api_key)?;

    let visitor_id = if resolve {
        let fetcher = fetcher(config)?;
        rt.block_on(fetcher.resolve_visitor_id(&profile))
    } else {
        profile.visitor_id()
    };

    print!(
        "{}",
        render_decoration(&RequestDecoration::for_profile(&profile, visitor_id.as_deref()))
    );
    Ok(())
}

/// Print the JSON request-body context for a profile
pub fn cmd_context(config: &Config, kind: ProfileKind, locale: Option<&str>) -> anyhow::Result<()> {
    let profile = resolve_profile(config, kind, locale, None)?;
    let context = Context::new(profile.into_owned());
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}

fn render_decoration(decoration: &RequestDecoration) -> String {
    let mut out = String::new();
    for (name, value) in &decoration.headers {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    for (name, value) in &decoration.query {
        out.push_str(&format!("?{}={}\n", name, value));
    }
    out
}
