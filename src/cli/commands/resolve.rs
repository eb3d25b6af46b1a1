//! Bootstrap fetch and visitor id commands.

use tokio::runtime::Runtime;

use super::{fetcher, resolve_profile};
use crate::config::Config;
use crate::innertube::{ProfileKind, ResolvedConfiguration};

/// Fetch and summarize a profile's bootstrap configuration
pub fn cmd_bootstrap(rt: &Runtime, config: &Config, kind: ProfileKind) -> anyhow::Result<()> {
    let profile = resolve_profile(config, kind, None, None)?;
    let fetcher = fetcher(config)?;

    println!("Fetching {}", profile.bootstrap_url());
    let Some(resolved) = rt.block_on(fetcher.get_configuration(&profile)) else {
        anyhow::bail!("No bootstrap configuration resolved for {}", kind);
    };

    print!("{}", summarize(&resolved));
    Ok(())
}

/// Resolve visitor ids concurrently
pub fn cmd_visitor_id(rt: &Runtime, config: &Config, kinds: &[ProfileKind]) -> anyhow::Result<()> {
    let kinds = if kinds.is_empty() {
        ProfileKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };
    let fetcher = fetcher(config)?;
    let profiles = kinds
        .iter()
        .map(|&kind| resolve_profile(config, kind, None, None))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let ids = rt.block_on(futures::future::join_all(
        profiles
            .iter()
            .map(|profile| fetcher.resolve_visitor_id(profile)),
    ));

    for (kind, id) in kinds.iter().zip(ids) {
        println!("{:<12} {}", kind.slug(), id.as_deref().unwrap_or("-"));
    }
    Ok(())
}

fn summarize(resolved: &ResolvedConfiguration) -> String {
    let mut out = String::new();
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();

    out.push_str(&format!(
        "Visitor id:     {}\n",
        or_dash(resolved.visitor_id.as_deref())
    ));
    out.push_str(&format!(
        "Player script:  {}\n",
        or_dash(resolved.player_script_url.as_deref())
    ));
    match &resolved.raw_context {
        Some(client) => out.push_str(&format!(
            "Server client:  {} {} ({}-{})\n",
            client.name(),
            client.version(),
            client.language_tag(),
            client.region_code()
        )),
        None => out.push_str("Server client:  -\n"),
    }
    if !resolved.context_config_names.is_empty() {
        out.push_str(&format!(
            "Player configs: {}\n",
            resolved.context_config_names.join(", ")
        ));
    }
    out
}
