//! Tracing setup
//!
//! `RUST_LOG` wins when set; otherwise the directives follow the
//! environment. Production writes JSON lines, everything else pretty output
//! with source locations in dev.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "apex_portrait=debug,tower_http=debug,info",
        Environment::Staging => "apex_portrait=debug,tower_http=info,info",
        Environment::Prod => "apex_portrait=info,tower_http=info,warn",
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(env: &Environment) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);
    if env.is_prod() {
        registry.with(fmt_layer.json()).try_init()?;
    } else {
        registry.with(fmt_layer.pretty()).try_init()?;
    }

    tracing::info!(env = ?env, "Logging initialized");
    Ok(())
}
