//! Tracing setup: subscriber installation and structured log events.

pub mod events;

use std::sync::Once;

use anirec_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "ANIREC_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `ANIREC_LOG` takes precedence over `config.log_level`; an invalid
/// directive falls back to the configured level. Output goes to stderr so
/// command output on stdout stays clean.
///
/// Idempotent: only the first call installs anything. If another subscriber
/// is already set (e.g. in tests) the call is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), &config.log_level);

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}

/// Build the filter from an optional env directive and the configured level.
pub fn resolve_filter(env_directive: Option<&str>, default_level: &str) -> EnvFilter {
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
