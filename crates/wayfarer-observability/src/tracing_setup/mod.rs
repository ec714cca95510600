//! Tracing setup: subscriber installation, span macros, and event helpers.
//!
//! Every initializer uses `try_init`, so only the first call in a process
//! installs a global subscriber. Later calls return `false`.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;
use wayfarer_core::config::ObservabilityConfig;
use wayfarer_core::constants::LOG_ENV_VAR;

/// JSON output filtered by `WAYFARER_LOG`, falling back to `info`.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, true)
}

/// JSON output with an explicit filter directive such as `wayfarer=debug`.
pub fn init_tracing_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives), true)
}

/// Level and format from config. `WAYFARER_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
