//! Structured logging for the cirrus sky.
//!
//! Console output with timestamps and module paths via the `tracing`
//! ecosystem, plus JSON file logging in debug builds. The log level can be
//! overridden from the settings store or `RUST_LOG`.

use std::path::Path;

use cirrus_settings::SkySettings;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// * `log_dir` - optional directory for JSON log files (debug builds only)
/// * `debug_build` - whether this is a debug build (enables file logging)
/// * `settings` - optional settings whose `debug.log_level` overrides the default
///
/// `RUST_LOG` always wins over both.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, settings: Option<&SkySettings>) {
    let filter_str = match settings {
        Some(settings) if !settings.debug.log_level.is_empty() => {
            settings.debug.log_level.clone()
        }
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis.
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("cirrus.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
