use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging setup
pub struct LoggingConfig;

impl LoggingConfig {
    /// Initialises the global subscriber.
    ///
    /// Environment:
    /// - RUST_LOG: explicit filter (error, warn, info, debug, trace)
    /// - GROCERY_DEBUG: verbose output with file and line locations
    ///
    /// Report output goes to stdout; log lines go to stderr so the two do
    /// not interleave when stdout is redirected.
    ///
    /// ```no_run
    /// use grocery_harness::utils::LoggingConfig;
    ///
    /// LoggingConfig::init();
    /// tracing::info!("ready");
    /// ```
    pub fn init() {
        let is_debug = Self::is_debug();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("grocery_harness=debug,info")
                } else {
                    EnvFilter::new("grocery_harness=info,warn")
                }
            }
        };

        let fmt_layer = if is_debug {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
        };

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();

        if is_debug {
            tracing::debug!("debug logging enabled");
        }
    }

    pub fn is_debug() -> bool {
        env::var("GROCERY_DEBUG").is_ok()
    }
}
