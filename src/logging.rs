//! Logging initialization for the fleet dashboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `FLEETDASH_LOG` environment variable. Falls back to the configured
//! `[logging] log_level` when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Debug level
//! FLEETDASH_LOG=debug fleetdash show
//!
//! # Module-specific filtering
//! FLEETDASH_LOG=fleet_dashboard::store=debug,warn fleetdash move sites-list 0 0
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "FLEETDASH_LOG";

/// Filter from `FLEETDASH_LOG`, or `fallback` when unset or invalid.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_str()))
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(fallback: LogLevel) {
    let _ = fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::xdg::tests::with_env;
    use serial_test::serial;

    #[test]
    fn env_filter_parses_level_directives() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert!(
                EnvFilter::try_new(level.as_str()).is_ok(),
                "failed to parse directive: {}",
                level.as_str()
            );
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        assert!(EnvFilter::try_new("fleet_dashboard::store=debug,warn").is_ok());
    }

    #[test]
    #[serial]
    fn filter_uses_env_when_set() {
        with_env(&[(LOG_ENV, Some("trace"))], || {
            assert_eq!(filter(LogLevel::Error).to_string(), "trace");
        });
    }

    #[test]
    #[serial]
    fn filter_falls_back_when_unset() {
        with_env(&[(LOG_ENV, None)], || {
            assert_eq!(filter(LogLevel::Warn).to_string(), "warn");
        });
    }

    #[test]
    #[serial]
    fn init_twice_does_not_panic() {
        with_env(&[(LOG_ENV, None)], || {
            init(LogLevel::Info);
            init(LogLevel::Debug);
        });
    }
}
