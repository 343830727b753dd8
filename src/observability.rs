//! Tracing setup

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "paidsweep=debug,info" } else { "info" }
}

/// Install the global subscriber. Logs go to stderr so the per-file report
/// on stdout stays clean.
///
/// `RUST_LOG` overrides the `debug` flag from the config file.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for debug in [false, true] {
            assert!(default_filter(debug).parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "paidsweep=debug,info");
    }
}
