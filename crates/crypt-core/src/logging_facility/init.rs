//! Logging initialization
//!
//! Crypt is driven as a short-lived CLI whose stdout carries command output
//! (snippet listings, marker lines) that scripts parse. Logs therefore go to
//! stderr only, and stay off entirely unless asked for.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Pick the profile a CLI run asked for
    ///
    /// `--log-json` wins over `-v`. Without either flag a set `RUST_LOG`
    /// still turns on human-readable logs. `None` means stay silent.
    pub fn for_cli(json: bool, verbose: bool, rust_log_set: bool) -> Option<Profile> {
        if json {
            Some(Profile::Production)
        } else if verbose || rust_log_set {
            Some(Profile::Development)
        } else {
            None
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup; later calls are ignored. Output goes to stderr so
/// it never mixes with command output on stdout. `RUST_LOG` overrides the
/// profile's filter.
///
/// # Profiles
///
/// - **Development**: human-readable `crypt=debug`, for `-v` runs
/// - **Production**: JSON lines at `crypt=info`, for log shippers
/// - **Test**: a bare registry; assertions install the capture layer
///
/// # Example
///
/// ```
/// use crypt_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("crypt=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("crypt=info")),
                )
                .init();
        }
        Profile::Test => {
            // Test capture is installed separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}
